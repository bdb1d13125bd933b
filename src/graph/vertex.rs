//! Graph vertex.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::GraphId;
use crate::escape::write_quoted;
use crate::value::{write_properties, Properties, Value};

/// A vertex as rendered by the engine: `{"id": .., "label": .., "properties": {..}}::vertex`.
#[derive(Debug, Clone, Serialize)]
pub struct Vertex {
    pub id: GraphId,
    pub label: String,
    pub properties: Properties,
}

impl Vertex {
    /// Suffix annotation trailing every vertex literal.
    pub const SUFFIX: &'static str = "::vertex";

    /// Create a vertex with no properties.
    pub fn new(id: impl Into<GraphId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            properties: Properties::new(),
        }
    }

    /// Builder-style property setter.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"id\": {}, \"label\": ", self.id)?;
        write_quoted(f, &self.label)?;
        f.write_str(", \"properties\": ")?;
        write_properties(f, &self.properties)?;
        write!(f, "}}{}", Self::SUFFIX)
    }
}
