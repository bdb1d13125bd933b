//! Graph edge.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::GraphId;
use crate::value::{Properties, Value};

/// A directed edge from `start_id` to `end_id`.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    pub id: GraphId,
    pub start_id: GraphId,
    pub end_id: GraphId,
    pub label: String,
    pub properties: Properties,
}

impl Edge {
    /// Suffix annotation trailing every edge literal.
    pub const SUFFIX: &'static str = "::edge";

    /// Create an edge with no properties.
    pub fn new(
        id: impl Into<GraphId>,
        label: impl Into<String>,
        start_id: impl Into<GraphId>,
        end_id: impl Into<GraphId>,
    ) -> Self {
        Self {
            id: id.into(),
            start_id: start_id.into(),
            end_id: end_id.into(),
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

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Field order matches the engine's own output.
impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"id\": {}, ", self.id)?;
        f.write_str("\"label\": ")?;
        crate::escape::write_quoted(f, &self.label)?;
        write!(f, ", \"end_id\": {}, \"start_id\": {}, ", self.end_id, self.start_id)?;
        f.write_str("\"properties\": ")?;
        crate::value::write_properties(f, &self.properties)?;
        write!(f, "}}{}", Self::SUFFIX)
    }
}
