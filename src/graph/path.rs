//! Graph path: an alternating vertex/edge walk.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::{Edge, Vertex};
use crate::error::{AgtypeError, Result};

/// Path of `len()` edges connecting `len() + 1` vertices.
///
/// `edges()[i]` sits between `vertices()[i]` and `vertices()[i + 1]`. Only
/// the counts are checked; edge endpoints are not matched against the
/// neighboring vertex ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Path {
    /// Suffix annotation trailing every path literal.
    pub const SUFFIX: &'static str = "::path";

    /// Build a path, rejecting sequences where `vertices.len() != edges.len() + 1`.
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Result<Self> {
        if vertices.len() != edges.len() + 1 {
            return Err(AgtypeError::format(
                "path structure",
                format!("{} vertices, {} edges", vertices.len(), edges.len()),
            ));
        }
        Ok(Self { vertices, edges })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges in the path.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True for a single-vertex path.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn start(&self) -> &Vertex {
        &self.vertices[0]
    }

    pub fn end(&self) -> &Vertex {
        &self.vertices[self.edges.len()]
    }

    /// Iterate `(from, edge, to)` triples in path order.
    pub fn hops(&self) -> impl Iterator<Item = (&Vertex, &Edge, &Vertex)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| (&self.vertices[i], edge, &self.vertices[i + 1]))
    }

    pub fn into_parts(self) -> (Vec<Vertex>, Vec<Edge>) {
        (self.vertices, self.edges)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.vertices[0])?;
        for (_, edge, to) in self.hops() {
            write!(f, ", {}, {}", edge, to)?;
        }
        write!(f, "]{}", Self::SUFFIX)
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Path", 3)?;
        state.serialize_field("length", &self.len())?;
        state.serialize_field("vertices", &self.vertices)?;
        state.serialize_field("edges", &self.edges)?;
        state.end()
    }
}
