use std::error::Error;

use serde::Serialize;

use super::PathCmd;
use crate::commands::input::read_agtype;
use crate::commands::Execute;
use crate::config::Settings;
use crate::graph::{Edge, GraphId, Path, Vertex};

/// One step along a path, in traversal order
#[derive(Debug, Clone, Serialize)]
pub struct Hop {
    pub from_id: GraphId,
    pub from_label: String,
    pub edge_id: GraphId,
    pub edge_label: String,
    pub to_id: GraphId,
    pub to_label: String,
    /// Whether the edge points along the traversal (`from` is its start)
    pub forward: bool,
}

impl Hop {
    fn new(from: &Vertex, edge: &Edge, to: &Vertex) -> Self {
        Self {
            from_id: from.id,
            from_label: from.label.clone(),
            edge_id: edge.id,
            edge_label: edge.label.clone(),
            to_id: to.id,
            to_label: to.label.clone(),
            forward: edge.start_id == from.id,
        }
    }
}

/// Result of the path command execution
#[derive(Debug, Serialize)]
pub struct PathResult {
    pub length: usize,
    pub start_id: GraphId,
    pub end_id: GraphId,
    pub hops: Vec<Hop>,
}

impl From<&Path> for PathResult {
    fn from(path: &Path) -> Self {
        Self {
            length: path.len(),
            start_id: path.start().id,
            end_id: path.end().id,
            hops: path.hops().map(|(from, edge, to)| Hop::new(from, edge, to)).collect(),
        }
    }
}

impl Execute for PathCmd {
    type Output = PathResult;

    fn execute(self, _settings: &Settings) -> Result<Self::Output, Box<dyn Error>> {
        let path = read_agtype(&self.text, self.hex)?.get_path()?;
        Ok(PathResult::from(&path))
    }
}
