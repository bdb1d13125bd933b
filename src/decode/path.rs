//! Rebuild a `Path` from the flat element sequence of a path literal.
//!
//! Paths start and end with a vertex and alternate vertex, edge, vertex,
//! so with a zero-based index every vertex sits at an even position and
//! every edge at an odd one. The index lives only inside one call.

use tracing::debug;

use crate::error::{AgtypeError, Result};
use crate::graph::{Edge, Path, Vertex};
use crate::value::Value;

/// Interpret even elements as vertices and odd elements as edges.
///
/// Elements may be annotated entities or plain objects of the right shape.
/// Any mismatch aborts the whole path.
pub fn reconstruct_path(elements: Vec<Value>) -> Result<Path> {
    let mut vertices = Vec::with_capacity(elements.len() / 2 + 1);
    let mut edges = Vec::with_capacity(elements.len() / 2);

    for (index, element) in elements.into_iter().enumerate() {
        if index % 2 == 0 {
            vertices.push(positional(index, element, "vertex", |value: Value| Vertex::try_from(value))?);
        } else {
            edges.push(positional(index, element, "edge", |value: Value| Edge::try_from(value))?);
        }
    }

    Path::new(vertices, edges)
}

fn positional<T>(
    index: usize,
    element: Value,
    wanted: &'static str,
    convert: impl FnOnce(Value) -> Result<T>,
) -> Result<T> {
    let found = element.type_name();
    convert(element).map_err(|err| {
        debug!(index, found, wanted, %err, "invalid path structure");
        AgtypeError::format(
            "path structure",
            format!("element {} is {}, expected {}", index, found, wanted),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn v(id: u64) -> Value {
        Value::Vertex(Vertex::new(id, "V"))
    }

    fn e(id: u64, start: u64, end: u64) -> Value {
        Value::Edge(Edge::new(id, "E", start, end))
    }

    #[rstest]
    fn test_single_hop() {
        let path = reconstruct_path(vec![v(0), e(2, 0, 1), v(1)]).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.vertices().len(), 2);
        assert_eq!(path.edges().len(), 1);
        assert_eq!(path.vertices()[0].id.value(), 0);
        assert_eq!(path.vertices()[1].id.value(), 1);
        assert_eq!(path.edges()[0].id.value(), 2);
    }

    #[rstest]
    fn test_single_vertex() {
        let path = reconstruct_path(vec![v(7)]).unwrap();
        assert_eq!(path.len(), 0);
        assert_eq!(path.start().id.value(), 7);
    }

    #[rstest]
    fn test_endpoints_are_not_cross_checked() {
        let path = reconstruct_path(vec![v(0), e(2, 40, 41), v(1)]).unwrap();
        assert_eq!(path.edges()[0].start_id.value(), 40);
    }

    #[rstest]
    fn test_two_vertices_in_a_row_rejected() {
        let err = reconstruct_path(vec![v(0), v(1), v(2)]).unwrap_err();
        assert_eq!(
            err,
            AgtypeError::format("path structure", "element 1 is vertex, expected edge")
        );
    }

    #[rstest]
    fn test_edge_first_rejected() {
        let err = reconstruct_path(vec![e(2, 0, 1), v(1), e(3, 1, 2)]).unwrap_err();
        assert_eq!(
            err,
            AgtypeError::format("path structure", "element 0 is edge, expected vertex")
        );
    }

    #[rstest]
    fn test_scalar_element_rejected() {
        let err = reconstruct_path(vec![v(0), Value::Int(4), v(1)]).unwrap_err();
        assert!(err.to_string().contains("element 1 is integer"));
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![v(0), e(2, 0, 1)])]
    fn test_must_end_with_vertex(#[case] elements: Vec<Value>) {
        let err = reconstruct_path(elements).unwrap_err();
        assert!(err.is_format());
    }
}
