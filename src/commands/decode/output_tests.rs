//! Output formatting tests for decode command.

#[cfg(test)]
mod tests {
    use super::super::execute::DecodeResult;
    use super::super::Target;
    use crate::graph::{Edge, Vertex};
    use crate::value::Value;
    use rstest::{fixture, rstest};

    // =========================================================================
    // Expected outputs
    // =========================================================================

    const SCALAR_TABLE: &str = "\
Decoded as: long (long)

5000000000";

    const LIST_TABLE: &str = "\
Decoded as: value (list)

3 element(s):
  [0] integer: 1
  [1] string: \"two\"
  [2] double: NaN";

    const VERTEX_TABLE: &str = "\
Decoded as: vertex (vertex)

Vertex 3 :City
  name: \"Oslo\"
  population: 709000";

    const EDGE_TABLE: &str = "\
Decoded as: edge (edge)

Edge 9 :ROAD (3 -> 4)
  (no properties)";

    // =========================================================================
    // Fixtures
    // =========================================================================

    #[fixture]
    fn scalar_result() -> DecodeResult {
        DecodeResult::new(Target::Long, Value::Long(5_000_000_000))
    }

    #[fixture]
    fn list_result() -> DecodeResult {
        DecodeResult::new(
            Target::Value,
            Value::List(vec![Value::Int(1), Value::from("two"), Value::Double(f64::NAN)]),
        )
    }

    #[fixture]
    fn vertex_result() -> DecodeResult {
        let vertex = Vertex::new(3_u64, "City")
            .with_property("name", "Oslo")
            .with_property("population", 709_000);
        DecodeResult::new(Target::Vertex, Value::Vertex(vertex))
    }

    #[fixture]
    fn edge_result() -> DecodeResult {
        DecodeResult::new(Target::Edge, Value::Edge(Edge::new(9_u64, "ROAD", 3_u64, 4_u64)))
    }

    // =========================================================================
    // Table format tests
    // =========================================================================

    crate::output_table_test! {
        test_name: test_to_table_scalar,
        fixture: scalar_result,
        fixture_type: DecodeResult,
        expected: SCALAR_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_list,
        fixture: list_result,
        fixture_type: DecodeResult,
        expected: LIST_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_vertex,
        fixture: vertex_result,
        fixture_type: DecodeResult,
        expected: VERTEX_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_edge,
        fixture: edge_result,
        fixture_type: DecodeResult,
        expected: EDGE_TABLE,
    }

    // =========================================================================
    // JSON format tests
    // =========================================================================

    crate::output_json_test! {
        test_name: test_format_json_vertex,
        fixture: vertex_result,
        fixture_type: DecodeResult,
        assertions: {
            "target": "vertex",
            "type_name": "vertex",
            "value": serde_json::json!({
                "id": 3,
                "label": "City",
                "properties": {"name": "Oslo", "population": 709000}
            }),
        },
    }

    crate::output_json_test! {
        test_name: test_format_json_named_float,
        fixture: list_result,
        fixture_type: DecodeResult,
        assertions: {
            "value": serde_json::json!([1, "two", "NaN"]),
        },
    }

    // =========================================================================
    // Toon format tests
    // =========================================================================

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: scalar_result,
        fixture_type: DecodeResult,
        contains: ["target: long", "type_name: long", "value: 5000000000"],
    }
}
