//! Vertex and edge schemas over decoded objects.
//!
//! Keys match case-insensitively and unknown keys are ignored. A missing
//! or null `properties` key yields an empty property map; string
//! properties spelling a named float literal become doubles.

use crate::error::{AgtypeError, Result};
use crate::graph::{Edge, GraphId, Vertex};
use crate::value::{promote_properties, Properties, Value};

/// Remove `key` from `map`, falling back to a case-insensitive match.
fn take(map: &mut Properties, key: &str) -> Option<Value> {
    if let Some(value) = map.remove(key) {
        return Some(value);
    }
    let found = map.keys().find(|k| k.eq_ignore_ascii_case(key)).cloned()?;
    map.remove(&found)
}

fn take_id(map: &mut Properties, key: &'static str, expected: &'static str) -> Result<GraphId> {
    match take(map, key) {
        Some(value) => value
            .as_u64()
            .map(GraphId::new)
            .ok_or_else(|| AgtypeError::format(expected, format!("{}: {}", key, value))),
        None => Err(AgtypeError::format(expected, format!("missing `{}`", key))),
    }
}

fn take_label(map: &mut Properties, expected: &'static str) -> Result<String> {
    match take(map, "label") {
        Some(Value::String(label)) => Ok(label),
        Some(other) => Err(AgtypeError::format(expected, format!("label: {}", other))),
        None => Err(AgtypeError::format(expected, "missing `label`")),
    }
}

fn take_properties(map: &mut Properties, expected: &'static str) -> Result<Properties> {
    match take(map, "properties") {
        Some(Value::Object(props)) => Ok(promote_properties(props)),
        Some(Value::Null) | None => Ok(Properties::new()),
        Some(other) => Err(AgtypeError::format(expected, format!("properties: {}", other))),
    }
}

impl TryFrom<Properties> for Vertex {
    type Error = AgtypeError;

    fn try_from(mut map: Properties) -> Result<Self> {
        const EXPECTED: &str = "vertex";
        Ok(Vertex {
            id: take_id(&mut map, "id", EXPECTED)?,
            label: take_label(&mut map, EXPECTED)?,
            properties: take_properties(&mut map, EXPECTED)?,
        })
    }
}

impl TryFrom<Properties> for Edge {
    type Error = AgtypeError;

    fn try_from(mut map: Properties) -> Result<Self> {
        const EXPECTED: &str = "edge";
        Ok(Edge {
            id: take_id(&mut map, "id", EXPECTED)?,
            start_id: take_id(&mut map, "start_id", EXPECTED)?,
            end_id: take_id(&mut map, "end_id", EXPECTED)?,
            label: take_label(&mut map, EXPECTED)?,
            properties: take_properties(&mut map, EXPECTED)?,
        })
    }
}

/// Accepts an already annotated vertex or a plain object with vertex shape.
impl TryFrom<Value> for Vertex {
    type Error = AgtypeError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Vertex(v) => Ok(v),
            Value::Object(map) => Vertex::try_from(map),
            other => Err(AgtypeError::format("vertex", other.to_string())),
        }
    }
}

/// Accepts an already annotated edge or a plain object with edge shape.
impl TryFrom<Value> for Edge {
    type Error = AgtypeError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Edge(e) => Ok(e),
            Value::Object(map) => Edge::try_from(map),
            other => Err(AgtypeError::format("edge", other.to_string())),
        }
    }
}
