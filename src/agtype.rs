//! The `Agtype` dynamic value.
//!
//! An `Agtype` holds the raw text of one graph value, or nothing for SQL
//! null. Construction never parses; each `get_*` coercion parses just what
//! it needs, every time it is called.

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::decode::{decode, reconstruct_path, DecodeOptions};
use crate::error::{AgtypeError, Result};
use crate::graph::{Edge, Path, Vertex};
use crate::value::{named_float, Value, NUMERIC_SUFFIX};

/// Raw agtype text with lazy typed views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Agtype {
    raw: Option<String>,
}

impl Agtype {
    /// Wrap raw agtype text without parsing it.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            raw: Some(text.into()),
        }
    }

    /// A null-backed value; every coercion fails with `NullValue`.
    pub const fn null() -> Self {
        Self { raw: None }
    }

    pub fn is_null(&self) -> bool {
        self.raw.is_none()
    }

    pub fn as_raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn into_raw(self) -> Option<String> {
        self.raw
    }

    fn text(&self, target: &'static str) -> Result<&str> {
        self.raw.as_deref().ok_or(AgtypeError::null(target))
    }

    /// The raw text, verbatim.
    pub fn get_string(&self) -> Result<&str> {
        self.text("string")
    }

    /// `true` or `false`, in any letter case.
    pub fn get_boolean(&self) -> Result<bool> {
        let text = self.text("boolean")?.trim();
        if text.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if text.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(AgtypeError::format("boolean", text))
        }
    }

    /// A floating-point number, including `Infinity`, `-Infinity` and `NaN`.
    pub fn get_double(&self) -> Result<f64> {
        let text = self.text("double")?.trim();
        if let Some(f) = named_float(text) {
            return Ok(f);
        }
        text.parse::<f64>()
            .map_err(|_| AgtypeError::format("double", text))
    }

    pub fn get_integer(&self) -> Result<i32> {
        let text = self.text("integer")?.trim();
        text.parse::<i32>()
            .map_err(|_| AgtypeError::format("integer", text))
    }

    pub fn get_long(&self) -> Result<i64> {
        let text = self.text("long")?.trim();
        text.parse::<i64>()
            .map_err(|_| AgtypeError::format("long", text))
    }

    /// An exact decimal. A trailing `::numeric` annotation is accepted.
    pub fn get_decimal(&self) -> Result<BigDecimal> {
        let text = self.text("decimal")?.trim();
        let literal = text.strip_suffix(NUMERIC_SUFFIX).unwrap_or(text);
        BigDecimal::from_str(literal).map_err(|_| AgtypeError::format("decimal", text))
    }

    /// Decode a list; with `allow_named_float_literals`, strings spelling
    /// `Infinity`, `-Infinity` or `NaN` become doubles.
    pub fn get_list(&self, allow_named_float_literals: bool) -> Result<Vec<Value>> {
        let text = self.text("list")?;
        match decode(text, DecodeOptions::with_named_floats(allow_named_float_literals))? {
            Value::List(items) => Ok(items),
            _ => Err(AgtypeError::format("list", text)),
        }
    }

    /// Decode a vertex, with or without its `::vertex` annotation.
    pub fn get_vertex(&self) -> Result<Vertex> {
        let text = self.text("vertex")?;
        match self.decode_entity(text)? {
            value @ (Value::Vertex(_) | Value::Object(_)) => Vertex::try_from(value),
            _ => Err(AgtypeError::format("vertex", text)),
        }
    }

    /// Decode an edge, with or without its `::edge` annotation.
    pub fn get_edge(&self) -> Result<Edge> {
        let text = self.text("edge")?;
        match self.decode_entity(text)? {
            value @ (Value::Edge(_) | Value::Object(_)) => Edge::try_from(value),
            _ => Err(AgtypeError::format("edge", text)),
        }
    }

    /// Decode a path, with or without its `::path` annotation.
    pub fn get_path(&self) -> Result<Path> {
        let text = self.text("path")?;
        match self.decode_entity(text)? {
            Value::Path(path) => Ok(path),
            Value::List(elements) => reconstruct_path(elements),
            _ => Err(AgtypeError::format("path", text)),
        }
    }

    /// Decode whatever the text holds, reading named float strings as doubles.
    pub fn decode(&self) -> Result<Value> {
        let text = self.text("value")?;
        self.decode_entity(text)
    }

    fn decode_entity(&self, text: &str) -> Result<Value> {
        decode(text, DecodeOptions::with_named_floats(true))
    }
}

/// Canonical text; null renders as the agtype `null` literal.
impl fmt::Display for Agtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw.as_deref().unwrap_or("null"))
    }
}

impl From<&str> for Agtype {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Agtype {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<Option<String>> for Agtype {
    fn from(raw: Option<String>) -> Self {
        Self { raw }
    }
}

impl From<&Value> for Agtype {
    fn from(value: &Value) -> Self {
        Self::new(value.to_string())
    }
}

impl From<Value> for Agtype {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl From<&Vertex> for Agtype {
    fn from(vertex: &Vertex) -> Self {
        Self::new(vertex.to_string())
    }
}

impl From<Vertex> for Agtype {
    fn from(vertex: Vertex) -> Self {
        Self::from(&vertex)
    }
}

impl From<&Edge> for Agtype {
    fn from(edge: &Edge) -> Self {
        Self::new(edge.to_string())
    }
}

impl From<Edge> for Agtype {
    fn from(edge: Edge) -> Self {
        Self::from(&edge)
    }
}

impl From<&Path> for Agtype {
    fn from(path: &Path) -> Self {
        Self::new(path.to_string())
    }
}

impl From<Path> for Agtype {
    fn from(path: Path) -> Self {
        Self::from(&path)
    }
}
