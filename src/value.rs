//! Dynamically typed values produced by the agtype decoder.
//!
//! Numbers keep the narrowest representation the decoder inferred for
//! them (`Int` before `Long` before `Decimal` before `Double`), so callers
//! can observe exactly which width a literal fitted.

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use bigdecimal::{BigDecimal, ToPrimitive};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::escape::write_quoted;
use crate::graph::{Edge, Path, Vertex};

/// Property map of a vertex or edge, also used for plain decoded objects.
pub type Properties = BTreeMap<String, Value>;

/// Suffix annotating arbitrary-precision numerics.
pub const NUMERIC_SUFFIX: &str = "::numeric";

/// Text forms of the floating-point specials.
pub const INFINITY: &str = "Infinity";
pub const NEG_INFINITY: &str = "-Infinity";
pub const NAN: &str = "NaN";

/// A decoded agtype element.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Decimal(BigDecimal),
    Double(f64),
    String(String),
    List(Vec<Value>),
    Object(Properties),
    Vertex(Vertex),
    Edge(Edge),
    Path(Path),
}

/// Match `s` case-insensitively against the three named float literals.
pub fn named_float(s: &str) -> Option<f64> {
    if s.eq_ignore_ascii_case(INFINITY) {
        Some(f64::INFINITY)
    } else if s.eq_ignore_ascii_case(NEG_INFINITY) {
        Some(f64::NEG_INFINITY)
    } else if s.eq_ignore_ascii_case(NAN) {
        Some(f64::NAN)
    } else {
        None
    }
}

impl Value {
    /// Get type name for debugging/error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Long(_) => "long",
            Value::Decimal(_) => "decimal",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Object(_) => "object",
            Value::Vertex(_) => "vertex",
            Value::Edge(_) => "edge",
            Value::Path(_) => "path",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extract as i64 if the value is an integer of either width.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(i64::from(*i)),
            Value::Long(l) => Some(*l),
            Value::Decimal(d) if d.is_integer() => d.to_i64(),
            _ => None,
        }
    }

    /// Extract as u64, the representation of graph ids.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Int(i) => u64::try_from(*i).ok(),
            Value::Long(l) => u64::try_from(*l).ok(),
            Value::Decimal(d) if d.is_integer() => d.to_u64(),
            _ => None,
        }
    }

    /// Extract as f64 from any numeric variant.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(f64::from(*i)),
            Value::Long(l) => Some(*l as f64),
            Value::Decimal(d) => d.to_f64(),
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Properties> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Replace strings spelling a named float literal with the float itself,
    /// recursing through lists and objects.
    pub fn promote_named_floats(self) -> Value {
        match self {
            Value::String(s) => match named_float(&s) {
                Some(f) => Value::Double(f),
                None => Value::String(s),
            },
            Value::List(items) => {
                Value::List(items.into_iter().map(Value::promote_named_floats).collect())
            }
            Value::Object(map) => Value::Object(promote_properties(map)),
            other => other,
        }
    }

    /// Convert to a `serde_json::Value` for JSON tooling.
    ///
    /// Non-finite doubles become their named-float strings.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub(crate) fn promote_properties(map: Properties) -> Properties {
    map.into_iter()
        .map(|(k, v)| (k, v.promote_named_floats()))
        .collect()
}

/// Write a property map as `{"key": value, ...}`.
pub fn write_properties<W: Write>(out: &mut W, properties: &Properties) -> fmt::Result {
    out.write_char('{')?;
    for (i, (key, value)) in properties.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_quoted(out, key)?;
        write!(out, ": {}", value)?;
    }
    out.write_char('}')
}

fn write_double<W: Write>(out: &mut W, d: f64) -> fmt::Result {
    if d.is_nan() {
        out.write_str(NAN)
    } else if d.is_infinite() {
        out.write_str(if d > 0.0 { INFINITY } else { NEG_INFINITY })
    } else {
        // Debug keeps a fraction or exponent, so the literal never reads back as an integer.
        write!(out, "{:?}", d)
    }
}

fn write_decimal<W: Write>(out: &mut W, d: &BigDecimal) -> fmt::Result {
    let text = d.to_string();
    let plain = matches!(
        crate::decode::infer_number(&text),
        Some(Value::Decimal(_))
    );
    out.write_str(&text)?;
    if !plain {
        out.write_str(NUMERIC_SUFFIX)?;
    }
    Ok(())
}

/// Canonical agtype text. Decoding the output yields an equal value, except
/// that a finite double inside the decimal range reads back as a decimal.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Long(l) => write!(f, "{}", l),
            Value::Decimal(d) => write_decimal(f, d),
            Value::Double(d) => write_double(f, *d),
            Value::String(s) => write_quoted(f, s),
            Value::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_char(']')
            }
            Value::Object(map) => write_properties(f, map),
            Value::Vertex(v) => write!(f, "{}", v),
            Value::Edge(e) => write!(f, "{}", e),
            Value::Path(p) => write!(f, "{}", p),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i32(*i),
            Value::Long(l) => serializer.serialize_i64(*l),
            Value::Decimal(d) => match d.to_f64() {
                Some(f) if f.is_finite() => serializer.serialize_f64(f),
                _ => serializer.serialize_str(&d.to_string()),
            },
            Value::Double(d) if d.is_finite() => serializer.serialize_f64(*d),
            Value::Double(d) => {
                let mut text = String::new();
                // Writing into a String cannot fail.
                let _ = write_double(&mut text, *d);
                serializer.serialize_str(&text)
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    state.serialize_entry(k, v)?;
                }
                state.end()
            }
            Value::Vertex(v) => v.serialize(serializer),
            Value::Edge(e) => e.serialize(serializer),
            Value::Path(p) => p.serialize(serializer),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i)
    }
}

impl From<i64> for Value {
    fn from(l: i64) -> Self {
        Value::Long(l)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<BigDecimal> for Value {
    fn from(d: BigDecimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Properties> for Value {
    fn from(map: Properties) -> Self {
        Value::Object(map)
    }
}

impl From<Vertex> for Value {
    fn from(v: Vertex) -> Self {
        Value::Vertex(v)
    }
}

impl From<Edge> for Value {
    fn from(e: Edge) -> Self {
        Value::Edge(e)
    }
}

impl From<Path> for Value {
    fn from(p: Path) -> Self {
        Value::Path(p)
    }
}
