use std::error::Error;

use serde::Serialize;

use super::{DecodeCmd, Target};
use crate::agtype::Agtype;
use crate::commands::input::read_agtype;
use crate::commands::Execute;
use crate::config::Settings;
use crate::decode::decode;
use crate::value::Value;

/// Result of the decode command execution
#[derive(Debug, Serialize)]
pub struct DecodeResult {
    /// The view that was requested
    pub target: String,
    /// Type of the value actually produced
    pub type_name: String,
    /// Canonical agtype text of the value
    pub rendered: String,
    pub value: Value,
}

impl DecodeResult {
    pub fn new(target: Target, value: Value) -> Self {
        Self {
            target: target.name().to_string(),
            type_name: value.type_name().to_string(),
            rendered: value.to_string(),
            value,
        }
    }
}

impl Execute for DecodeCmd {
    type Output = DecodeResult;

    fn execute(self, settings: &Settings) -> Result<Self::Output, Box<dyn Error>> {
        let agtype = read_agtype(&self.text, self.hex)?;
        let value = coerce(&agtype, self.target, settings)?;
        Ok(DecodeResult::new(self.target, value))
    }
}

/// Run the coercion named by `target` and lift its result into a [`Value`].
pub(crate) fn coerce(agtype: &Agtype, target: Target, settings: &Settings) -> Result<Value, Box<dyn Error>> {
    let named_floats = settings.decode.allow_named_float_literals;
    let value = match target {
        Target::String => Value::String(agtype.get_string()?.to_string()),
        Target::Boolean => Value::Bool(agtype.get_boolean()?),
        Target::Double => Value::Double(agtype.get_double()?),
        Target::Integer => Value::Int(agtype.get_integer()?),
        Target::Long => Value::Long(agtype.get_long()?),
        Target::Decimal => Value::Decimal(agtype.get_decimal()?),
        Target::List => Value::List(agtype.get_list(named_floats)?),
        Target::Vertex => Value::Vertex(agtype.get_vertex()?),
        Target::Edge => Value::Edge(agtype.get_edge()?),
        Target::Path => Value::Path(agtype.get_path()?),
        Target::Value => decode(agtype.get_string()?, settings.decode)?,
    };
    Ok(value)
}
