//! Decoder from agtype text to [`Value`] trees.
//!
//! Each call builds its own parser state; nothing is shared between calls,
//! so values can be decoded concurrently from any number of threads.

mod entity;
mod number;
mod parser;
mod path;

pub use number::infer_number;
pub use path::reconstruct_path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::value::Value;
use parser::Parser;

/// Options controlling type inference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Read quoted `"Infinity"`, `"-Infinity"` and `"NaN"` as doubles.
    pub allow_named_float_literals: bool,
}

impl DecodeOptions {
    pub const fn with_named_floats(allow: bool) -> Self {
        Self {
            allow_named_float_literals: allow,
        }
    }
}

/// Decode a complete agtype literal.
///
/// Fails with a format error carrying the offending fragment on the first
/// grammar violation; no partial value is ever returned.
pub fn decode(text: &str, options: DecodeOptions) -> Result<Value> {
    Parser::new(text, options)
        .parse_document()
        .inspect_err(|err| debug!(%err, len = text.len(), "agtype decode failed"))
}
