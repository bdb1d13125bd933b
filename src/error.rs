//! Error types for agtype decoding and encoding.
//!
//! Only two things can go wrong when reading a graph value: the payload is
//! null, or its text does not have the shape the caller asked for.

use thiserror::Error;

/// Longest fragment of offending input carried inside a [`AgtypeError::Format`].
const MAX_FRAGMENT_CHARS: usize = 64;

/// Errors raised by coercions, the decoder and the wire codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgtypeError {
    /// A coercion was requested on a value whose payload is null.
    #[error("cannot read null agtype as {target}")]
    NullValue { target: &'static str },

    /// The text does not match the grammar required by the coercion.
    #[error("invalid {expected}: `{fragment}`")]
    Format {
        expected: &'static str,
        fragment: String,
    },
}

impl AgtypeError {
    pub fn null(target: &'static str) -> Self {
        Self::NullValue { target }
    }

    /// Build a format error, truncating `fragment` to a readable length.
    pub fn format(expected: &'static str, fragment: impl AsRef<str>) -> Self {
        Self::Format {
            expected,
            fragment: truncate_fragment(fragment.as_ref()),
        }
    }

    pub fn is_null_value(&self) -> bool {
        matches!(self, Self::NullValue { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = AgtypeError> = std::result::Result<T, E>;

fn truncate_fragment(fragment: &str) -> String {
    match fragment.char_indices().nth(MAX_FRAGMENT_CHARS) {
        Some((cut, _)) => format!("{}...", &fragment[..cut]),
        None => fragment.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_null_value_message() {
        let err = AgtypeError::null("vertex");
        assert_eq!(err.to_string(), "cannot read null agtype as vertex");
        assert!(err.is_null_value());
        assert!(!err.is_format());
    }

    #[rstest]
    fn test_format_message_carries_fragment() {
        let err = AgtypeError::format("boolean", "23");
        assert_eq!(err.to_string(), "invalid boolean: `23`");
        assert!(err.is_format());
    }

    #[rstest]
    fn test_long_fragment_is_truncated() {
        let long = "x".repeat(200);
        match AgtypeError::format("list", &long) {
            AgtypeError::Format { fragment, .. } => {
                assert_eq!(fragment.len(), MAX_FRAGMENT_CHARS + 3);
                assert!(fragment.ends_with("..."));
            }
            other => panic!("Expected format error, got {:?}", other),
        }
    }

    #[rstest]
    fn test_truncation_respects_char_boundaries() {
        let long = "é".repeat(100);
        let err = AgtypeError::format("string", &long);
        assert!(err.to_string().contains("..."));
    }
}
