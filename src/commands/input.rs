//! Reading the agtype argument shared by every command.

use std::error::Error;
use std::io::{self, Read};

use crate::agtype::Agtype;
use crate::wire::TextCodec;

/// Argument value meaning "read standard input".
pub const STDIN_MARKER: &str = "-";

/// Turn a command's TEXT argument into an [`Agtype`].
///
/// `-` reads standard input. With `hex`, the text is a hex dump of a framed
/// wire buffer and goes through [`TextCodec::decode_framed`].
pub fn read_agtype(text: &str, hex: bool) -> Result<Agtype, Box<dyn Error>> {
    read_agtype_from(text, hex, io::stdin().lock())
}

pub(crate) fn read_agtype_from(
    text: &str,
    hex: bool,
    mut stdin: impl Read,
) -> Result<Agtype, Box<dyn Error>> {
    let text = if text == STDIN_MARKER {
        let mut buf = String::new();
        stdin.read_to_string(&mut buf)?;
        // A shell heredoc leaves one trailing newline behind.
        buf.truncate(buf.trim_end_matches(['\n', '\r']).len());
        buf
    } else {
        text.to_string()
    };

    if hex {
        let compact: String = text.split_whitespace().collect();
        let raw = hex::decode(&compact).map_err(|e| format!("Invalid hex input: {}", e))?;
        return Ok(TextCodec::decode_framed(&raw)?);
    }

    Ok(Agtype::new(text))
}
