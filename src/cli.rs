//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared options.
//! Individual command definitions are in the `commands` module.

use clap::Parser;

use crate::commands::Command;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Decode and inspect Apache AGE agtype values", long_about = None)]
pub struct Args {
    /// Output format (falls back to .agtype_codec.json, then table)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_format_defaults_to_unset() {
        let args = Args::try_parse_from(["agtype_codec", "decode", "1"]).unwrap();
        assert_eq!(args.format, None);
    }

    #[rstest]
    #[case("table", OutputFormat::Table)]
    #[case("json", OutputFormat::Json)]
    #[case("toon", OutputFormat::Toon)]
    fn test_format_values(#[case] name: &str, #[case] expected: OutputFormat) {
        let args = Args::try_parse_from(["agtype_codec", "--format", name, "path", "-"]).unwrap();
        assert_eq!(args.format, Some(expected));
    }

    #[rstest]
    fn test_unknown_command_rejected() {
        assert!(Args::try_parse_from(["agtype_codec", "import"]).is_err());
    }
}
