mod execute;
mod execute_tests;
mod output;
mod output_tests;

pub use execute::DecodeResult;

use clap::{Args, ValueEnum};

/// Typed view to read the value as
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Target {
    String,
    Boolean,
    Double,
    Integer,
    Long,
    Decimal,
    List,
    Vertex,
    Edge,
    Path,
    /// Infer the type from the text
    #[default]
    Value,
}

impl Target {
    pub fn name(self) -> &'static str {
        match self {
            Target::String => "string",
            Target::Boolean => "boolean",
            Target::Double => "double",
            Target::Integer => "integer",
            Target::Long => "long",
            Target::Decimal => "decimal",
            Target::List => "list",
            Target::Vertex => "vertex",
            Target::Edge => "edge",
            Target::Path => "path",
            Target::Value => "value",
        }
    }
}

/// Read an agtype value through one of its typed views
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  agtype_codec decode '[1, 2.5, \"x\", null]'           # Infer every element
  agtype_codec decode --as long 5000000000
  agtype_codec decode --as list --named-floats '[\"NaN\", 1]'
  agtype_codec decode --as vertex - < vertex.txt       # Read from stdin
  agtype_codec decode --hex 0134322e35                  # Framed wire buffer")]
pub struct DecodeCmd {
    /// Agtype text, or `-` to read stdin
    pub text: String,

    /// Typed view to read the value as
    #[arg(long = "as", value_enum, default_value_t = Target::Value)]
    pub target: Target,

    /// Read quoted "Infinity", "-Infinity" and "NaN" strings as doubles
    #[arg(long)]
    pub named_floats: bool,

    /// TEXT is a hex dump of a wire buffer, version byte included
    #[arg(long)]
    pub hex: bool,
}
