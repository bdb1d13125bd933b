mod cli_tests;
mod execute;
mod output;

pub use execute::{Hop, PathResult};

use clap::Args;

/// Decode a path and list its hops
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  agtype_codec path - < path.txt                   # Path text on stdin
  agtype_codec path --format json \"$(cat path.txt)\"
  agtype_codec path --hex 015b7b226964...          # Framed wire buffer")]
pub struct PathCmd {
    /// Agtype path text, or `-` to read stdin
    pub text: String,

    /// TEXT is a hex dump of a wire buffer, version byte included
    #[arg(long)]
    pub hex: bool,
}
