//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - An `execute` module producing a serializable result
//! - An `output` module rendering that result as a table

mod decode;
pub mod input;
mod path;

pub use decode::{DecodeCmd, DecodeResult, Target};
pub use path::{Hop, PathCmd, PathResult};

use clap::Subcommand;
use std::error::Error;

use crate::config::Settings;
use crate::output::Outputable;

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, settings: &Settings) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read an agtype value as a string, number, list, vertex, edge or path
    Decode(DecodeCmd),

    /// Decode a path and list its hops
    Path(PathCmd),
}

impl Command {
    /// Whether `--named-floats` was given on the command line.
    pub fn named_floats_flag(&self) -> bool {
        match self {
            Command::Decode(cmd) => cmd.named_floats,
            Command::Path(_) => false,
        }
    }

    /// Execute the command and return formatted output
    pub fn run(self, settings: &Settings) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Decode(cmd) => {
                let result = cmd.execute(settings)?;
                Ok(result.format(settings.format))
            }
            Command::Path(cmd) => {
                let result = cmd.execute(settings)?;
                Ok(result.format(settings.format))
            }
        }
    }
}
