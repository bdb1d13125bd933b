//! Configuration file handling for the command line tool.
//!
//! Settings come from `.agtype_codec.json` in the working directory, the
//! `AGTYPE_NAMED_FLOATS` environment variable and command line flags.
//! Flags win over the file, the file wins over the environment.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

use crate::decode::DecodeOptions;
use crate::output::OutputFormat;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".agtype_codec.json";

/// Environment variable toggling named float literals.
pub const NAMED_FLOATS_ENV: &str = "AGTYPE_NAMED_FLOATS";

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Decoding options; absent means "not configured here"
    pub decode: Option<DecodeOptions>,
    /// Default output format
    pub format: Option<OutputFormat>,
}

impl ConfigFile {
    /// Load `.agtype_codec.json` from the current directory.
    pub fn load() -> Result<Self, Box<dyn Error>> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    /// Load configuration from `path`. A missing file yields the empty
    /// configuration; an unreadable or malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            Box::new(io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            )) as Box<dyn Error>
        })?;

        let config: ConfigFile = serde_json::from_str(&content).map_err(|e| {
            Box::new(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid JSON in {}: {}", path.display(), e),
            )) as Box<dyn Error>
        })?;

        Ok(config)
    }
}

/// Effective settings after every source has been consulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub decode: DecodeOptions,
    pub format: OutputFormat,
}

impl Settings {
    /// Resolve settings from flags, the config file and the environment.
    ///
    /// `named_floats_flag` is `true` only when the flag was given; an absent
    /// flag defers to the other sources. `env` looks up environment
    /// variables, normally `|key| std::env::var(key).ok()`.
    pub fn resolve(
        format_flag: Option<OutputFormat>,
        named_floats_flag: bool,
        file: &ConfigFile,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let allow_named_float_literals = if named_floats_flag {
            true
        } else if let Some(options) = file.decode {
            options.allow_named_float_literals
        } else {
            env(NAMED_FLOATS_ENV)
                .and_then(|raw| parse_flag(&raw))
                .unwrap_or_default()
        };

        Self {
            decode: DecodeOptions::with_named_floats(allow_named_float_literals),
            format: format_flag.or(file.format).unwrap_or_default(),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        other => {
            warn!(value = other, "ignoring unrecognised {}", NAMED_FLOATS_ENV);
            None
        }
    }
}
