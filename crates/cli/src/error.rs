//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: color error (malformed color string, unknown shade, bad palette file contents)
//! - 11: I/O error (reading a palette file)
//! - 12: input error (unknown level, family or pairing name)
//! - 13: serialization error

use hsl_contrast_core::ContrastError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// A color-level error (malformed color, unknown shade, invalid palette).
    Color(ContrastError),
    /// An I/O error (palette file read).
    Io(String),
    /// A user input error (unknown level, family or pairing name).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Color(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ContrastError> for CliError {
    fn from(e: ContrastError) -> Self {
        match e {
            ContrastError::Io(msg) => CliError::Io(msg),
            ContrastError::UnknownLevel(_)
            | ContrastError::UnknownFamily(_)
            | ContrastError::UnknownPairing(_) => CliError::Input(e.to_string()),
            other => CliError::Color(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
