/// Errors surfaced by the `validate` front-end.
use std::path::PathBuf;

use thiserror::Error;
use tracing_subscriber::reload;

/// Everything that can stop a `validate` invocation.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// `--loglevel` was not one of the accepted values.
    #[error("invalid log level. Allowed values are INFO, DEBUG, or ERROR")]
    #[allow(dead_code)]
    InvalidArgument {
        /// The rejected value, verbatim.
        value: String,
    },

    /// The log file could not be created. Nothing can be logged after this.
    #[error("cannot create log file '{}': {source}", path.display())]
    ResourceUnavailable {
        /// Path that was being created.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The argument parser rejected the command line.
    #[error(transparent)]
    Command(#[from] clap::Error),

    /// The console sink threshold could not be swapped (subscriber dropped).
    #[error("failed to update console log level: {0}")]
    Reload(#[from] reload::Error),
}

/// Exit code mapping for `ValidateError` variants.
impl ValidateError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidArgument { .. }
            | Self::ResourceUnavailable { .. }
            | Self::Command(_)
            | Self::Reload(_) => 1,
        }
    }
}
