/// Accepted `--loglevel` values and their mapping onto tracing filters.
use std::fmt;
use std::str::FromStr;

use tracing_subscriber::filter::LevelFilter;

use crate::errors::ValidateError;

/// Console verbosity selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(test, derive(serde::Deserialize))]
#[cfg_attr(test, serde(rename_all = "UPPERCASE"))]
pub enum LogLevel {
    /// Progress messages and above.
    #[default]
    Info,
    /// Everything, including diagnostics.
    Debug,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// The spelling accepted on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ValidateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_loglevel(s)
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

/// Check a raw `--loglevel` value. Matching is case-sensitive.
///
/// # Errors
///
/// Returns `ValidateError::InvalidArgument` for anything other than
/// `INFO`, `DEBUG` or `ERROR`.
pub fn validate_loglevel(value: &str) -> Result<LogLevel, ValidateError> {
    match value {
        "INFO" => Ok(LogLevel::Info),
        "DEBUG" => Ok(LogLevel::Debug),
        "ERROR" => Ok(LogLevel::Error),
        _ => Err(ValidateError::InvalidArgument {
            value: value.to_owned(),
        }),
    }
}
