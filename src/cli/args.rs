/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::Parser;

/// validate — a command-line tool for validating.
#[derive(Debug, Parser)]
#[command(
    name = "validate",
    about = "A command-line tool for validating",
    override_usage = "validate [flags] [src]"
)]
pub struct Cli {
    /// Log level (INFO, DEBUG, ERROR).
    ///
    /// Kept as a raw string so that bad values are reported by the command
    /// itself rather than by the parser.
    #[arg(long, value_name = "LEVEL", default_value = "INFO")]
    pub loglevel: String,

    /// Sources to validate. Accepted but not yet inspected.
    #[arg(value_name = "SRC")]
    pub src: Vec<PathBuf>,
}
