/// CLI layer: argument parsing and user-facing output.
pub mod args;
pub mod output;

pub use args::Cli;
pub use output::{write_error_notice, write_greeting};
