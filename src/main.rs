#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! validate — a command-line tool for validating.

mod cli;
mod commands;
mod errors;
mod logging;

use std::process::ExitCode;

use tracing::{debug, error};

use cli::{write_error_notice, write_greeting};
use commands::{Frontend, Outcome};
use logging::{LOG_FILE, Logger};

fn main() -> ExitCode {
    let logger = match Logger::create(LOG_FILE) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };
    let _guard = logger.install();
    debug!(path = %logger.path().display(), "logger ready");

    match Frontend::new().exit_on_help(0).execute(std::env::args_os(), &logger) {
        Ok(Outcome::Completed) => {
            write_greeting();
            ExitCode::SUCCESS
        }
        Ok(Outcome::HelpShown { exit_code }) => ExitCode::from(exit_code),
        Err(err) => {
            error!(error = %err, "Error setting command line");
            write_error_notice();
            ExitCode::from(err.exit_code())
        }
    }
}
