/// Command front-end: parses the command line, handles help, runs `validate`.
pub mod validate;

use std::ffi::OsString;

use clap::Parser;
use clap::error::ErrorKind;

use crate::cli::Cli;
use crate::errors::ValidateError;
use crate::logging::Logger;

/// How an invocation ended when no error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command body ran to completion.
    Completed,
    /// Help text was printed and the exit hook fired.
    HelpShown {
        /// Exit code requested by the hook.
        exit_code: u8,
    },
}

/// Entry point for the single `validate` command.
#[derive(Debug, Default)]
pub struct Frontend {
    help_exit: Option<u8>,
}

impl Frontend {
    /// A front-end with no post-help hook: help falls through as a completed run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// After help text is printed, end the invocation with `exit_code`
    /// instead of continuing as a normal run.
    #[must_use]
    pub fn exit_on_help(mut self, exit_code: u8) -> Self {
        self.help_exit = Some(exit_code);
        self
    }

    /// Parse `args` (including the program name) and run the command.
    ///
    /// # Errors
    ///
    /// Returns `ValidateError::Command` for parser errors, otherwise whatever
    /// the command body returns.
    pub fn execute<I, T>(&self, args: I, logger: &Logger) -> Result<Outcome, ValidateError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(err) if is_help(&err) => return Ok(self.show_help(&err)),
            Err(err) => return Err(err.into()),
        };

        validate::run(&cli, logger)?;
        Ok(Outcome::Completed)
    }

    fn show_help(&self, err: &clap::Error) -> Outcome {
        // Help goes to stdout; if that is closed there is nobody to tell.
        let _ = err.print();
        match self.help_exit {
            Some(exit_code) => Outcome::HelpShown { exit_code },
            None => Outcome::Completed,
        }
    }
}

fn is_help(err: &clap::Error) -> bool {
    err.kind() == ErrorKind::DisplayHelp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LOG_FILE;

    fn logger(dir: &tempfile::TempDir) -> Logger {
        Logger::with_console(dir.path().join(LOG_FILE), std::io::sink, false).unwrap()
    }

    #[test]
    fn test_plain_run_completes() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = Frontend::new()
            .exit_on_help(0)
            .execute(["validate"], &logger(&dir))
            .unwrap();
        assert_eq!(outcome, Outcome::Completed);
    }

    #[test]
    fn test_help_fires_exit_hook() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = Frontend::new()
            .exit_on_help(0)
            .execute(["validate", "--help"], &logger(&dir))
            .unwrap();
        assert_eq!(outcome, Outcome::HelpShown { exit_code: 0 });
    }

    #[test]
    fn test_help_without_hook_falls_through() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = Frontend::new()
            .execute(["validate", "--help"], &logger(&dir))
            .unwrap();
        assert_eq!(outcome, Outcome::Completed);
    }

    #[test]
    fn test_unknown_flag_is_command_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Frontend::new()
            .exit_on_help(0)
            .execute(["validate", "--nope"], &logger(&dir));
        assert!(matches!(result, Err(ValidateError::Command(_))));
    }

    #[test]
    fn test_bad_level_is_invalid_argument() {
        let dir = tempfile::tempdir().unwrap();
        let result = Frontend::new()
            .exit_on_help(0)
            .execute(["validate", "--loglevel", "WARN"], &logger(&dir));
        assert!(matches!(result, Err(ValidateError::InvalidArgument { .. })));
    }
}
