/// `validate` command body: check the requested level and apply it.
use tracing::debug;

use crate::cli::Cli;
use crate::errors::ValidateError;
use crate::logging::{Logger, validate_loglevel};

/// Run `validate`.
///
/// The level is checked before the logger is touched, so a rejected value
/// leaves the console sink at its previous threshold.
///
/// # Errors
///
/// Returns `ValidateError::InvalidArgument` for an unknown `--loglevel`, or
/// `ValidateError::Reload` if the console sink cannot be updated.
pub fn run(cli: &Cli, logger: &Logger) -> Result<(), ValidateError> {
    let level = validate_loglevel(&cli.loglevel)?;
    logger.set_console_level(level)?;

    debug!(
        loglevel = %level,
        console = ?logger.console_level(),
        src = ?cli.src,
        "command line accepted"
    );
    Ok(())
}
