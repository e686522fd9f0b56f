/// Dual-sink logger: JSON lines to a file, human-readable lines to the console.
///
/// The file sink is fixed at DEBUG. The console sink starts at the default
/// level and is swapped in place once the command line has been parsed.
use std::fs::File;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Dispatch;
use tracing::dispatcher::DefaultGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry, reload};

use super::level::LogLevel;
use crate::errors::ValidateError;

/// Log file written in the working directory.
pub const LOG_FILE: &str = "logs.log";

/// Threshold of the file sink, independent of `--loglevel`.
const FILE_LEVEL: LevelFilter = LevelFilter::DEBUG;

/// An explicitly owned logger. Nothing is registered globally; callers
/// activate it for a scope with [`Logger::install`].
pub struct Logger {
    dispatch: Dispatch,
    console: reload::Handle<LevelFilter, Registry>,
    path: PathBuf,
}

impl Logger {
    /// Create the log file (truncating it) and a console sink on stderr.
    ///
    /// # Errors
    ///
    /// Returns `ValidateError::ResourceUnavailable` if the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ValidateError> {
        let ansi = std::io::stderr().is_terminal();
        Self::with_console(path, std::io::stderr, ansi)
    }

    /// Create the log file (truncating it) and a console sink on `console`.
    ///
    /// # Errors
    ///
    /// Returns `ValidateError::ResourceUnavailable` if the file cannot be created.
    pub fn with_console<W>(
        path: impl AsRef<Path>,
        console: W,
        ansi: bool,
    ) -> Result<Self, ValidateError>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| ValidateError::ResourceUnavailable {
            path: path.clone(),
            source,
        })?;

        let (console_filter, handle) = reload::Layer::new(LevelFilter::from(LogLevel::default()));

        let console_layer = fmt::layer()
            .with_writer(console)
            .with_ansi(ansi)
            .with_target(false)
            .with_filter(console_filter);

        let file_layer = fmt::layer()
            .json()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(FILE_LEVEL);

        let subscriber = Registry::default().with(console_layer).with(file_layer);

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            console: handle,
            path,
        })
    }

    /// Make this logger the default for the current thread until the guard drops.
    #[must_use = "the logger is deactivated when the guard is dropped"]
    pub fn install(&self) -> DefaultGuard {
        tracing::dispatcher::set_default(&self.dispatch)
    }

    /// Set the minimum severity of the console sink. The file sink is untouched.
    ///
    /// # Errors
    ///
    /// Returns `ValidateError::Reload` if the subscriber no longer exists.
    pub fn set_console_level(&self, level: LogLevel) -> Result<(), ValidateError> {
        self.console.reload(LevelFilter::from(level))?;
        Ok(())
    }

    /// Current console threshold, if the subscriber is still alive.
    #[must_use]
    pub fn console_level(&self) -> Option<LevelFilter> {
        self.console.clone_current()
    }

    /// Path of the file sink.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
