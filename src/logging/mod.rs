/// Logging layer: level selection and the file + console logger.
pub mod level;
pub mod logger;

pub use level::{LogLevel, validate_loglevel};
pub use logger::{LOG_FILE, Logger};
