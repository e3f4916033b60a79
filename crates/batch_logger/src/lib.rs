mod batch;
mod config;
mod error;
mod level;
mod logger;
mod logger_macro;
pub mod msg_fmt;
mod queue;
pub mod sink;

pub use config::{
    BatchPolicy, ConfigUpdate, LoggerConfig, DEFAULT_BATCH_INTERVAL, DEFAULT_BATCH_THRESHOLD,
    DEFAULT_LOG_FILE_PATH, DEFAULT_LOG_FORMAT,
};
pub use batch::BatchAccumulator;
pub use error::FlushError;
pub use level::LogLevel;
pub use logger::{LogRequest, Logger};
pub use queue::AsyncQueue;

// Re-exported so callers can build structured extras without naming the
// crate separately.
pub use json_value::JsonValue;

use std::sync::LazyLock;

static LOGGER: LazyLock<Logger> = LazyLock::new(Logger::default);

/// Merges the given fields into the process-wide logger's configuration.
pub fn configure(update: ConfigUpdate) {
    LOGGER.configure(update);
}

pub fn log(message: &str, level: Option<LogLevel>, extra: Option<JsonValue>) {
    LOGGER.log(message, level, extra);
}

/// Fire-and-forget: enqueued for the queue worker, processed in submission
/// order across all threads.
pub fn log_async(message: &str, level: Option<LogLevel>, extra: Option<JsonValue>) {
    LOGGER.log_async(message, level, extra);
}

pub fn verbose(message: &str, extra: Option<JsonValue>) {
    LOGGER.verbose(message, extra);
}

pub fn info(message: &str, extra: Option<JsonValue>) {
    LOGGER.info(message, extra);
}

pub fn warning(message: &str, extra: Option<JsonValue>) {
    LOGGER.warning(message, extra);
}

pub fn error(message: &str, extra: Option<JsonValue>) {
    LOGGER.error(message, extra);
}

pub fn debug(message: &str, extra: Option<JsonValue>) {
    LOGGER.debug(message, extra);
}

/// Forces out whatever the process-wide logger's batch still holds.
pub fn flush() -> Result<(), FlushError> {
    LOGGER.flush()
}

/// True when the process-wide logger's async queue is fully drained.
pub fn is_idle() -> bool {
    LOGGER.is_idle()
}

pub fn level() -> LogLevel {
    LOGGER.level()
}
