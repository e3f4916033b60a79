use crate::level::LogLevel;
use std::time::Duration;

pub const DEFAULT_LOG_FORMAT: &str = "[{{level}}] [{{timestamp}}] {{message}}";
pub const DEFAULT_LOG_FILE_PATH: &str = "/logs";
pub const DEFAULT_BATCH_THRESHOLD: usize = 100;
pub const DEFAULT_BATCH_INTERVAL: Duration = Duration::from_millis(1000);

/// Live logger settings, read by every format and flush.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Level applied when a log call does not name one.
    pub level: LogLevel,
    /// Template with `{{level}}`, `{{timestamp}}` and `{{message}}`
    /// placeholders.
    pub format: String,
    /// Log directory, interpreted relative to the working directory; a
    /// leading `/` is allowed and ignored.
    pub file_path: String,
    /// Colorize the console mirror per level.
    pub colorized: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            level: LogLevel::Info,
            format: DEFAULT_LOG_FORMAT.to_string(),
            file_path: DEFAULT_LOG_FILE_PATH.to_string(),
            colorized: false,
        }
    }
}

impl LoggerConfig {
    /// Merges the update into this configuration. Fields left `None` keep
    /// their current value; an update with nothing set changes nothing.
    pub fn apply(&mut self, update: ConfigUpdate) {
        if let Some(level) = update.level {
            self.level = level;
        }
        if let Some(format) = update.format {
            self.format = format;
        }
        if let Some(file_path) = update.file_path {
            self.file_path = file_path;
        }
        if let Some(colorized) = update.colorized {
            self.colorized = colorized;
        }
    }
}

/// Partial configuration passed to `configure`.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub level: Option<LogLevel>,
    pub format: Option<String>,
    pub file_path: Option<String>,
    pub colorized: Option<bool>,
}

/// When the batch accumulator writes: at `threshold` buffered lines, or
/// after `interval` without a new line, whichever comes first.
#[derive(Debug, Clone, Copy)]
pub struct BatchPolicy {
    pub threshold: usize,
    pub interval: Duration,
}

impl Default for BatchPolicy {
    fn default() -> Self {
        BatchPolicy {
            threshold: DEFAULT_BATCH_THRESHOLD,
            interval: DEFAULT_BATCH_INTERVAL,
        }
    }
}
