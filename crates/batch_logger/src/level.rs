use std::fmt::Display;

/// Log levels in their declaration order. The configured level is only the
/// default applied when a call does not name one; no level is ever filtered
/// out by the engine.
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy)]
pub enum LogLevel {
    Verbose,
    Info,
    Warning,
    Error,
    Debug,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Verbose => "VERBOSE",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// ANSI code used by the console mirror when colorization is on.
    pub(crate) fn color_code(self) -> &'static str {
        match self {
            LogLevel::Verbose => "\x1b[34m", // blue
            LogLevel::Info => "\x1b[36m",    // cyan
            LogLevel::Warning => "\x1b[33m", // yellow
            LogLevel::Error => "\x1b[31m",   // red
            LogLevel::Debug => "\x1b[35m",   // magenta
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
