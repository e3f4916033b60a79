use crate::level::LogLevel;
use crate::msg_fmt;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where flushed batches land.
pub trait LogSink: Send + Sync {
    /// Appends the payload as a single write. Failure is the caller's to
    /// handle.
    fn append(&self, dir: &Path, payload: &str) -> io::Result<()>;

    /// Best-effort variant for paths where losing a line beats stalling:
    /// failures go to stderr and nothing is surfaced.
    fn append_best_effort(&self, dir: &Path, payload: &str) {
        if let Err(err) = self.append(dir, payload) {
            eprintln!("Failed to append to log file in {:?}: {}", dir, err);
        }
    }
}

/// Appends to `<dir>/<DD-MM-YYYY>-logs.txt`, named after the local
/// calendar date at call time.
pub struct DailyFileSink;

impl DailyFileSink {
    pub fn file_path(dir: &Path) -> PathBuf {
        dir.join(format!("{}-logs.txt", Local::now().format("%d-%m-%Y")))
    }
}

impl LogSink for DailyFileSink {
    fn append(&self, dir: &Path, payload: &str) -> io::Result<()> {
        // create_dir_all is idempotent, so racing another thread or
        // process on creation cannot fail the append.
        fs::create_dir_all(dir)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(Self::file_path(dir))?;
        file.write_all(payload.as_bytes())
    }
}

pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    fn append(&self, _dir: &Path, _payload: &str) -> io::Result<()> {
        Ok(())
    }
}

/// The console mirror. Failures are diagnostics on stderr, never an error
/// for the logging caller.
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn emit(&self, line: &str, level: LogLevel, colorized: bool) {
        let result = if colorized {
            writeln!(io::stdout(), "{}", msg_fmt::colorize(line, level))
        } else {
            writeln!(io::stdout(), "{}", line)
        };
        if result.is_err() {
            eprintln!("Failed to write log line to stdout!");
        }
    }
}

/// Interprets the configured location relative to the working directory;
/// the default `"/logs"` means `./logs`, not a filesystem root.
pub fn resolve_log_dir(configured: &str) -> PathBuf {
    PathBuf::from(configured.trim_start_matches('/'))
}
