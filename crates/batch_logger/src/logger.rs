use crate::batch::BatchAccumulator;
use crate::config::{BatchPolicy, ConfigUpdate, LoggerConfig};
use crate::error::FlushError;
use crate::level::LogLevel;
use crate::msg_fmt;
use crate::queue::AsyncQueue;
use crate::sink::{ConsoleSink, DailyFileSink, LogSink};
use json_value::JsonValue;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// One leveled submission, immutable once created and consumed exactly
/// once. The default level is resolved when the call is made, not when the
/// worker gets around to it.
#[derive(Debug)]
pub struct LogRequest {
    pub level: LogLevel,
    pub message: String,
    pub extra: Option<JsonValue>,
}

/// The logging engine. Construct one where it is needed and pass it
/// around, or use the crate-level functions, which own a process-wide
/// instance.
pub struct Logger {
    inner: Arc<Inner>,
}

struct Inner {
    config: Arc<RwLock<LoggerConfig>>,
    batch: BatchAccumulator,
    queue: Arc<AsyncQueue>,
    console: ConsoleSink,
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_sink(config, BatchPolicy::default(), Box::new(DailyFileSink))
    }

    /// Full construction: batch policy and sink supplied by the caller.
    pub fn with_sink(config: LoggerConfig, policy: BatchPolicy, sink: Box<dyn LogSink>) -> Self {
        let config = Arc::new(RwLock::new(config));
        let batch = BatchAccumulator::new(policy, sink, Arc::clone(&config));
        Logger {
            inner: Arc::new(Inner {
                config,
                batch,
                queue: Arc::new(AsyncQueue::new()),
                console: ConsoleSink,
            }),
        }
    }

    /// Merges the provided fields into the live configuration. Fields left
    /// `None` keep their value; an update with nothing set is a no-op.
    pub fn configure(&self, update: ConfigUpdate) {
        self.inner.write_config().apply(update);
    }

    pub fn config(&self) -> LoggerConfig {
        self.inner.read_config().clone()
    }

    pub fn level(&self) -> LogLevel {
        self.inner.read_config().level
    }

    /// Formats, mirrors and batches on the calling thread. Blocks only if
    /// this very add crosses the batch threshold and triggers the write.
    pub fn log(&self, message: &str, level: Option<LogLevel>, extra: Option<JsonValue>) {
        let level = level.unwrap_or_else(|| self.level());
        self.inner.process(LogRequest {
            level,
            message: message.to_string(),
            extra,
        });
    }

    /// Enqueues and returns immediately; the queue worker formats and
    /// batches in submission order. Never blocks and never errors into the
    /// caller.
    pub fn log_async(&self, message: &str, level: Option<LogLevel>, extra: Option<JsonValue>) {
        let level = level.unwrap_or_else(|| self.level());
        let request = LogRequest {
            level,
            message: message.to_string(),
            extra,
        };
        let inner = Arc::clone(&self.inner);
        Arc::clone(&self.inner.queue).submit(request, move |request| inner.process(request));
    }

    pub fn verbose(&self, message: &str, extra: Option<JsonValue>) {
        self.log(message, Some(LogLevel::Verbose), extra);
    }

    pub fn info(&self, message: &str, extra: Option<JsonValue>) {
        self.log(message, Some(LogLevel::Info), extra);
    }

    pub fn warning(&self, message: &str, extra: Option<JsonValue>) {
        self.log(message, Some(LogLevel::Warning), extra);
    }

    pub fn error(&self, message: &str, extra: Option<JsonValue>) {
        self.log(message, Some(LogLevel::Error), extra);
    }

    pub fn debug(&self, message: &str, extra: Option<JsonValue>) {
        self.log(message, Some(LogLevel::Debug), extra);
    }

    /// Writes out anything the batch still holds.
    pub fn flush(&self) -> Result<(), FlushError> {
        self.inner.batch.flush()
    }

    /// True when every async submission has been drained.
    pub fn is_idle(&self) -> bool {
        self.inner.queue.is_idle()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(LoggerConfig::default())
    }
}

impl Inner {
    /// The one processing path, shared by the sync entry point and the
    /// queue worker: format with the template as configured right now,
    /// mirror to the console, then hand the line to the batch. The mirror
    /// goes first so a threshold flush cannot hold it back.
    fn process(&self, request: LogRequest) {
        let (template, colorized) = {
            let config = self.read_config();
            (config.format.clone(), config.colorized)
        };
        let line = msg_fmt::format_message(
            &template,
            request.level,
            &request.message,
            request.extra.as_ref(),
        );
        self.console.emit(&line, request.level, colorized);
        self.batch.add(line);
    }

    // Lock poisoned by a panicking peer is recovered; logging must never
    // panic out of a log call.
    fn read_config(&self) -> RwLockReadGuard<'_, LoggerConfig> {
        match self.config.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_config(&self) -> RwLockWriteGuard<'_, LoggerConfig> {
        match self.config.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
