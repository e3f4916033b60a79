use crate::config::{BatchPolicy, LoggerConfig};
use crate::error::FlushError;
use crate::sink::{resolve_log_dir, LogSink};
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::mem;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};
use std::thread;
use std::time::Duration;

enum BatchSignal {
    Touch,
}

/// Collects formatted lines and turns them into one sink append per flush.
/// A flush happens on the add that reaches the threshold, or on the
/// flusher thread once the interval passes without a new add.
///
/// Two states: Idle (empty buffer, flusher parked on the channel) and
/// Accumulating (non-empty buffer, debounce running). Taking the buffer is
/// a swap under its lock, so lines arriving during a write start a fresh
/// buffer instead of being lost or written twice.
pub struct BatchAccumulator {
    shared: Arc<BatchShared>,
    signal_tx: Sender<BatchSignal>,
}

struct BatchShared {
    buffer: Mutex<Vec<String>>,
    threshold: usize,
    sink: Box<dyn LogSink>,
    config: Arc<RwLock<LoggerConfig>>,
}

impl BatchAccumulator {
    pub fn new(
        policy: BatchPolicy,
        sink: Box<dyn LogSink>,
        config: Arc<RwLock<LoggerConfig>>,
    ) -> Self {
        let shared = Arc::new(BatchShared {
            buffer: Mutex::new(Vec::new()),
            threshold: policy.threshold.max(1),
            sink,
            config,
        });

        let (signal_tx, signal_rx) = unbounded();
        let flusher = Arc::clone(&shared);
        thread::spawn(move || flusher.run_flusher(signal_rx, policy.interval));

        BatchAccumulator { shared, signal_tx }
    }

    /// Appends one line. Reaching the threshold writes the whole batch out
    /// on this thread; below it, the inactivity timer is re-armed.
    pub fn add(&self, line: String) {
        let taken = {
            let mut buffer = self.shared.lock_buffer();
            buffer.push(line);
            if buffer.len() >= self.shared.threshold {
                mem::take(&mut *buffer)
            } else {
                Vec::new()
            }
        };

        if taken.is_empty() {
            // Every signal restarts the full debounce interval; a steady
            // trickle below threshold keeps postponing the write.
            let _ = self.signal_tx.send(BatchSignal::Touch);
        } else {
            let (dir, payload) = self.shared.prepare(taken);
            self.shared.sink.append_best_effort(&dir, &payload);
        }
    }

    /// Writes out whatever is buffered, surfacing the write failure
    /// instead of dropping it.
    pub fn flush(&self) -> Result<(), FlushError> {
        let taken = mem::take(&mut *self.shared.lock_buffer());
        if taken.is_empty() {
            return Ok(());
        }
        let (dir, payload) = self.shared.prepare(taken);
        self.shared.sink.append(&dir, &payload)?;
        Ok(())
    }
}

impl BatchShared {
    fn run_flusher(self: Arc<Self>, signals: Receiver<BatchSignal>, interval: Duration) {
        loop {
            // Idle: park until the first line of the next batch arrives.
            if signals.recv().is_err() {
                break; // accumulator dropped
            }
            // Accumulating: each further add restarts the wait.
            loop {
                match signals.recv_timeout(interval) {
                    Ok(BatchSignal::Touch) => continue,
                    Err(RecvTimeoutError::Timeout) => {
                        self.flush_best_effort();
                        break;
                    }
                    Err(RecvTimeoutError::Disconnected) => {
                        self.flush_best_effort();
                        return;
                    }
                }
            }
        }
        // Whatever is still buffered goes out before the thread exits.
        self.flush_best_effort();
    }

    fn flush_best_effort(&self) {
        let taken = mem::take(&mut *self.lock_buffer());
        if taken.is_empty() {
            // A threshold flush already emptied the buffer; the stale
            // timer has nothing to do.
            return;
        }
        let (dir, payload) = self.prepare(taken);
        self.sink.append_best_effort(&dir, &payload);
    }

    /// Joins the taken lines, each newline-terminated, into the payload of
    /// a single append, and resolves the target directory from the live
    /// configuration at flush time.
    fn prepare(&self, lines: Vec<String>) -> (PathBuf, String) {
        let mut payload = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in &lines {
            payload.push_str(line);
            payload.push('\n');
        }
        let dir = {
            let config = match self.config.read() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            resolve_log_dir(&config.file_path)
        };
        (dir, payload)
    }

    // A panic in some other holder must not take logging down with it.
    fn lock_buffer(&self) -> MutexGuard<'_, Vec<String>> {
        match self.buffer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
