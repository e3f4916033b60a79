use crate::logger::LogRequest;
use crossbeam_queue::SegQueue;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

/// Unbounded submission queue with a single drainer. Any number of threads
/// may enqueue; the submit that finds no worker active spawns one, and the
/// worker processes strictly in queue order until it observes empty.
pub struct AsyncQueue {
    pending: SegQueue<LogRequest>,
    worker_active: AtomicBool,
}

impl AsyncQueue {
    pub fn new() -> Self {
        AsyncQueue {
            pending: SegQueue::new(),
            worker_active: AtomicBool::new(false),
        }
    }

    /// Enqueues and returns immediately. Acceptance, not completion.
    pub fn submit<F>(self: Arc<Self>, request: LogRequest, handler: F)
    where
        F: Fn(LogRequest) + Send + 'static,
    {
        self.pending.push(request);
        if self.try_activate() {
            let queue = Arc::clone(&self);
            thread::spawn(move || queue.drain(handler));
        }
    }

    fn try_activate(&self) -> bool {
        self.worker_active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Sole-consumer drain loop. Deactivation re-checks the queue: a
    /// submission landing between the last pop and the flag store is
    /// either picked up here by re-activating, or by the worker that
    /// submission's thread just spawned. Either way it is never stranded.
    fn drain<F>(&self, handler: F)
    where
        F: Fn(LogRequest),
    {
        loop {
            while let Some(request) = self.pending.pop() {
                handler(request);
            }
            self.worker_active.store(false, Ordering::Release);
            if self.pending.is_empty() {
                return;
            }
            if !self.try_activate() {
                return;
            }
        }
    }

    /// True when nothing is queued and no worker is running.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty() && !self.worker_active.load(Ordering::Acquire)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for AsyncQueue {
    fn default() -> Self {
        Self::new()
    }
}
