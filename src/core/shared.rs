//! Thread-safe handle around a scheduler.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::{KernelError, PassOutcome, ProcessId, Scheduler, Snapshot, WorkExecutor};

/// Cloneable handle that serializes every operation behind one mutex.
///
/// `launch` and `run_all` hold the lock for their whole duration, so
/// reservations and releases from different threads never interleave.
pub struct SharedScheduler<E> {
    inner: Arc<Mutex<Scheduler<E>>>,
}

impl<E> Clone for SharedScheduler<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: WorkExecutor> SharedScheduler<E> {
    /// Wrap an existing scheduler.
    pub fn new(scheduler: Scheduler<E>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(scheduler)),
        }
    }

    /// See [`Scheduler::launch`].
    pub fn launch(&self, name: impl Into<String>, memory: u64) -> Result<ProcessId, KernelError> {
        self.inner.lock().launch(name, memory)
    }

    /// See [`Scheduler::run_all`].
    pub fn run_all(&self) -> Result<PassOutcome, KernelError> {
        self.inner.lock().run_all()
    }

    /// See [`Scheduler::run_all_parallel`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run_all_parallel(&self, workers: usize) -> Result<PassOutcome, KernelError> {
        self.inner.lock().run_all_parallel(workers)
    }

    /// See [`Scheduler::run_all_parallel_configured`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run_all_parallel_configured(&self) -> Result<PassOutcome, KernelError> {
        self.inner.lock().run_all_parallel_configured()
    }

    /// See [`Scheduler::snapshot`].
    pub fn snapshot(&self) -> Snapshot {
        self.inner.lock().snapshot()
    }

    /// `(used, capacity)` in megabytes.
    pub fn usage(&self) -> (u64, u64) {
        self.inner.lock().usage()
    }
}
