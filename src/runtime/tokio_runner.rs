//! Tokio adapter that runs passes on the blocking pool.

use std::sync::Arc;

use crate::core::{KernelError, PassOutcome, SharedScheduler, WorkExecutor};

/// Runs scheduler passes without stalling async worker threads.
///
/// Work units execute synchronously, so a pass is moved onto tokio's blocking
/// pool and awaited from there.
#[derive(Clone)]
pub struct TokioRunner {
    handle: Arc<tokio::runtime::Handle>,
}

impl TokioRunner {
    /// Create a runner from a tokio runtime handle.
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self {
            handle: Arc::new(handle),
        }
    }

    /// Create a runner on the runtime the caller is executing in.
    pub fn current() -> Result<Self, KernelError> {
        tokio::runtime::Handle::try_current()
            .map(Self::new)
            .map_err(|e| KernelError::Config(format!("no tokio runtime: {e}")))
    }

    /// Run a sequential pass on the blocking pool.
    pub async fn run_all<E>(&self, scheduler: SharedScheduler<E>) -> Result<PassOutcome, KernelError>
    where
        E: WorkExecutor + 'static,
    {
        self.handle
            .spawn_blocking(move || scheduler.run_all())
            .await
            .map_err(|e| KernelError::PassAborted(e.to_string()))?
    }

    /// Run a parallel pass on the blocking pool.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn run_all_parallel<E>(
        &self,
        scheduler: SharedScheduler<E>,
        workers: usize,
    ) -> Result<PassOutcome, KernelError>
    where
        E: WorkExecutor + 'static,
    {
        self.handle
            .spawn_blocking(move || scheduler.run_all_parallel(workers))
            .await
            .map_err(|e| KernelError::PassAborted(e.to_string()))?
    }
}
