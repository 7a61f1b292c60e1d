//! Work execution capability injected into the scheduler.

use std::time::Duration;

use super::ProcessRecord;

/// Runs one unit of work to completion.
///
/// The scheduler calls `execute` synchronously and does not consider the next
/// entry until it returns. Implementations must be `Send + Sync` so the same
/// executor can serve a parallel pass.
///
/// Any `Fn(&ProcessRecord) + Send + Sync` closure is an executor:
///
/// ```rust
/// use kernel_sim::core::{ProcessRecord, Scheduler};
///
/// let mut scheduler = Scheduler::new(64, |p: &ProcessRecord| {
///     assert!(p.is_ready());
/// })
/// .unwrap();
/// scheduler.launch("job", 8).unwrap();
/// scheduler.run_all().unwrap();
/// ```
pub trait WorkExecutor: Send + Sync {
    /// Execute the work represented by `process`.
    ///
    /// The record is still `Ready` while this runs; the scheduler releases its
    /// memory and terminates it afterwards.
    fn execute(&self, process: &ProcessRecord);
}

impl<F> WorkExecutor for F
where
    F: Fn(&ProcessRecord) + Send + Sync,
{
    fn execute(&self, process: &ProcessRecord) {
        self(process);
    }
}

/// Executor that completes immediately. Useful in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantExecutor;

impl WorkExecutor for InstantExecutor {
    fn execute(&self, _process: &ProcessRecord) {}
}

/// Executor that simulates work by sleeping for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedWork {
    duration: Duration,
}

impl SimulatedWork {
    /// Sleep for `duration` per unit of work.
    pub const fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Configured per-unit duration.
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for SimulatedWork {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl WorkExecutor for SimulatedWork {
    fn execute(&self, process: &ProcessRecord) {
        tracing::debug!(
            "simulating {}ms of work for {} (pid {})",
            self.duration.as_millis(),
            process.name,
            process.id
        );
        std::thread::sleep(self.duration);
    }
}
