//! Builders to construct a scheduler from configuration.

use crate::config::KernelConfig;
use crate::core::{InMemoryAuditSink, KernelError, Scheduler, SimulatedWork, WorkExecutor};

/// Validate `cfg` and build a scheduler around `executor`.
pub fn build_scheduler<E: WorkExecutor>(
    cfg: &KernelConfig,
    executor: E,
) -> Result<Scheduler<E>, KernelError> {
    cfg.validate().map_err(KernelError::Config)?;
    tracing::debug!(
        "building scheduler: capacity {}MB, {} workers",
        cfg.capacity_mb,
        cfg.worker_count
    );
    Ok(Scheduler::new(cfg.capacity_mb, executor)?.with_workers(cfg.worker_count))
}

/// Build a scheduler that sleeps `cfg.work_duration_ms` per process and
/// records lifecycle events into the returned audit sink.
pub fn build_simulated(
    cfg: &KernelConfig,
) -> Result<(Scheduler<SimulatedWork>, InMemoryAuditSink), KernelError> {
    let audit = InMemoryAuditSink::new(cfg.audit_capacity);
    let scheduler = build_scheduler(cfg, SimulatedWork::new(cfg.work_duration()))?
        .with_audit(Box::new(audit.clone()));
    Ok((scheduler, audit))
}
