//! Admission control and round-robin execution.

use crate::core::{
    build_audit_event, AuditAction, AuditSink, KernelError, MemoryAllocator, ProcessId,
    ProcessRecord, ProcessState, ProcessTable, Snapshot, StatusReporter, WorkExecutor,
};

/// Ordered `(id, final state)` pairs produced by one pass.
pub type PassOutcome = Vec<(ProcessId, ProcessState)>;

/// Scheduler owning a memory pool and a process table.
///
/// Memory is reserved at [`launch`](Self::launch) and held until the process
/// is retired by a pass. Passes visit `Ready` processes in insertion order, so
/// scheduling is deterministic and starvation-free.
///
/// An invariant breach observed during a pass poisons the instance: later
/// `launch`/`run_all` calls return [`KernelError::Poisoned`], while
/// [`snapshot`](Self::snapshot) keeps working for inspection.
pub struct Scheduler<E> {
    allocator: MemoryAllocator,
    table: ProcessTable,
    executor: E,
    audit: Option<Box<dyn AuditSink>>,
    poisoned: Option<String>,
    workers: usize,
}

impl<E: WorkExecutor> Scheduler<E> {
    /// Create a scheduler over a pool of `capacity` megabytes.
    pub fn new(capacity: u64, executor: E) -> Result<Self, KernelError> {
        Ok(Self {
            allocator: MemoryAllocator::new(capacity)?,
            table: ProcessTable::new(),
            executor,
            audit: None,
            poisoned: None,
            workers: num_cpus::get(),
        })
    }

    /// Set the worker count used by
    /// [`run_all_parallel_configured`](Self::run_all_parallel_configured).
    /// Zero is treated as one.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Worker count for configured parallel passes. Defaults to the number of
    /// CPUs.
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Admit a process if its memory fits.
    ///
    /// Reservation happens before the table is touched, so a denied launch
    /// leaves no record behind and consumes no id.
    pub fn launch(&mut self, name: impl Into<String>, memory: u64) -> Result<ProcessId, KernelError> {
        self.ensure_healthy()?;
        let name = name.into();

        if let Err(err) = self.allocator.reserve(memory) {
            tracing::warn!("admission denied for {} ({}MB): {}", name, memory, err);
            self.record_audit(None, &name, AuditAction::Reject, memory);
            return Err(err);
        }

        let id = self.table.create(name.clone(), memory);
        tracing::info!(
            "launched {} (pid {}) | memory {}MB, used {}/{}MB",
            name,
            id,
            memory,
            self.allocator.used(),
            self.allocator.capacity()
        );
        self.record_audit(Some(id), &name, AuditAction::Launch, memory);
        Ok(id)
    }

    /// Run one round-robin pass over every `Ready` process.
    ///
    /// The set of processes is fixed when the pass starts. Each one executes
    /// to completion, then its memory is released and it is terminated,
    /// before the next one is considered.
    pub fn run_all(&mut self) -> Result<PassOutcome, KernelError> {
        self.ensure_healthy()?;
        let pending = self.table.ready_ids();
        tracing::info!("round-robin pass starting over {} ready processes", pending.len());

        let mut outcome = Vec::with_capacity(pending.len());
        for id in pending {
            let record = self.table.get(id)?.clone();
            self.record_audit(Some(id), &record.name, AuditAction::Execute, record.memory_reserved);
            tracing::debug!("running {} (pid {})", record.name, id);
            self.executor.execute(&record);
            outcome.push((id, self.retire(&record)?));
        }
        Ok(outcome)
    }

    /// Run one pass with work executed on up to `workers` threads.
    ///
    /// Execution overlaps, but memory is released and processes are
    /// terminated in table order once all work has finished, so the
    /// observable outcome matches [`run_all`](Self::run_all).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run_all_parallel(&mut self, workers: usize) -> Result<PassOutcome, KernelError> {
        self.ensure_healthy()?;
        let pending: Vec<ProcessRecord> = self
            .table
            .all()
            .iter()
            .filter(|r| r.is_ready())
            .cloned()
            .collect();
        let workers = workers.clamp(1, pending.len().max(1));
        tracing::info!(
            "parallel pass starting over {} ready processes on {} workers",
            pending.len(),
            workers
        );

        for record in &pending {
            self.record_audit(Some(record.id), &record.name, AuditAction::Execute, record.memory_reserved);
        }

        let executor = &self.executor;
        std::thread::scope(|scope| {
            let (tx, rx) = crossbeam_channel::unbounded::<&ProcessRecord>();
            for _ in 0..workers {
                let rx = rx.clone();
                scope.spawn(move || {
                    for record in rx.iter() {
                        tracing::debug!("running {} (pid {})", record.name, record.id);
                        executor.execute(record);
                    }
                });
            }
            for record in &pending {
                if tx.send(record).is_err() {
                    break;
                }
            }
        });

        let mut outcome = Vec::with_capacity(pending.len());
        for record in &pending {
            outcome.push((record.id, self.retire(record)?));
        }
        Ok(outcome)
    }

    /// Parallel pass using the configured worker count.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run_all_parallel_configured(&mut self) -> Result<PassOutcome, KernelError> {
        self.run_all_parallel(self.workers)
    }

    /// Read-only view of the current state.
    pub fn reporter(&self) -> StatusReporter<'_> {
        StatusReporter::new(&self.allocator, &self.table)
    }

    /// Copy the current state.
    pub fn snapshot(&self) -> Snapshot {
        self.reporter().snapshot()
    }

    /// `(used, capacity)` in megabytes.
    pub const fn usage(&self) -> (u64, u64) {
        self.allocator.usage()
    }

    /// Look up a process by id.
    pub fn process(&self, id: ProcessId) -> Result<&ProcessRecord, KernelError> {
        self.table.get(id)
    }

    /// Reason the scheduler was poisoned, if it was.
    pub fn poison_reason(&self) -> Option<&str> {
        self.poisoned.as_deref()
    }

    /// The injected executor.
    pub const fn executor(&self) -> &E {
        &self.executor
    }

    // Release then terminate. Either step failing means internal sequencing
    // is broken, so the instance is poisoned rather than left half-updated
    // with a plain error. The table is checked first so a poisoned snapshot
    // never shows memory released for a record the table still disputes.
    fn retire(&mut self, record: &ProcessRecord) -> Result<ProcessState, KernelError> {
        let ready = match self.table.get(record.id) {
            Ok(current) => current.is_ready(),
            Err(err) => return Err(self.poison(&err)),
        };
        if !ready {
            return Err(self.poison(&KernelError::AlreadyTerminated(record.id)));
        }
        if let Err(err) = self.allocator.release(record.memory_reserved) {
            return Err(self.poison(&err));
        }
        if let Err(err) = self.table.mark_terminated(record.id) {
            return Err(self.poison(&err));
        }
        tracing::info!(
            "terminated {} (pid {}) | released {}MB, used {}/{}MB",
            record.name,
            record.id,
            record.memory_reserved,
            self.allocator.used(),
            self.allocator.capacity()
        );
        self.record_audit(Some(record.id), &record.name, AuditAction::Terminate, record.memory_reserved);
        Ok(ProcessState::Terminated)
    }

    fn poison(&mut self, cause: &KernelError) -> KernelError {
        let reason = cause.to_string();
        tracing::error!("invariant breach, poisoning scheduler: {}", reason);
        self.poisoned = Some(reason.clone());
        KernelError::Poisoned(reason)
    }

    fn ensure_healthy(&self) -> Result<(), KernelError> {
        match &self.poisoned {
            Some(reason) => Err(KernelError::Poisoned(reason.clone())),
            None => Ok(()),
        }
    }

    fn record_audit(&mut self, id: Option<ProcessId>, name: &str, action: AuditAction, memory: u64) {
        if let Some(sink) = self.audit.as_mut() {
            let event = build_audit_event(id, name, action, memory, self.allocator.used());
            tracing::trace!("audit {}", event);
            sink.record(event);
        }
    }
}
