//! Core scheduling abstractions and memory accounting.

pub mod error;
pub mod allocator;
pub mod process_table;
pub mod executor;
pub mod status;
pub mod audit;
pub mod scheduler;
pub mod shared;

pub use error::{AppResult, KernelError};
pub use allocator::MemoryAllocator;
pub use process_table::{ProcessId, ProcessRecord, ProcessState, ProcessTable};
pub use executor::{InstantExecutor, SimulatedWork, WorkExecutor};
pub use status::{Snapshot, StatusReporter};
pub use audit::{build_audit_event, AuditAction, AuditEvent, AuditSink, InMemoryAuditSink};
pub use scheduler::{PassOutcome, Scheduler};
pub use shared::SharedScheduler;
