//! Error types for kernel operations.

use thiserror::Error;

use crate::core::ProcessId;

/// Errors produced by the allocator, process table and scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    /// Admission would push usage past capacity.
    #[error("insufficient memory: requested {requested}MB, available {available}MB")]
    InsufficientMemory {
        /// Megabytes requested by the caller.
        requested: u64,
        /// Megabytes still free at the time of the request.
        available: u64,
    },
    /// No process with this identifier exists.
    #[error("unknown process id: {0}")]
    UnknownId(ProcessId),
    /// The process already left the `Ready` state.
    #[error("process {0} already terminated")]
    AlreadyTerminated(ProcessId),
    /// Release larger than current usage.
    #[error("invalid release: {amount}MB exceeds {used}MB in use")]
    InvalidRelease {
        /// Megabytes the caller tried to release.
        amount: u64,
        /// Megabytes in use at the time of the call.
        used: u64,
    },
    /// Memory amounts must be positive.
    #[error("memory amount must be greater than 0")]
    InvalidAmount,
    /// Pool capacity must be positive.
    #[error("capacity must be greater than 0")]
    InvalidCapacity,
    /// The scheduler observed an invariant breach and refuses further mutation.
    #[error("scheduler poisoned: {0}")]
    Poisoned(String),
    /// Configuration failed validation or parsing.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// A pass running on another thread or runtime did not finish.
    #[error("pass aborted: {0}")]
    PassAborted(String),
}

impl KernelError {
    /// Whether this error signals a bug in internal sequencing rather than
    /// caller misuse.
    pub const fn is_invariant_breach(&self) -> bool {
        matches!(self, Self::InvalidRelease { .. } | Self::Poisoned(_))
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
