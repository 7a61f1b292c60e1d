//! # Kernel Sim
//!
//! A single-node admission-control scheduler over a bounded memory pool.
//!
//! Units of work (processes) are admitted against a fixed memory capacity,
//! tracked in an ordered process table, executed in round-robin passes and
//! retired. Memory is reserved at admission and released exactly once, when the
//! process terminates.
//!
//! ## Guarantees
//!
//! - **No oversubscription**: `0 <= used <= capacity` after every call
//! - **All-or-nothing admission**: a denied launch changes nothing and assigns no id
//! - **Deterministic order**: passes visit `Ready` processes in insertion order
//! - **Consistent lifecycle**: `Ready -> Terminated`, never back
//! - **Fail closed**: an internal invariant breach poisons the scheduler
//!
//! ## Usage
//!
//! ```rust
//! use kernel_sim::core::{InstantExecutor, KernelError, ProcessState, Scheduler};
//!
//! let mut kernel = Scheduler::new(512, InstantExecutor)?;
//! assert_eq!(kernel.launch("AI_Triage_Model", 120)?, 1);
//! assert_eq!(kernel.launch("PerfusionSimulator", 200)?, 2);
//! assert_eq!(kernel.launch("Logger", 64)?, 3);
//! assert!(matches!(
//!     kernel.launch("BackupProcess", 180),
//!     Err(KernelError::InsufficientMemory { .. })
//! ));
//!
//! let outcome = kernel.run_all()?;
//! assert_eq!(outcome.len(), 3);
//! assert!(outcome.iter().all(|(_, s)| *s == ProcessState::Terminated));
//! assert_eq!(kernel.snapshot().used, 0);
//! # Ok::<(), KernelError>(())
//! ```
//!
//! Configuration can come from JSON or the environment (see
//! [`config::KernelConfig`]), and [`builders::build_simulated`] wires a
//! scheduler whose work units sleep for the configured duration.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Allocator, process table, scheduler and status reporting.
pub mod core;
/// Configuration models.
pub mod config;
/// Builders to construct schedulers from configuration.
pub mod builders;
/// Runtime adapters for async callers.
pub mod runtime;
/// Shared utilities.
pub mod util;
