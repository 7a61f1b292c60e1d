//! Configuration models for the kernel.

pub mod kernel;

pub use kernel::{KernelConfig, DEFAULT_CAPACITY_MB, DEFAULT_WORK_DURATION_MS};
