//! Builders to construct schedulers from configuration.

pub mod kernel_builder;

pub use kernel_builder::{build_scheduler, build_simulated};
