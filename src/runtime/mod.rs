//! Runtime adapters for async callers.

#[cfg(feature = "tokio-runtime")]
pub mod tokio_runner;

#[cfg(feature = "tokio-runtime")]
pub use tokio_runner::TokioRunner;
