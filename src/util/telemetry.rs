//! Telemetry helpers for structured logging and tracing.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable: kernel lifecycle events
/// (admissions, denials, terminations) at `info`, everything else at `warn`.
pub const DEFAULT_FILTER: &str = "warn,kernel_sim=info";

/// Install a `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`]. Returns `false` if a subscriber was already set.
///
/// `RUST_LOG=kernel_sim=debug` additionally shows allocator movements and
/// per-process execution.
pub fn init_tracing() -> bool {
    init_tracing_with(DEFAULT_FILTER)
}

/// Like [`init_tracing`] with a caller-chosen fallback filter.
pub fn init_tracing_with(default_filter: &str) -> bool {
    if tracing::dispatcher::has_been_set() {
        return false;
    }
    tracing_subscriber::fmt()
        .with_env_filter(kernel_filter(default_filter))
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Resolve the filter: `RUST_LOG` when it parses, otherwise `default_filter`,
/// otherwise [`DEFAULT_FILTER`].
pub fn kernel_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
