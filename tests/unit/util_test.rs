//! Tests for utility functions

use kernel_sim::util::{init_tracing, kernel_filter, now_ms, DEFAULT_FILTER};

#[test]
fn test_now_ms_is_monotonic_enough() {
    let a = now_ms();
    let b = now_ms();
    assert!(a > 0);
    assert!(b >= a);
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    // A second install never replaces the first.
    assert!(!init_tracing());
    assert!(tracing::dispatcher::has_been_set());
}

#[test]
fn test_kernel_filter_falls_back_on_bad_directive() {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    let filter = kernel_filter("kernel_sim=notalevel");
    assert_eq!(filter.to_string(), kernel_filter(DEFAULT_FILTER).to_string());
}
