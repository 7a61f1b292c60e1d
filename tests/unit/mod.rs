//! Unit tests for individual components

mod audit_test;
mod config_test;
mod status_test;
mod util_test;
