//! Tests for configuration validation

use kernel_sim::config::{KernelConfig, DEFAULT_CAPACITY_MB, DEFAULT_WORK_DURATION_MS};
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = KernelConfig::default();
    assert_eq!(config.capacity_mb, DEFAULT_CAPACITY_MB);
    assert_eq!(config.capacity_mb, 512);
    assert_eq!(config.work_duration_ms, DEFAULT_WORK_DURATION_MS);
    assert!(config.worker_count > 0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_invalid_capacity() {
    let invalid = KernelConfig::default().with_capacity_mb(0);
    assert!(invalid.validate().is_err());
}

#[test]
fn test_config_invalid_worker_count() {
    let invalid = KernelConfig::default().with_worker_count(0);
    assert!(invalid.validate().is_err());
}

#[test]
fn test_config_invalid_audit_capacity() {
    let invalid = KernelConfig::default().with_audit_capacity(0);
    assert!(invalid.validate().is_err());
}

#[test]
fn test_zero_work_duration_is_valid() {
    let config = KernelConfig::default().with_work_duration_ms(0);
    assert!(config.validate().is_ok());
    assert_eq!(config.work_duration(), Duration::ZERO);
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "capacity_mb": 1024,
        "work_duration_ms": 10,
        "worker_count": 2,
        "audit_capacity": 16
    }"#;

    let config = KernelConfig::from_json_str(json).unwrap();
    assert_eq!(config.capacity_mb, 1024);
    assert_eq!(config.work_duration(), Duration::from_millis(10));
    assert_eq!(config.worker_count, 2);
    assert_eq!(config.audit_capacity, 16);
}

#[test]
fn test_config_from_json_partial_keeps_defaults() {
    let config = KernelConfig::from_json_str(r#"{ "capacity_mb": 64 }"#).unwrap();
    assert_eq!(config.capacity_mb, 64);
    assert_eq!(config.work_duration_ms, DEFAULT_WORK_DURATION_MS);
}

#[test]
fn test_config_from_json_rejects_invalid() {
    assert!(KernelConfig::from_json_str(r#"{ "capacity_mb": 0 }"#).is_err());
    assert!(KernelConfig::from_json_str("not json").is_err());
}

#[test]
fn test_config_from_vars() {
    let vars = vec![
        ("KERNEL_CAPACITY_MB", "256"),
        ("KERNEL_WORK_DURATION_MS", " 0 "),
        ("KERNEL_WORKER_COUNT", "3"),
        ("UNRELATED", "ignored"),
    ];

    let config = KernelConfig::from_vars(vars).unwrap();
    assert_eq!(config.capacity_mb, 256);
    assert_eq!(config.work_duration_ms, 0);
    assert_eq!(config.worker_count, 3);
}

#[test]
fn test_config_from_vars_rejects_garbage() {
    let err = KernelConfig::from_vars(vec![("KERNEL_CAPACITY_MB", "lots")]).unwrap_err();
    assert!(err.to_string().contains("KERNEL_CAPACITY_MB"));

    assert!(KernelConfig::from_vars(vec![("KERNEL_CAPACITY_MB", "0")]).is_err());
}

#[test]
fn test_config_from_env_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "KERNEL_AUDIT_CAPACITY=77\nUNRELATED=1\n").unwrap();

    let config = KernelConfig::from_env_file(&path).unwrap();
    assert_eq!(config.audit_capacity, 77);
}

#[test]
fn test_config_from_malformed_env_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "KERNEL_WORKER_COUNT=3\nKERNEL_CAPACITY_MB 'oops\n").unwrap();

    let err = KernelConfig::from_env_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("reading .env"));
}

#[test]
fn test_config_from_missing_env_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(KernelConfig::from_env_file(dir.path().join("absent.env")).is_err());
}
