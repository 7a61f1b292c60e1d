//! Kernel configuration structure.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::AppResult;

/// Pool size used when nothing else is configured.
pub const DEFAULT_CAPACITY_MB: u64 = 512;
/// Simulated per-unit work time used when nothing else is configured.
pub const DEFAULT_WORK_DURATION_MS: u64 = 500;
const DEFAULT_AUDIT_CAPACITY: usize = 1024;

const ENV_CAPACITY: &str = "KERNEL_CAPACITY_MB";
const ENV_WORK_DURATION: &str = "KERNEL_WORK_DURATION_MS";
const ENV_WORKER_COUNT: &str = "KERNEL_WORKER_COUNT";
const ENV_AUDIT_CAPACITY: &str = "KERNEL_AUDIT_CAPACITY";

/// Kernel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Total memory pool in megabytes.
    pub capacity_mb: u64,
    /// Simulated work time per process in milliseconds. Zero means instant.
    pub work_duration_ms: u64,
    /// Worker threads used by parallel passes.
    pub worker_count: usize,
    /// Maximum audit events kept in memory.
    pub audit_capacity: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            capacity_mb: DEFAULT_CAPACITY_MB,
            work_duration_ms: DEFAULT_WORK_DURATION_MS,
            worker_count: num_cpus::get(),
            audit_capacity: DEFAULT_AUDIT_CAPACITY,
        }
    }
}

impl KernelConfig {
    /// Set the pool size.
    #[must_use]
    pub const fn with_capacity_mb(mut self, capacity_mb: u64) -> Self {
        self.capacity_mb = capacity_mb;
        self
    }

    /// Set the simulated work time.
    #[must_use]
    pub const fn with_work_duration_ms(mut self, work_duration_ms: u64) -> Self {
        self.work_duration_ms = work_duration_ms;
        self
    }

    /// Set the worker count for parallel passes.
    #[must_use]
    pub const fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    /// Set the audit buffer size.
    #[must_use]
    pub const fn with_audit_capacity(mut self, audit_capacity: usize) -> Self {
        self.audit_capacity = audit_capacity;
        self
    }

    /// Simulated work time as a [`Duration`].
    pub const fn work_duration(&self) -> Duration {
        Duration::from_millis(self.work_duration_ms)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity_mb == 0 {
            return Err("capacity_mb must be greater than 0".into());
        }
        if self.worker_count == 0 {
            return Err("worker_count must be greater than 0".into());
        }
        if self.audit_capacity == 0 {
            return Err("audit_capacity must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate. Missing fields
    /// keep their defaults.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from a `.env` file found in the working directory or its parents,
    /// overlaid by the process environment.
    ///
    /// A missing `.env` is fine; a malformed one is an error.
    pub fn from_env() -> AppResult<Self> {
        let file_vars = match dotenvy::dotenv_iter() {
            Ok(iter) => collect_dotenv(iter)?,
            Err(e) if e.not_found() => Vec::new(),
            Err(e) => return Err(e).context("reading .env"),
        };
        Self::from_vars(file_vars.into_iter().chain(std::env::vars()))
    }

    /// Load from the dotenv file at `path`, overlaid by the process
    /// environment. The file must exist and parse.
    pub fn from_env_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let iter = dotenvy::from_path_iter(path)
            .with_context(|| format!("reading .env at {}", path.display()))?;
        let file_vars = collect_dotenv(iter)?;
        Self::from_vars(file_vars.into_iter().chain(std::env::vars()))
    }

    /// Build from `KERNEL_*` key/value pairs; other keys are ignored and
    /// absent keys keep their defaults.
    pub fn from_vars<I, K, V>(vars: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut cfg = Self::default();
        for (key, value) in vars {
            let value = value.as_ref().trim();
            match key.as_ref() {
                ENV_CAPACITY => cfg.capacity_mb = parse_var(ENV_CAPACITY, value)?,
                ENV_WORK_DURATION => cfg.work_duration_ms = parse_var(ENV_WORK_DURATION, value)?,
                ENV_WORKER_COUNT => cfg.worker_count = parse_var(ENV_WORKER_COUNT, value)?,
                ENV_AUDIT_CAPACITY => cfg.audit_capacity = parse_var(ENV_AUDIT_CAPACITY, value)?,
                _ => {}
            }
        }
        cfg.validate().map_err(anyhow::Error::msg)?;
        Ok(cfg)
    }
}

// Process variables are chained after these, so they take precedence the same
// way dotenvy never overrides an already-set variable.
fn collect_dotenv<R: std::io::Read>(iter: dotenvy::Iter<R>) -> AppResult<Vec<(String, String)>> {
    iter.collect::<Result<Vec<_>, _>>().context("reading .env")
}

fn parse_var<T>(key: &str, value: &str) -> AppResult<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("{key} must be a non-negative integer, got `{value}`"))
}
