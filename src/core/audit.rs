//! Audit sink implementations.
//!
//! Lifecycle events (admission, denial, execution, termination) are recorded
//! as data so callers can render them however they like.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::ProcessId;
use crate::util::clock::now_ms;

/// Lifecycle step an audit event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Process admitted and memory reserved.
    Launch,
    /// Admission denied; nothing was created.
    Reject,
    /// Work unit handed to the executor.
    Execute,
    /// Memory released and process terminated.
    Terminate,
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Launch => "launch",
            Self::Reject => "reject",
            Self::Execute => "execute",
            Self::Terminate => "terminate",
        };
        f.write_str(s)
    }
}

/// Audit event structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Event identifier.
    pub event_id: String,
    /// Related process, absent for denied admissions.
    pub process_id: Option<ProcessId>,
    /// Process name as supplied by the caller.
    pub name: String,
    /// Action taken.
    pub action: AuditAction,
    /// Megabytes involved in the action.
    pub memory_mb: u64,
    /// Pool usage right after the action.
    pub used_after: u64,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.process_id {
            Some(id) => write!(f, "[{}] pid {} {}", self.action, id, self.name)?,
            None => write!(f, "[{}] {}", self.action, self.name)?,
        }
        write!(f, " | {}MB, used {}MB", self.memory_mb, self.used_after)
    }
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// Bounded in-memory audit sink.
///
/// Clones share one buffer, so a caller can keep a handle while the scheduler
/// owns another.
#[derive(Clone)]
pub struct InMemoryAuditSink {
    events: Arc<Mutex<VecDeque<AuditEvent>>>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(max_events))),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events, oldest first.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().iter().cloned().collect()
    }

    /// Events matching `action`, oldest first.
    pub fn events_for(&self, action: AuditAction) -> Vec<AuditEvent> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.action == action)
            .cloned()
            .collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        let mut events = self.events.lock();
        if events.len() >= self.max_events {
            events.pop_front();
        }
        events.push_back(event);
    }
}

/// Helper to build an audit event stamped with a fresh id and the current time.
pub fn build_audit_event(
    process_id: Option<ProcessId>,
    name: impl Into<String>,
    action: AuditAction,
    memory_mb: u64,
    used_after: u64,
) -> AuditEvent {
    AuditEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        process_id,
        name: name.into(),
        action,
        memory_mb,
        used_after,
        created_at_ms: now_ms(),
    }
}
