//! Ordered ledger of admitted work units.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::KernelError;

/// Process identifier. Assigned from 1 upward and never reused.
pub type ProcessId = u64;

/// Lifecycle state of a process.
///
/// `Ready` is the only initial state and `Terminated` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Admitted, holding its memory, waiting for a pass.
    Ready,
    /// Executed and retired; its memory has been released.
    Terminated,
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => f.write_str("READY"),
            Self::Terminated => f.write_str("TERMINATED"),
        }
    }
}

/// A single entry in the process table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique identifier.
    pub id: ProcessId,
    /// Caller-supplied label; duplicates are allowed.
    pub name: String,
    /// Megabytes held from launch until termination.
    pub memory_reserved: u64,
    /// Current lifecycle state.
    pub state: ProcessState,
}

impl ProcessRecord {
    /// Whether the record still waits for execution.
    pub fn is_ready(&self) -> bool {
        self.state == ProcessState::Ready
    }
}

/// Insertion-ordered registry of processes.
///
/// The table is a pure ledger: it never checks memory and never removes an
/// entry. Termination is a state change so history stays inspectable.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    records: Vec<ProcessRecord>,
    next_id: ProcessId,
}

impl Default for ProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTable {
    /// Create an empty table whose first id will be 1.
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a `Ready` record and return its freshly assigned id.
    pub fn create(&mut self, name: impl Into<String>, memory: u64) -> ProcessId {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(ProcessRecord {
            id,
            name: name.into(),
            memory_reserved: memory,
            state: ProcessState::Ready,
        });
        id
    }

    /// Look up a record by id.
    pub fn get(&self, id: ProcessId) -> Result<&ProcessRecord, KernelError> {
        self.index_of(id)
            .map(|idx| &self.records[idx])
            .ok_or(KernelError::UnknownId(id))
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[ProcessRecord] {
        &self.records
    }

    /// Move a `Ready` record to `Terminated`.
    ///
    /// A second call for the same id is rejected with
    /// [`KernelError::AlreadyTerminated`], not treated as a no-op.
    pub fn mark_terminated(&mut self, id: ProcessId) -> Result<(), KernelError> {
        let idx = self.index_of(id).ok_or(KernelError::UnknownId(id))?;
        let record = &mut self.records[idx];
        if record.state != ProcessState::Ready {
            return Err(KernelError::AlreadyTerminated(id));
        }
        record.state = ProcessState::Terminated;
        Ok(())
    }

    /// Ids of `Ready` records in table order.
    pub fn ready_ids(&self) -> Vec<ProcessId> {
        self.records
            .iter()
            .filter(|r| r.is_ready())
            .map(|r| r.id)
            .collect()
    }

    /// Number of records, terminated ones included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no process was ever admitted.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // Ids are dense and start at 1, so the id doubles as a position.
    fn index_of(&self, id: ProcessId) -> Option<usize> {
        let idx = usize::try_from(id.checked_sub(1)?).ok()?;
        self.records.get(idx).filter(|r| r.id == id).map(|_| idx)
    }
}
