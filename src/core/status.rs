//! Read-only status view over the allocator and process table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{MemoryAllocator, ProcessRecord, ProcessState, ProcessTable};

/// Point-in-time copy of the kernel state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Every process ever admitted, in table order.
    pub processes: Vec<ProcessRecord>,
    /// Megabytes in use.
    pub used: u64,
    /// Total megabytes in the pool.
    pub capacity: u64,
}

impl Snapshot {
    /// Megabytes still free.
    pub const fn available(&self) -> u64 {
        self.capacity - self.used
    }

    /// Number of processes waiting for a pass.
    pub fn ready_count(&self) -> usize {
        self.count(ProcessState::Ready)
    }

    /// Number of processes already retired.
    pub fn terminated_count(&self) -> usize {
        self.count(ProcessState::Terminated)
    }

    fn count(&self, state: ProcessState) -> usize {
        self.processes.iter().filter(|p| p.state == state).count()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.processes {
            writeln!(f, "PID {} | {} | State: {}", p.id, p.name, p.state)?;
        }
        write!(f, "Memory: {}/{}MB used", self.used, self.capacity)
    }
}

/// Borrowing reporter; holding one prevents mutation for its lifetime.
#[derive(Debug, Clone, Copy)]
pub struct StatusReporter<'a> {
    allocator: &'a MemoryAllocator,
    table: &'a ProcessTable,
}

impl<'a> StatusReporter<'a> {
    /// Build a reporter over borrowed state.
    pub const fn new(allocator: &'a MemoryAllocator, table: &'a ProcessTable) -> Self {
        Self { allocator, table }
    }

    /// Copy the current state. Has no side effects.
    pub fn snapshot(&self) -> Snapshot {
        let (used, capacity) = self.allocator.usage();
        Snapshot {
            processes: self.table.all().to_vec(),
            used,
            capacity,
        }
    }
}
