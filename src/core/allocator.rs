//! Bounded memory pool with all-or-nothing reservations.

use crate::core::KernelError;

/// Tracks total capacity and current usage in megabytes.
///
/// `0 <= used <= capacity` holds after every call. Mutation needs `&mut self`,
/// so reservations and releases are mutually exclusive by construction; share
/// the owning scheduler through [`crate::core::SharedScheduler`] when several
/// threads need access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryAllocator {
    capacity: u64,
    used: u64,
}

impl MemoryAllocator {
    /// Create an empty pool. Fails with [`KernelError::InvalidCapacity`] for 0.
    pub const fn new(capacity: u64) -> Result<Self, KernelError> {
        if capacity == 0 {
            return Err(KernelError::InvalidCapacity);
        }
        Ok(Self { capacity, used: 0 })
    }

    /// Reserve `amount` megabytes if the whole amount fits.
    ///
    /// On failure usage is left untouched; there are no partial reservations.
    pub fn reserve(&mut self, amount: u64) -> Result<(), KernelError> {
        if amount == 0 {
            return Err(KernelError::InvalidAmount);
        }
        match self.used.checked_add(amount) {
            Some(next) if next <= self.capacity => {
                self.used = next;
                tracing::debug!("reserved {}MB, used {}/{}MB", amount, self.used, self.capacity);
                Ok(())
            }
            _ => Err(KernelError::InsufficientMemory {
                requested: amount,
                available: self.available(),
            }),
        }
    }

    /// Return `amount` megabytes to the pool.
    ///
    /// Releasing more than is in use is never clamped; it yields
    /// [`KernelError::InvalidRelease`] and leaves usage unchanged.
    pub fn release(&mut self, amount: u64) -> Result<(), KernelError> {
        if amount == 0 {
            return Err(KernelError::InvalidAmount);
        }
        if amount > self.used {
            return Err(KernelError::InvalidRelease {
                amount,
                used: self.used,
            });
        }
        self.used -= amount;
        tracing::debug!("released {}MB, used {}/{}MB", amount, self.used, self.capacity);
        Ok(())
    }

    /// `(used, capacity)` in megabytes.
    pub const fn usage(&self) -> (u64, u64) {
        (self.used, self.capacity)
    }

    /// Megabytes in use.
    pub const fn used(&self) -> u64 {
        self.used
    }

    /// Total megabytes in the pool.
    pub const fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Megabytes still free.
    pub const fn available(&self) -> u64 {
        self.capacity - self.used
    }
}
