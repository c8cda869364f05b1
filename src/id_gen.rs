use crate::error::{Lz78Error, Result};

/// Monotonic 1-based index allocator for dictionary entries.
///
/// Indices are never reused. Allocation fails once `limit` has been handed out.
#[derive(Debug)]
pub(crate) struct IndexAllocator {
    issued: u16,
    limit: u16,
}

impl IndexAllocator {
    pub(crate) fn new(limit: u16) -> Self {
        Self { issued: 0, limit }
    }

    /// Gets the next index.
    pub(crate) fn allocate(&mut self) -> Result<u16> {
        if self.issued >= self.limit {
            return Err(Lz78Error::CapacityExceeded { limit: self.limit });
        }
        self.issued += 1;
        Ok(self.issued)
    }

    /// Number of indices handed out so far.
    pub(crate) fn issued(&self) -> u16 {
        self.issued
    }
}
