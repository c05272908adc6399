use crate::constants::FIRST_ENTITY_ID;
use crate::errors::CatalogError;
use near_sdk::near;

/// Monotonic id source for one entity class. Ids start at 1; the id space is
/// practically inexhaustible, but exhaustion is a typed failure, not a panic.
#[near(serializers = [borsh])]
#[derive(Clone)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            next: FIRST_ENTITY_ID,
        }
    }

    /// The id the next successful `allocate` call will return.
    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn allocate(&mut self, entity: &str) -> Result<u64, CatalogError> {
        let id = self.next;
        self.next = id
            .checked_add(1)
            .ok_or_else(|| CatalogError::AllocatorExhausted(format!("{} id space", entity)))?;
        Ok(id)
    }

    /// Check that `count` more ids can be issued without exhausting the space.
    /// Batch operations call this up front so a failed batch consumes no ids.
    pub fn check_capacity(&self, count: u64, entity: &str) -> Result<(), CatalogError> {
        self.next
            .checked_add(count)
            .ok_or_else(|| CatalogError::AllocatorExhausted(format!("{} id space", entity)))?;
        Ok(())
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
