//! Bounded LIFO carrier.
//!
//! An agent owns exactly one carrier for the duration of a delivery
//! run. Items are loaded at the intake point and retrieved top-first
//! during the run, so the allocator controls the delivery sequence by
//! controlling the load order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::MailItem;

/// Default carrier capacity, in items.
pub const DEFAULT_CAPACITY: usize = 4;

/// Rejected load: the carrier was already full.
///
/// Hands the rejected item back to the caller so it can be returned
/// to the pool; an item is never dropped on the failure path.
#[derive(Debug)]
pub struct CarrierFull {
    /// The item that could not be loaded.
    pub item: MailItem,
    /// The carrier's capacity at the time of rejection.
    pub capacity: usize,
}

impl fmt::Display for CarrierFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "carrier full (capacity {}), rejected item '{}'",
            self.capacity, self.item.id
        )
    }
}

impl std::error::Error for CarrierFull {}

/// Capacity-bounded LIFO container for in-flight mail.
///
/// Invariant: `len() <= capacity()` always. Loading into a full
/// carrier fails with [`CarrierFull`] rather than silently dropping
/// or truncating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Carrier {
    items: Vec<MailItem>,
    capacity: usize,
}

impl Carrier {
    /// Creates an empty carrier with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty carrier with an explicit capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Loads an item on top of the stack.
    ///
    /// Fails with [`CarrierFull`] (returning the item) if the carrier
    /// is already at capacity.
    pub fn load(&mut self, item: MailItem) -> Result<(), CarrierFull> {
        if self.is_full() {
            return Err(CarrierFull {
                item,
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// The item that would be retrieved next, if any.
    pub fn peek(&self) -> Option<&MailItem> {
        self.items.last()
    }

    /// Removes and returns the top item.
    pub fn pop(&mut self) -> Option<MailItem> {
        self.items.pop()
    }

    /// Number of items currently loaded.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the carrier holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the carrier is at capacity.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Remaining free slots.
    pub fn remaining_capacity(&self) -> usize {
        self.capacity - self.items.len()
    }

    /// Maximum number of items this carrier can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over loaded items, bottom of the stack first.
    pub fn iter(&self) -> impl Iterator<Item = &MailItem> {
        self.items.iter()
    }
}

impl Default for Carrier {
    fn default() -> Self {
        Self::new()
    }
}
