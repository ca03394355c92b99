//! Pending-item pool and the allocation fill loop.
//!
//! # Algorithm
//!
//! 1. Rank every pool item the agent can carry by [`allocation_order`].
//! 2. Take the top-ranked items, one per free carrier slot, moving
//!    each out of the pool.
//! 3. Arrange the batch by [`delivery_order`] (ascending destination)
//!    and load it in reverse, so LIFO retrieval visits destinations in
//!    non-decreasing order.
//!
//! Ranking is recomputed lazily at fill time; `add` only changes pool
//! membership.

use std::fmt;
use std::sync::{Arc, Mutex};

use log::{debug, error, trace};

use crate::models::{AgentConstraint, Carrier, MailItem};
use crate::ranking::{allocation_order, delay_cost, delivery_order, AllocationContext};

/// Allocation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// An insertion hit an already-full carrier.
    ///
    /// The allocator checks remaining capacity before every insertion,
    /// so reaching this is a logic-invariant breach the host must see,
    /// never a condition to swallow.
    CapacityViolation {
        /// Capacity of the offending carrier.
        capacity: usize,
    },
    /// A zero weight ceiling was supplied at constraint construction.
    InvalidCeiling,
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityViolation { capacity } => {
                write!(f, "insertion into full carrier (capacity {capacity})")
            }
            Self::InvalidCeiling => write!(f, "weight ceiling must be positive"),
        }
    }
}

impl std::error::Error for AllocationError {}

/// The shared pool of mail awaiting assignment.
///
/// An unordered multiset: insertion order carries no meaning, and the
/// exposed ranking at fill time is fully defined by
/// [`allocation_order`]. Items move out by value, so a selected item
/// exists in the carrier and nowhere else.
#[derive(Debug, Default)]
pub struct MailPool {
    items: Vec<MailItem>,
}

impl MailPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item to the pool.
    pub fn add(&mut self, item: MailItem) {
        trace!("pool add: '{}' ({}g, dest {})", item.id, item.weight, item.destination);
        self.items.push(item);
    }

    /// Number of pending items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pool has no pending items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether an item with the given id is pending.
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Iterates over pending items in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &MailItem> {
        self.items.iter()
    }

    /// Fills the carrier's free slots with the highest-ranked eligible
    /// items.
    ///
    /// Returns the number of items loaded, which equals
    /// `min(remaining_capacity, eligible_count)`. An empty pool or a
    /// full carrier is a normal `Ok(0)`, not an error. Unselected
    /// items stay in the pool unmodified.
    ///
    /// On the structurally unreachable mid-load capacity breach, every
    /// unloaded item is restored to the pool and the violation is
    /// surfaced, so the cycle is safe to retry.
    pub fn fill(
        &mut self,
        carrier: &mut Carrier,
        constraint: &AgentConstraint,
        ctx: &AllocationContext,
    ) -> Result<usize, AllocationError> {
        let slots = carrier.remaining_capacity();
        trace!(
            "fill at tick {}: {} pending, {} free slot(s), ceiling {}",
            ctx.now,
            self.items.len(),
            slots,
            constraint.weight_ceiling()
        );
        if slots == 0 || self.items.is_empty() {
            return Ok(0);
        }

        let mut eligible: Vec<usize> = (0..self.items.len())
            .filter(|&i| constraint.admits(&self.items[i]))
            .collect();
        eligible.sort_by(|&a, &b| allocation_order(&self.items[a], &self.items[b], ctx));
        eligible.truncate(slots);

        // Move the selected batch out, highest index first so earlier
        // indices stay valid.
        eligible.sort_unstable_by(|a, b| b.cmp(a));
        let mut batch: Vec<MailItem> = eligible
            .into_iter()
            .map(|i| self.items.swap_remove(i))
            .collect();

        // Ascending destination; popping the batch then loads highest
        // destination first, leaving the lowest on top of the LIFO.
        batch.sort_by(|a, b| delivery_order(a, b, ctx));
        for item in &batch {
            debug!(
                "selected '{}' (dest {}, cost {:.2})",
                item.id,
                item.destination,
                delay_cost(item, ctx)
            );
        }

        let mut loaded = 0;
        while let Some(item) = batch.pop() {
            if carrier.is_full() {
                let capacity = carrier.capacity();
                error!("carrier full after {loaded} load(s); restoring unloaded items");
                self.items.push(item);
                self.items.append(&mut batch);
                return Err(AllocationError::CapacityViolation { capacity });
            }
            match carrier.load(item) {
                Ok(()) => loaded += 1,
                Err(full) => {
                    let capacity = full.capacity;
                    error!("carrier rejected '{}'; restoring unloaded items", full.item.id);
                    self.items.push(full.item);
                    self.items.append(&mut batch);
                    return Err(AllocationError::CapacityViolation { capacity });
                }
            }
        }

        debug!("fill complete: {loaded} loaded, {} still pending", self.items.len());
        Ok(loaded)
    }
}

/// Thread-safe handle to a [`MailPool`] shared by all agents.
///
/// `add` and `fill` each hold the lock for the whole
/// add/rank/select/remove sequence, so a fill observes a consistent
/// snapshot and two agents can never be assigned the same item. Fills
/// perform no I/O; the critical section is bounded by pool size.
#[derive(Debug, Clone, Default)]
pub struct SharedMailPool {
    inner: Arc<Mutex<MailPool>>,
}

impl SharedMailPool {
    /// Creates an empty shared pool.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MailPool> {
        // A panic mid-fill cannot leave the pool torn: the batch is
        // only removed once selection is complete. Recover the guard.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Adds an item to the shared pool.
    pub fn add(&self, item: MailItem) {
        self.lock().add(item);
    }

    /// Fills a carrier under the pool lock.
    pub fn fill(
        &self,
        carrier: &mut Carrier,
        constraint: &AgentConstraint,
        ctx: &AllocationContext,
    ) -> Result<usize, AllocationError> {
        self.lock().fill(carrier, constraint, ctx)
    }

    /// Number of pending items.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the pool has no pending items.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Whether an item with the given id is pending.
    pub fn contains(&self, id: &str) -> bool {
        self.lock().contains(id)
    }
}
