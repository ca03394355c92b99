//! Delivery item model.
//!
//! A mail item is a unit of mail awaiting delivery. Items are created
//! once at intake and never mutated afterwards; they move from the
//! pending pool into exactly one carrier and leave the system when
//! delivered.

use serde::{Deserialize, Serialize};

/// Monotonic logical time, in simulation ticks.
///
/// The host clock supplies tick readings; this crate never reads wall
/// time itself.
pub type Tick = u64;

/// A unit of mail awaiting delivery.
///
/// `priority` is 0 for ordinary mail; priority mail carries a positive
/// level up to the site's top tier. A single type with a defaulted
/// priority field keeps the scoring path free of runtime type
/// inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailItem {
    /// Unique item identifier assigned at intake.
    pub id: String,
    /// Weight in grams. Positive; intake validation rejects zero.
    pub weight: u32,
    /// Destination level, 0-based. Must lie inside the building.
    pub destination: u32,
    /// Intake tick.
    pub arrival: Tick,
    /// Priority level. 0 means ordinary mail.
    #[serde(default)]
    pub priority: u32,
}

impl MailItem {
    /// Creates an ordinary item.
    pub fn new(id: impl Into<String>, weight: u32, destination: u32, arrival: Tick) -> Self {
        Self {
            id: id.into(),
            weight,
            destination,
            arrival,
            priority: 0,
        }
    }

    /// Sets the priority level.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether this is priority mail.
    pub fn is_priority(&self) -> bool {
        self.priority > 0
    }

    /// Ticks spent waiting since intake, as of `now`.
    ///
    /// Saturates at zero if the host clock reads behind the arrival
    /// stamp.
    pub fn wait_ticks(&self, now: Tick) -> Tick {
        now.saturating_sub(self.arrival)
    }
}
