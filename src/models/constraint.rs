//! Per-agent carrying constraint.
//!
//! An agent's weight ceiling is fixed at creation and never changes
//! during a run. Eligibility is always the strict test
//! `weight < ceiling`; both fill-time selection and priority-notice
//! filtering go through [`AgentConstraint::admits`] so the rule lives
//! in exactly one place.

use serde::{Deserialize, Serialize};

use super::MailItem;
use crate::pool::AllocationError;

/// Weight ceiling for a standard (non-high-capacity) agent, in grams.
pub const STANDARD_CEILING: u32 = 2_000;

/// Immutable per-agent weight ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConstraint {
    ceiling: u32,
}

impl AgentConstraint {
    /// Derives the ceiling from the high-capacity flag.
    ///
    /// High-capacity agents are effectively unconstrained; standard
    /// agents carry at most [`STANDARD_CEILING`] grams per item.
    pub fn from_flag(high_capacity: bool) -> Self {
        Self {
            ceiling: if high_capacity {
                u32::MAX
            } else {
                STANDARD_CEILING
            },
        }
    }

    /// Creates a constraint with an explicit ceiling.
    ///
    /// A zero ceiling is a configuration error and is rejected here,
    /// at construction time, not at fill time.
    pub fn with_ceiling(ceiling: u32) -> Result<Self, AllocationError> {
        if ceiling == 0 {
            return Err(AllocationError::InvalidCeiling);
        }
        Ok(Self { ceiling })
    }

    /// An unconstrained agent.
    pub fn unconstrained() -> Self {
        Self { ceiling: u32::MAX }
    }

    /// The weight ceiling, in grams (non-inclusive).
    pub fn weight_ceiling(&self) -> u32 {
        self.ceiling
    }

    /// Whether a weight is strictly under this agent's ceiling.
    pub fn admits_weight(&self, weight: u32) -> bool {
        weight < self.ceiling
    }

    /// Whether this agent may carry the item.
    pub fn admits(&self, item: &MailItem) -> bool {
        self.admits_weight(item.weight)
    }
}
