//! Early-return decision policy.
//!
//! One [`ReturnPolicy`] per agent. During a run it accumulates
//! broadcast notices of newly arrived priority mail and answers, at
//! each delivery step, whether abandoning the run to fetch the new
//! arrival beats finishing it. The heuristic interrupts only cheap
//! runs: a single ordinary item still below the midpoint of the
//! building, displaced by a top-tier arrival the agent could actually
//! carry.

use log::trace;

use crate::config::SiteConfig;
use crate::models::{AgentConstraint, Carrier};

/// Run lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    /// Between runs; notices are ignored.
    Idle,
    /// Within a run; notices accumulate.
    Accumulating,
}

/// Per-agent early-return decision state.
///
/// The state is private to one agent and needs no synchronization.
#[derive(Debug, Clone)]
pub struct ReturnPolicy {
    constraint: AgentConstraint,
    levels: u32,
    top_priority: u32,
    state: RunState,
    pending_notice: bool,
    notified_level: u32,
}

impl ReturnPolicy {
    /// Creates the policy for an agent with the given constraint at
    /// the given site.
    pub fn new(constraint: &AgentConstraint, config: &SiteConfig) -> Self {
        Self {
            constraint: *constraint,
            levels: config.levels,
            top_priority: config.top_priority,
            state: RunState::Idle,
            pending_notice: false,
            notified_level: 0,
        }
    }

    /// Begins a run: clears any stale notice and starts accumulating.
    pub fn start_run(&mut self) {
        self.state = RunState::Accumulating;
        self.pending_notice = false;
        self.notified_level = 0;
    }

    /// Ends a run: back to idle, notices no longer accumulate.
    pub fn end_run(&mut self) {
        self.state = RunState::Idle;
    }

    /// Whether a run is in progress.
    pub fn is_running(&self) -> bool {
        self.state == RunState::Accumulating
    }

    /// Records the arrival of a priority item at intake.
    ///
    /// Ignored between runs, and ignored for items the agent could not
    /// carry anyway. The latest qualifying notice overwrites any
    /// earlier one.
    pub fn notify_priority_arrival(&mut self, priority: u32, weight: u32) {
        if self.state != RunState::Accumulating {
            return;
        }
        if !self.constraint.admits_weight(weight) {
            return;
        }
        trace!("priority arrival noted: level {priority}, {weight}g");
        self.pending_notice = true;
        self.notified_level = priority;
    }

    /// Whether the agent should abandon the run and return to intake.
    ///
    /// Pure read; the decision state is untouched. True only when a
    /// top-tier notice is pending and the carrier holds exactly one
    /// ordinary item destined below the building midpoint. An empty
    /// carrier always answers false; the host's run loop returns on
    /// empty unconditionally on its own.
    pub fn should_return(&self, carrier: &Carrier) -> bool {
        if !self.pending_notice || self.notified_level != self.top_priority {
            return false;
        }
        if carrier.len() != 1 {
            return false;
        }
        match carrier.peek() {
            Some(item) => !item.is_priority() && item.destination < self.levels / 2,
            None => false,
        }
    }
}

/// Delivers a priority-arrival notice to every agent's policy.
///
/// Synchronous deliver-to-all; each policy applies its own ceiling
/// filter.
pub fn broadcast_priority_arrival(policies: &mut [ReturnPolicy], priority: u32, weight: u32) {
    for policy in policies {
        policy.notify_priority_arrival(priority, weight);
    }
}
