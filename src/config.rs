//! Site configuration.
//!
//! Building geometry and fleet limits in one value, so hosts build
//! consistent carriers, constraints, and policies from a single
//! source. Defaults match the reference site: a 9-level building,
//! 4-slot carriers, a 2 000 g standard ceiling, and priority tiers
//! topping out at 100.

use serde::{Deserialize, Serialize};

use crate::models::{AgentConstraint, Carrier};
use crate::policy::ReturnPolicy;
use crate::pool::AllocationError;

/// Site-wide constants for one deployment.
///
/// # Examples
///
/// ```
/// use automail::config::SiteConfig;
///
/// let config = SiteConfig::default()
///     .with_levels(20)
///     .with_carrier_capacity(6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Number of building levels; valid destinations are `0..levels`.
    pub levels: u32,

    /// Carrier capacity, in items.
    pub carrier_capacity: usize,

    /// Weight ceiling for standard agents, in grams (non-inclusive).
    pub standard_ceiling: u32,

    /// The top priority tier; the only tier that can trigger an early
    /// return.
    pub top_priority: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            levels: 9,
            carrier_capacity: 4,
            standard_ceiling: 2_000,
            top_priority: 100,
        }
    }
}

impl SiteConfig {
    pub fn with_levels(mut self, levels: u32) -> Self {
        self.levels = levels;
        self
    }

    pub fn with_carrier_capacity(mut self, capacity: usize) -> Self {
        self.carrier_capacity = capacity;
        self
    }

    pub fn with_standard_ceiling(mut self, ceiling: u32) -> Self {
        self.standard_ceiling = ceiling;
        self
    }

    pub fn with_top_priority(mut self, top: u32) -> Self {
        self.top_priority = top;
        self
    }

    /// Checks the configuration for structural errors.
    pub fn validate(&self) -> Result<(), String> {
        if self.levels == 0 {
            return Err("levels must be positive".into());
        }
        if self.carrier_capacity == 0 {
            return Err("carrier_capacity must be positive".into());
        }
        if self.standard_ceiling == 0 {
            return Err("standard_ceiling must be positive".into());
        }
        if self.top_priority == 0 {
            return Err("top_priority must be positive".into());
        }
        Ok(())
    }

    /// Creates an empty carrier with this site's capacity.
    pub fn carrier(&self) -> Carrier {
        Carrier::with_capacity(self.carrier_capacity)
    }

    /// Creates the constraint for an agent at this site.
    pub fn constraint_for(&self, high_capacity: bool) -> Result<AgentConstraint, AllocationError> {
        if high_capacity {
            Ok(AgentConstraint::unconstrained())
        } else {
            AgentConstraint::with_ceiling(self.standard_ceiling)
        }
    }

    /// Creates the early-return policy for an agent at this site.
    pub fn policy_for(&self, constraint: &AgentConstraint) -> ReturnPolicy {
        ReturnPolicy::new(constraint, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.levels, 9);
        assert_eq!(config.carrier_capacity, 4);
        assert_eq!(config.standard_ceiling, 2_000);
        assert_eq!(config.top_priority, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SiteConfig::default()
            .with_levels(20)
            .with_carrier_capacity(6)
            .with_standard_ceiling(1_500)
            .with_top_priority(10);
        assert_eq!(config.levels, 20);
        assert_eq!(config.carrier_capacity, 6);
        assert_eq!(config.standard_ceiling, 1_500);
        assert_eq!(config.top_priority, 10);
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        assert!(SiteConfig::default().with_levels(0).validate().is_err());
        assert!(SiteConfig::default()
            .with_carrier_capacity(0)
            .validate()
            .is_err());
        assert!(SiteConfig::default()
            .with_standard_ceiling(0)
            .validate()
            .is_err());
        assert!(SiteConfig::default().with_top_priority(0).validate().is_err());
    }

    #[test]
    fn test_factories() {
        let config = SiteConfig::default().with_carrier_capacity(6);
        assert_eq!(config.carrier().capacity(), 6);

        let standard = config.constraint_for(false).unwrap();
        assert_eq!(standard.weight_ceiling(), 2_000);
        let high = config.constraint_for(true).unwrap();
        assert_eq!(high.weight_ceiling(), u32::MAX);

        let policy = config.policy_for(&standard);
        assert!(!policy.is_running());
    }

    #[test]
    fn test_config_round_trips_json() {
        let config = SiteConfig::default().with_levels(12);
        let json = serde_json::to_string(&config).unwrap();
        let back: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.levels, 12);
        assert_eq!(back.carrier_capacity, 4);
    }
}
