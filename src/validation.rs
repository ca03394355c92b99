//! Intake batch validation.
//!
//! Structural integrity checks a host runs on a batch of items before
//! feeding the pool. Detects:
//! - Duplicate IDs
//! - Zero weights
//! - Destinations outside the building
//! - Priority levels above the site's top tier
//!
//! All problems in a batch are collected and reported together.

use std::collections::HashSet;

use crate::config::SiteConfig;
use crate::models::MailItem;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two items share the same ID.
    DuplicateId,
    /// An item has zero weight.
    ZeroWeight,
    /// An item's destination lies outside the building.
    DestinationOutOfRange,
    /// An item's priority exceeds the site's top tier.
    PriorityOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an intake batch against the site configuration.
///
/// Checks:
/// 1. No duplicate item IDs
/// 2. Every weight is positive
/// 3. Every destination is inside `0..levels`
/// 4. Every priority is at most `top_priority`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_intake(items: &[MailItem], config: &SiteConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for item in items {
        if !ids.insert(item.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate item ID: {}", item.id),
            ));
        }

        if item.weight == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroWeight,
                format!("Item '{}' has zero weight", item.id),
            ));
        }

        if item.destination >= config.levels {
            errors.push(ValidationError::new(
                ValidationErrorKind::DestinationOutOfRange,
                format!(
                    "Item '{}' destined for level {} in a {}-level building",
                    item.id, item.destination, config.levels
                ),
            ));
        }

        if item.priority > config.top_priority {
            errors.push(ValidationError::new(
                ValidationErrorKind::PriorityOutOfRange,
                format!(
                    "Item '{}' priority {} exceeds top tier {}",
                    item.id, item.priority, config.top_priority
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
