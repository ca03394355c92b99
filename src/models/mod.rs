//! Mail domain models.
//!
//! Core data types for the allocation scheduler: the immutable
//! [`MailItem`], the bounded LIFO [`Carrier`] an agent carries during
//! a run, and the per-agent [`AgentConstraint`] weight ceiling.
//!
//! Ownership mirrors the system invariant: a `MailItem` value lives in
//! exactly one of {pool, carrier} at any time, so "in both" and
//! "in neither after intake" are unrepresentable in safe code.

mod carrier;
mod constraint;
mod item;

pub use carrier::{Carrier, CarrierFull, DEFAULT_CAPACITY};
pub use constraint::{AgentConstraint, STANDARD_CEILING};
pub use item::{MailItem, Tick};
