//! Mail-allocation scheduling core.
//!
//! Given a shared pool of pending mail and agents with bounded LIFO
//! carriers and per-agent weight ceilings, this crate decides which
//! items each agent carries next and in what order, and whether an
//! in-progress run should be abandoned early when top-priority mail
//! arrives at intake. The physical simulation (agent movement, intake
//! generation, reporting) lives in the host; this crate is the
//! decision module it drives.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `MailItem`, `Carrier`, `AgentConstraint`
//! - **`ranking`**: Delay-cost score and the allocation/delivery orders
//! - **`pool`**: `MailPool` fill loop and the `SharedMailPool` handle
//! - **`policy`**: `ReturnPolicy` early-return state machine
//! - **`config`**: `SiteConfig` building geometry and fleet limits
//! - **`validation`**: Intake batch integrity checks
//!
//! # Control Flow
//!
//! Intake adds items to the pool and broadcasts priority arrivals to
//! every agent's `ReturnPolicy`. At each cycle start the host calls
//! `fill` for an agent; during the run it calls `should_return` before
//! each step and sends the agent back on `true`. Fills across agents
//! are serialized by the shared pool's lock, so no item is ever
//! assigned twice.

pub mod config;
pub mod models;
pub mod policy;
pub mod pool;
pub mod ranking;
pub mod validation;
