//! Domain model layer: the entity contract and the demo record.
//!
//! # Responsibility
//! - Define the capability bound repositories operate through.
//! - Provide the demo user record used by the CLI and tests.
//!
//! # Invariants
//! - Every stored value exposes one stable key for its whole lifetime.

pub mod entity;
pub mod user;
