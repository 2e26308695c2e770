//! Repository layer.
//!
//! # Responsibility
//! - Expose the storage contract and its in-memory implementation.
//!
//! # Invariants
//! - Contracts here are storage-agnostic; only the implementations
//!   decide where entities actually live.

pub mod entity_repo;
