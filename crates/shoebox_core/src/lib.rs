//! Core domain logic for Shoebox.
//! This crate is the single source of truth for storage invariants.

pub mod logging;
pub mod model;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entity::Entity;
pub use model::user::User;
pub use repo::entity_repo::{
    add_integers, copy_into, write_keys, MemoryRepository, RepoError, RepoResult, Repository,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
