//! Demo user record.
//!
//! # Responsibility
//! - Provide the reference [`Entity`] implementor stored by the CLI demo
//!   and by most tests.
//!
//! # Invariants
//! - `id` is the repository key. The repository does not enforce key
//!   uniqueness, so two users may legitimately share an `id`.

use crate::model::entity::Entity;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Demo entity with an integer key and two payload fields.
///
/// Deliberately free of validation: the repository layer treats entities
/// as opaque values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Repository key.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Age in whole years.
    pub age: u8,
}

impl User {
    /// Creates a user record.
    pub fn new(id: u32, name: impl Into<String>, age: u8) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}

impl Entity for User {
    type Key = u32;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "user id={} name={} age={}", self.id, self.name, self.age)
    }
}
