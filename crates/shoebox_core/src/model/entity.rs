//! Entity capability contract for repository storage.

use std::fmt::Display;

/// Minimal capability every stored domain value must provide.
///
/// Repositories address entities through [`Entity::key`] and impose no
/// other structural constraints on the stored type. No base type or
/// inheritance is involved; implementing this trait is the whole
/// contract.
pub trait Entity {
    /// Identifier type used to address this entity.
    ///
    /// Keys are compared by equality during update lookups. `Clone` and
    /// `Display` let the error path carry and render a missing key.
    type Key: PartialEq + Clone + Display;

    /// Returns the stable identifier of this entity.
    fn key(&self) -> &Self::Key;
}
