//! Repository contract and list-backed in-memory implementation.
//!
//! # Responsibility
//! - Define the generic CRUD contract callers program against.
//! - Provide [`MemoryRepository`], the insertion-ordered `Vec` store.
//! - Host the free sequence helpers shared by callers.
//!
//! # Invariants
//! - Stored order is insertion order; `update` re-appends at the end.
//! - `find_all` hands out clones, never the internal buffer.
//! - Duplicate keys are tolerated; key lookups touch the first match.
//! - No locking exists in this layer. Concurrent mutation is
//!   unsupported and must be serialized by the caller.

use crate::model::entity::Entity;
use log::debug;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::io;

pub type RepoResult<T, K> = Result<T, RepoError<K>>;

/// Repository error for key lookups and batch preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError<K> {
    /// No stored entity carries the requested key.
    NotFound(K),
    /// Declared batch length does not match the entities handed in.
    BatchSizeMismatch { declared: usize, actual: usize },
}

impl<K: Display> Display for RepoError<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(key) => write!(f, "entity not found: {key}"),
            Self::BatchSizeMismatch { declared, actual } => write!(
                f,
                "batch declared {declared} entities but received {actual}"
            ),
        }
    }
}

impl<K: Debug + Display> Error for RepoError<K> {}

/// Generic CRUD contract over one entity type.
///
/// `T` satisfies [`Entity`] plus `Clone` (snapshots, bulk copies) and
/// `PartialEq` (delete by full value equality). Every operation except
/// `update` and `save_batch` is total.
pub trait Repository<T: Entity + Clone + PartialEq> {
    /// Appends one entity and returns a reference to the stored value.
    fn save(&mut self, entity: T) -> &T;

    /// Appends a whole batch after checking the declared length against
    /// the actual batch size.
    ///
    /// Returns whether the sequence grew.
    ///
    /// # Errors
    /// - `RepoError::BatchSizeMismatch` when `declared_len` differs from
    ///   `entities.len()`; nothing is appended in that case.
    fn save_batch(&mut self, declared_len: usize, entities: Vec<T>) -> RepoResult<bool, T::Key>;

    /// Appends clones of all entities, preserving their order.
    ///
    /// Returns whether the sequence grew.
    fn save_all(&mut self, entities: &[T]) -> bool;

    /// Returns a snapshot copy of the full sequence in insertion order.
    ///
    /// The snapshot is detached: mutating it never affects the store.
    fn find_all(&self) -> Vec<T>;

    /// Returns the first entity satisfying `predicate`, scanning in
    /// insertion order.
    fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    /// Replaces the first entity whose key equals `key`.
    ///
    /// The old entity is removed and the replacement is appended, so an
    /// updated entity always moves to the end of the sequence.
    ///
    /// # Errors
    /// - `RepoError::NotFound` carrying `key` when no stored entity
    ///   matches; the sequence is left unchanged.
    fn update(&mut self, key: &T::Key, entity: T) -> RepoResult<&T, T::Key>;

    /// Removes the first entity equal to `entity` by full value.
    ///
    /// Returns whether something was removed.
    fn delete(&mut self, entity: &T) -> bool;

    /// Returns the number of stored entities.
    fn count(&self) -> usize;
}

/// Insertion-ordered in-memory repository backed by a `Vec`.
///
/// Scans are linear and appends amortized constant; adequate for the
/// prototyping workloads this crate targets.
#[derive(Debug, Clone)]
pub struct MemoryRepository<T> {
    items: Vec<T>,
}

impl<T> MemoryRepository<T> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity + Clone + PartialEq> Repository<T> for MemoryRepository<T> {
    fn save(&mut self, entity: T) -> &T {
        let slot = self.items.len();
        self.items.push(entity);
        &self.items[slot]
    }

    fn save_batch(&mut self, declared_len: usize, entities: Vec<T>) -> RepoResult<bool, T::Key> {
        let actual = entities.len();
        if declared_len != actual {
            return Err(RepoError::BatchSizeMismatch {
                declared: declared_len,
                actual,
            });
        }

        debug!("event=save_batch module=repo status=ok declared={declared_len} actual={actual}");
        self.items.extend(entities);
        Ok(actual > 0)
    }

    fn save_all(&mut self, entities: &[T]) -> bool {
        self.items.extend_from_slice(entities);
        !entities.is_empty()
    }

    fn find_all(&self) -> Vec<T> {
        self.items.clone()
    }

    fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(item))
    }

    fn update(&mut self, key: &T::Key, entity: T) -> RepoResult<&T, T::Key> {
        let position = self
            .items
            .iter()
            .position(|item| item.key() == key)
            .ok_or_else(|| RepoError::NotFound(key.clone()))?;

        self.items.remove(position);
        Ok(self.save(entity))
    }

    fn delete(&mut self, entity: &T) -> bool {
        match self.items.iter().position(|item| item == entity) {
            Some(position) => {
                self.items.remove(position);
                true
            }
            None => false,
        }
    }

    fn count(&self) -> usize {
        self.items.len()
    }
}

const KEY_BANNER: &str = "--- keys ---";
const KEY_FOOTER: &str = "------------";

/// Writes every entity key to `out`, one per line, framed by a banner.
///
/// # Errors
/// - Propagates sink write failures unchanged.
pub fn write_keys<T, W>(items: &[T], out: &mut W) -> io::Result<()>
where
    T: Entity,
    W: io::Write,
{
    writeln!(out, "{KEY_BANNER}")?;
    for item in items {
        writeln!(out, "{}", item.key())?;
    }
    writeln!(out, "{KEY_FOOTER}")?;
    Ok(())
}

/// Appends the integer literals 1, 2 and 3 to any vector whose element
/// type accepts plain integers, and returns the same vector.
///
/// The `From<i32>` bound admits same-width and wider element types
/// (`i32`, `i64`, `i128`, `f64`), the consumer side of the conversion.
pub fn add_integers<N: From<i32>>(target: &mut Vec<N>) -> &mut Vec<N> {
    target.push(N::from(1));
    target.push(N::from(2));
    target.push(N::from(3));
    target
}

/// Appends every source element to `destination`, converting each into
/// the destination element type, and returns the destination.
///
/// The source is read-only; elements are cloned before conversion.
pub fn copy_into<'a, S, D>(source: &[S], destination: &'a mut Vec<D>) -> &'a mut Vec<D>
where
    S: Clone + Into<D>,
{
    for item in source {
        destination.push(item.clone().into());
    }
    destination
}
