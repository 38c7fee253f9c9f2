//! Identifier generation port.

use crate::task::domain::TaskId;

/// Source of fresh task identifiers.
///
/// Implementations must return a value not previously returned by the same
/// generator. The store additionally refuses ids already in its collection.
#[cfg_attr(test, mockall::automock)]
pub trait TaskIdGenerator: Send + Sync {
    /// Returns a new identifier.
    fn next_id(&self) -> TaskId;
}

