//! UUID-backed identifier generator.

use crate::task::{domain::TaskId, ports::TaskIdGenerator};
use uuid::Uuid;

/// Generates hyphenated lowercase UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UuidTaskIdGenerator;

impl UuidTaskIdGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TaskIdGenerator for UuidTaskIdGenerator {
    fn next_id(&self) -> TaskId {
        TaskId::new(Uuid::new_v4().to_string())
    }
}
