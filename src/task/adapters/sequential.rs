//! Deterministic counter-backed identifier generator.

use crate::task::{domain::TaskId, ports::TaskIdGenerator};
use std::sync::atomic::{AtomicU64, Ordering};

/// Generates `"<prefix>-<n>"` identifiers with `n` counting up from 1.
#[derive(Debug)]
pub struct SequentialTaskIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialTaskIdGenerator {
    /// Creates a generator using the given prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }

    /// Returns how many identifiers have been issued.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed).saturating_sub(1)
    }
}

impl Default for SequentialTaskIdGenerator {
    fn default() -> Self {
        Self::new("task")
    }
}

impl TaskIdGenerator for SequentialTaskIdGenerator {
    fn next_id(&self) -> TaskId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        TaskId::new(format!("{}-{n}", self.prefix))
    }
}
