//! Shared world state for task store BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::{FixedClock, utc};
use rstest::fixture;
use tasklet::{
    date::RelativeDateFormatter,
    task::{adapters::SequentialTaskIdGenerator, domain::TaskId, services::TaskStore},
};

/// Store type used by the BDD world.
pub type TestTaskStore = TaskStore<SequentialTaskIdGenerator, FixedClock>;

/// Scenario world for task store behaviour tests.
pub struct StoreWorld {
    pub store: TestTaskStore,
    pub formatter: RelativeDateFormatter<FixedClock>,
    pub last_added: Option<TaskId>,
}

impl StoreWorld {
    /// Creates a world with an empty store and a frozen clock.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(FixedClock::at(utc(2026, 10, 19, 9, 0)));
        Self {
            store: TaskStore::new(
                Arc::new(SequentialTaskIdGenerator::default()),
                Arc::clone(&clock),
            ),
            formatter: RelativeDateFormatter::new(clock),
            last_added: None,
        }
    }

    /// Returns the most recently added task id.
    pub fn last_added(&self) -> Result<TaskId, eyre::Report> {
        self.last_added
            .clone()
            .ok_or_else(|| eyre::eyre!("no task has been added in this scenario"))
    }
}

impl Default for StoreWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StoreWorld {
    StoreWorld::default()
}
