//! Task store configuration.

use crate::task::domain::InsertionOrder;

/// Configuration applied by [`TaskStore`](super::TaskStore).
///
/// # Examples
///
/// ```
/// use tasklet::task::domain::InsertionOrder;
/// use tasklet::task::services::TaskStoreConfig;
///
/// let config = TaskStoreConfig::default().with_insertion_order(InsertionOrder::OldestFirst);
/// assert_eq!(config.insertion_order(), InsertionOrder::OldestFirst);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStoreConfig {
    insertion_order: InsertionOrder,
}

impl TaskStoreConfig {
    /// Sets where new tasks enter the collection.
    #[must_use]
    pub const fn with_insertion_order(mut self, order: InsertionOrder) -> Self {
        self.insertion_order = order;
        self
    }

    /// Returns where new tasks enter the collection.
    #[must_use]
    pub const fn insertion_order(&self) -> InsertionOrder {
        self.insertion_order
    }
}
