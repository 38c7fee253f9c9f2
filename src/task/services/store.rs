//! Task store: the single owner of the task collection.

use super::TaskStoreConfig;
use crate::task::{
    domain::{Task, TaskCollection, TaskDomainError, TaskId, TaskStats, TaskTitle},
    ports::TaskIdGenerator,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, trace};

/// In-memory task store.
///
/// Mutations never fail from the caller's point of view. A blank title, an
/// unknown id, or a colliding generated id leaves the collection unchanged;
/// the return value reports whether anything happened.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use mockable::DefaultClock;
/// use tasklet::task::adapters::UuidTaskIdGenerator;
/// use tasklet::task::services::TaskStore;
///
/// let mut store = TaskStore::new(
///     Arc::new(UuidTaskIdGenerator::new()),
///     Arc::new(DefaultClock),
/// );
/// let id = store
///     .add_task("Buy milk", Some("2% organic"))
///     .expect("title is not blank");
/// store.toggle_complete(&id);
/// assert_eq!(store.completed_count(), 1);
/// assert_eq!(store.pending_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct TaskStore<G, C>
where
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    tasks: TaskCollection,
    id_generator: Arc<G>,
    clock: Arc<C>,
    config: TaskStoreConfig,
}

impl<G, C> TaskStore<G, C>
where
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    /// Creates an empty store with default configuration.
    #[must_use]
    pub fn new(id_generator: Arc<G>, clock: Arc<C>) -> Self {
        Self::with_config(id_generator, clock, TaskStoreConfig::default())
    }

    /// Creates an empty store with custom configuration.
    #[must_use]
    pub const fn with_config(
        id_generator: Arc<G>,
        clock: Arc<C>,
        config: TaskStoreConfig,
    ) -> Self {
        Self {
            tasks: TaskCollection::new(),
            id_generator,
            clock,
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskStoreConfig {
        &self.config
    }

    /// Adds a task built from raw user input.
    ///
    /// The title and description are trimmed; a description that is blank
    /// after trimming is dropped. Returns the new task's id, or `None` when
    /// the title is blank and nothing was added.
    pub fn add_task(&mut self, title: &str, description: Option<&str>) -> Option<TaskId> {
        match self.try_add(title, description) {
            Ok(id) => {
                trace!(task_id = %id, "task added");
                Some(id)
            }
            Err(err) => {
                debug!(error = %err, "task submission ignored");
                None
            }
        }
    }

    fn try_add(
        &mut self,
        title: &str,
        description: Option<&str>,
    ) -> Result<TaskId, TaskDomainError> {
        let validated = TaskTitle::new(title)?;
        let task = Task::new(
            self.id_generator.next_id(),
            validated,
            description,
            &*self.clock,
        );
        let id = task.id().clone();
        self.tasks.insert(task, self.config.insertion_order())?;
        Ok(id)
    }

    /// Removes the task with the given id.
    ///
    /// Returns `true` when a task was removed.
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        let removed = self.tasks.remove(id).is_some();
        if removed {
            trace!(task_id = %id, "task deleted");
        } else {
            debug!(task_id = %id, "delete ignored for unknown task");
        }
        removed
    }

    /// Flips the completion flag of the task with the given id.
    ///
    /// Returns `true` when a task matched.
    pub fn toggle_complete(&mut self, id: &TaskId) -> bool {
        match self.tasks.toggle(id) {
            Some(completed) => {
                trace!(task_id = %id, completed, "task toggled");
                true
            }
            None => {
                debug!(task_id = %id, "toggle ignored for unknown task");
                false
            }
        }
    }

    /// Returns the tasks in store order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_slice()
    }

    /// Returns an owned copy of the tasks in store order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.as_slice().to_vec()
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Returns whether the store holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.completed_len()
    }

    /// Returns the number of tasks not yet completed.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.total_count() - self.completed_count()
    }

    /// Returns the aggregate counts as a single snapshot.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        self.tasks.stats()
    }
}
