//! Ordered, id-unique task collection.

use super::{Task, TaskDomainError, TaskId, TaskStats};

/// Position at which newly created tasks enter the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InsertionOrder {
    /// New tasks are placed at the front (most recent first).
    #[default]
    NewestFirst,
    /// New tasks are placed at the back (oldest first).
    OldestFirst,
}

/// Ordered sequence of tasks, unique by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Inserts a task at the position chosen by `order`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DuplicateId`] when a task with the same
    /// identifier is already present. The collection is left unchanged.
    pub fn insert(&mut self, task: Task, order: InsertionOrder) -> Result<(), TaskDomainError> {
        if self.contains(task.id()) {
            return Err(TaskDomainError::DuplicateId(task.id().clone()));
        }
        match order {
            InsertionOrder::NewestFirst => self.tasks.insert(0, task),
            InsertionOrder::OldestFirst => self.tasks.push(task),
        }
        Ok(())
    }

    /// Removes and returns the task with the given identifier.
    pub fn remove(&mut self, id: &TaskId) -> Option<Task> {
        let position = self.position(id)?;
        Some(self.tasks.remove(position))
    }

    /// Replaces the matching task with its toggled copy.
    ///
    /// Returns the new completion state, or `None` when no task matched.
    pub fn toggle(&mut self, id: &TaskId) -> Option<bool> {
        let slot = self.tasks.iter_mut().find(|task| task.id() == id)?;
        *slot = slot.toggled();
        Some(slot.is_completed())
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns whether a task with the identifier is present.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the tasks in collection order.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Iterates over the tasks in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the collection holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub fn completed_len(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed()).count()
    }

    /// Returns aggregate counts for the collection.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        TaskStats::from_counts(self.len(), self.completed_len())
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }
}

impl<'a> IntoIterator for &'a TaskCollection {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
