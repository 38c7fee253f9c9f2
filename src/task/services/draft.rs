//! Pending input for a new task.

use super::TaskStore;
use crate::task::{domain::TaskId, ports::TaskIdGenerator};
use mockable::Clock;

/// Title and description typed by the user but not yet submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
}

impl TaskDraft {
    /// Creates an empty draft.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
        }
    }

    /// Replaces the pending title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the pending description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Returns the pending title as typed.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the pending description as typed.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether submitting would add a task.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Clears both fields.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }

    /// Submits the draft to `store`.
    ///
    /// The draft is cleared only when the store accepted the task; a blank
    /// title leaves the typed text in place.
    pub fn submit<G, C>(&mut self, store: &mut TaskStore<G, C>) -> Option<TaskId>
    where
        G: TaskIdGenerator,
        C: Clock + Send + Sync,
    {
        let id = store.add_task(&self.title, Some(self.description.as_str()))?;
        self.clear();
        Some(id)
    }
}
