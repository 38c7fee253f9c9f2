//! Aggregate progress statistics.

use serde::{Deserialize, Serialize};

/// Snapshot of task counts for the progress summary.
///
/// `completed + pending == total` holds for every value produced by
/// [`TaskStats::from_counts`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "StatsCounts")]
pub struct TaskStats {
    total: usize,
    completed: usize,
    pending: usize,
}

/// Wire form of [`TaskStats`]. `pending` is derived, so any serialized
/// value for it is ignored.
#[derive(Deserialize)]
struct StatsCounts {
    total: usize,
    completed: usize,
}

impl From<StatsCounts> for TaskStats {
    fn from(counts: StatsCounts) -> Self {
        Self::from_counts(counts.total, counts.completed)
    }
}

impl TaskStats {
    /// Builds statistics from a total and completed count.
    ///
    /// A completed count larger than the total is clamped to the total.
    #[must_use]
    pub fn from_counts(total: usize, completed: usize) -> Self {
        let clamped = completed.min(total);
        Self {
            total,
            completed: clamped,
            pending: total - clamped,
        }
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Returns the number of tasks not yet completed.
    #[must_use]
    pub const fn pending(&self) -> usize {
        self.pending
    }

    /// Returns the completion percentage rounded to the nearest whole
    /// number, halves rounding up. An empty list is 0% complete.
    #[must_use]
    pub fn percent_complete(&self) -> u8 {
        // round(100c / t) == floor((200c + t) / 2t)
        let numerator = self
            .completed
            .saturating_mul(200)
            .saturating_add(self.total);
        let denominator = self.total.saturating_mul(2);
        numerator
            .checked_div(denominator)
            .map_or(0, |percent| u8::try_from(percent).unwrap_or(100))
    }

    /// Returns the summary line shown above the progress bar, such as
    /// `"3 tasks, 1 completed"`.
    #[must_use]
    pub fn summary(&self) -> String {
        let noun = if self.total == 1 { "task" } else { "tasks" };
        if self.completed > 0 {
            format!("{} {noun}, {} completed", self.total, self.completed)
        } else {
            format!("{} {noun}", self.total)
        }
    }

    /// Returns the secondary line under the progress bar, such as
    /// `"2 tasks remaining"`, or `None` when nothing is pending.
    #[must_use]
    pub fn remaining_label(&self) -> Option<String> {
        match self.pending {
            0 => None,
            1 => Some("1 task remaining".to_owned()),
            n => Some(format!("{n} tasks remaining")),
        }
    }
}
