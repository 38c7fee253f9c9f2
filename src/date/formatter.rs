//! Clock-bound relative date formatting.

use super::{RelativeAge, parse_timestamp, relative_age_at};
use crate::task::domain::Task;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;

/// Formats creation timestamps relative to the clock's local time.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use mockable::{Clock, DefaultClock};
/// use tasklet::date::RelativeDateFormatter;
///
/// let clock = Arc::new(DefaultClock);
/// let formatter = RelativeDateFormatter::new(Arc::clone(&clock));
/// assert_eq!(formatter.format(Some(clock.utc())), "Today");
/// assert_eq!(formatter.format(None), "Invalid date");
/// ```
#[derive(Debug, Clone)]
pub struct RelativeDateFormatter<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
}

impl<C> RelativeDateFormatter<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a formatter reading "now" from `clock`.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    /// Classifies a timestamp against the current local time.
    #[must_use]
    pub fn relative_age(&self, created_at: Option<DateTime<Utc>>) -> RelativeAge {
        relative_age_at(created_at, &self.clock.local())
    }

    /// Formats a timestamp against the current local time.
    #[must_use]
    pub fn format(&self, created_at: Option<DateTime<Utc>>) -> String {
        self.relative_age(created_at).to_string()
    }

    /// Formats an RFC 3339 timestamp; unparseable input yields
    /// `"Invalid date"`.
    #[must_use]
    pub fn format_rfc3339(&self, raw: &str) -> String {
        self.format(parse_timestamp(raw))
    }

    /// Formats the creation time of `task`.
    #[must_use]
    pub fn format_task(&self, task: &Task) -> String {
        self.format(Some(task.created_at()))
    }
}
