//! Relative-age labels for task creation timestamps.
//!
//! [`relative_age_at`] is the pure classification; [`RelativeDateFormatter`]
//! binds it to an injected clock so display code never reads the system
//! time directly.

mod formatter;
mod relative;

pub use formatter::RelativeDateFormatter;
pub use relative::{RelativeAge, format_task_date, parse_timestamp, relative_age_at};
