//! Calendar-day classification of creation timestamps.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use std::fmt;

/// Human-readable age of a timestamp relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeAge {
    /// The timestamp was missing or unparseable.
    Invalid,
    /// The timestamp is later than now.
    Future,
    /// Same calendar day as now.
    Today,
    /// The previous calendar day.
    Yesterday,
    /// Between two and six calendar days ago.
    DaysAgo(u8),
    /// Exactly seven calendar days ago.
    WeekAgo,
    /// More than a week ago; shown as a short date.
    OnDate {
        /// Calendar date in the viewer's time zone.
        date: NaiveDate,
        /// Whether the year differs from the current year.
        show_year: bool,
    },
}

impl fmt::Display for RelativeAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => f.write_str("Invalid date"),
            Self::Future => f.write_str("Future date"),
            Self::Today => f.write_str("Today"),
            Self::Yesterday => f.write_str("Yesterday"),
            Self::DaysAgo(days) => write!(f, "{days} days ago"),
            Self::WeekAgo => f.write_str("1 week ago"),
            Self::OnDate { date, show_year } => {
                write!(f, "{}", date.format("%b %-d"))?;
                if *show_year {
                    write!(f, ", {}", date.year())?;
                }
                Ok(())
            }
        }
    }
}

/// Classifies `created_at` against `now`.
///
/// Day differences are counted between calendar dates in `now`'s time
/// zone, so a task created at 23:59 yesterday is "Yesterday" one minute
/// after midnight.
#[must_use]
pub fn relative_age_at<Tz: TimeZone>(
    created_at: Option<DateTime<Utc>>,
    now: &DateTime<Tz>,
) -> RelativeAge {
    let Some(created_utc) = created_at else {
        return RelativeAge::Invalid;
    };
    if created_utc > now.with_timezone(&Utc) {
        return RelativeAge::Future;
    }

    let created_local = created_utc.with_timezone(&now.timezone());
    let created_date = created_local.date_naive();
    let today = now.date_naive();
    let days = today.signed_duration_since(created_date).num_days();

    match days {
        i64::MIN..=0 => RelativeAge::Today,
        1 => RelativeAge::Yesterday,
        2..=6 => u8::try_from(days).map_or(RelativeAge::WeekAgo, RelativeAge::DaysAgo),
        7 => RelativeAge::WeekAgo,
        _ => RelativeAge::OnDate {
            date: created_date,
            show_year: created_date.year() != today.year(),
        },
    }
}

/// Formats `created_at` as a relative-age label against `now`.
#[must_use]
pub fn format_task_date<Tz: TimeZone>(
    created_at: Option<DateTime<Utc>>,
    now: &DateTime<Tz>,
) -> String {
    relative_age_at(created_at, now).to_string()
}

/// Parses an RFC 3339 timestamp, returning `None` when it is not a valid
/// instant.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}
