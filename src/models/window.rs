//! Aggregation time windows
//!
//! Queries aggregate over a trailing window anchored on the session's
//! reference date: the reference day itself, the trailing 7 days, or the
//! trailing 30 days. Both window bounds are inclusive.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trailing time range for aggregation queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    /// The reference day only
    Day,
    /// The trailing 7 days, reference day inclusive
    #[default]
    Week,
    /// The trailing 30 days, reference day inclusive
    Month,
}

impl TimeWindow {
    /// Number of trailing days covered (0 for the single-day window)
    pub const fn trailing_days(&self) -> i64 {
        match self {
            Self::Day => 0,
            Self::Week => 7,
            Self::Month => 30,
        }
    }

    /// Inclusive date range of this window ending on `today`
    pub fn range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        (today - Duration::days(self.trailing_days()), today)
    }

    /// Inclusive date range of the immediately preceding period
    ///
    /// Used for the "vs previous" comparison on the overview: yesterday for
    /// the day window, days 14..8 back for the week, days 60..31 back for
    /// the month.
    pub fn previous_range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Self::Day => {
                let yesterday = today - Duration::days(1);
                (yesterday, yesterday)
            }
            Self::Week => (today - Duration::days(14), today - Duration::days(8)),
            Self::Month => (today - Duration::days(60), today - Duration::days(31)),
        }
    }

    /// Check if a date falls within this window ending on `today`
    pub fn contains(&self, today: NaiveDate, date: NaiveDate) -> bool {
        let (start, end) = self.range(today);
        date >= start && date <= end
    }

    /// Parse a window from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "day" | "daily" => Some(Self::Day),
            "week" | "weekly" => Some(Self::Week),
            "month" | "monthly" => Some(Self::Month),
            _ => None,
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
        }
    }
}
