//! Report date type and date-range iteration
//!
//! A [`ReportDate`] is the correlation key for a single pipeline run: every
//! adapter call for one run is keyed by the same calendar date. There are no
//! time-of-day semantics; existence checks truncate to the day boundary on
//! the SQL side.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar date a report run is keyed by
///
/// Newtype over [`chrono::NaiveDate`] so dates can't be confused with other
/// string-ish parameters flowing through the adapters.
///
/// # Examples
///
/// ```
/// use herald::domain::date::ReportDate;
/// use std::str::FromStr;
///
/// let date = ReportDate::from_str("2025-01-15").unwrap();
/// assert_eq!(date.to_string(), "2025-01-15");
/// assert_eq!(date.file_stamp(), "20250115");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReportDate(NaiveDate);

impl ReportDate {
    /// Creates a report date from year, month, day
    ///
    /// Returns `Err` for out-of-range components (e.g. month 13).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, String> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| format!("Invalid calendar date: {year:04}-{month:02}-{day:02}"))
    }

    /// Returns the underlying calendar date
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Compact `YYYYMMDD` stamp used in artifact file names
    pub fn file_stamp(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// The next calendar day
    ///
    /// `None` only at the end of chrono's supported range.
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Number of days from `self` to `other`, negative if `other` is earlier
    pub fn days_until(&self, other: &ReportDate) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }
}

impl From<NaiveDate> for ReportDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for ReportDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| format!("Invalid date '{s}' (expected YYYY-MM-DD): {e}"))
    }
}

/// Inclusive, ascending iterator over calendar days
///
/// Produces every day from `start` to `end` inclusive, stepping by exactly
/// one day. The length equals `(end - start in days) + 1`.
///
/// # Examples
///
/// ```
/// use herald::domain::date::{DateRange, ReportDate};
/// use std::str::FromStr;
///
/// let start = ReportDate::from_str("2025-01-30").unwrap();
/// let end = ReportDate::from_str("2025-02-01").unwrap();
/// let dates: Vec<_> = DateRange::new(start, end).collect();
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[1].to_string(), "2025-01-31");
/// ```
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<ReportDate>,
    end: ReportDate,
}

impl DateRange {
    /// Creates an inclusive range; empty when `start > end`
    pub fn new(start: ReportDate, end: ReportDate) -> Self {
        let next = if start <= end { Some(start) } else { None };
        Self { next, end }
    }

    /// Number of days the range will yield
    pub fn len(&self) -> usize {
        match self.next {
            Some(start) => (start.days_until(&self.end) + 1) as usize,
            None => 0,
        }
    }

    /// True when the range yields no dates
    pub fn is_empty(&self) -> bool {
        self.next.is_none()
    }
}

impl Iterator for DateRange {
    type Item = ReportDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.end {
            current.succ()
        } else {
            None
        };
        Some(current)
    }
}
