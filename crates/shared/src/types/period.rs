//! Half-open date ranges as the billing API expects them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A `[start, end)` date range.
///
/// `end` is exclusive, matching Cost Explorer's `TimePeriod`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included.
    pub start: NaiveDate,
    /// First day excluded.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if the range covers no days.
    ///
    /// The billing API rejects such ranges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Start date as `YYYY-MM-DD`.
    #[must_use]
    pub fn start_iso(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// End date as `YYYY-MM-DD`.
    #[must_use]
    pub fn end_iso(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start_iso(), self.end_iso())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_rendering() {
        let range = DateRange::new(date(2026, 3, 1), date(2026, 3, 18));
        assert_eq!(range.start_iso(), "2026-03-01");
        assert_eq!(range.end_iso(), "2026-03-18");
        assert_eq!(range.to_string(), "2026-03-01..2026-03-18");
    }

    #[test]
    fn test_is_empty() {
        assert!(DateRange::new(date(2026, 3, 1), date(2026, 3, 1)).is_empty());
        assert!(DateRange::new(date(2026, 3, 2), date(2026, 3, 1)).is_empty());
        assert!(!DateRange::new(date(2026, 3, 1), date(2026, 3, 2)).is_empty());
    }
}
