//! Date-range derivation for the summary and history reports.

use chrono::{Datelike, Days, Months, NaiveDate};
use costlens_shared::types::DateRange;
use serde::{Deserialize, Serialize};

/// The four ranges the cost summary is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindows {
    /// The day the windows were derived from.
    pub today: NaiveDate,
    /// First of the current month up to today.
    pub current_month_to_date: DateRange,
    /// The same number of days at the start of last month.
    pub last_month_same_period: DateRange,
    /// All of last month.
    pub last_month_total: DateRange,
    /// Today up to the first of next month.
    pub current_month_forecast: DateRange,
}

impl ReportWindows {
    /// Derives the report windows for `today`.
    ///
    /// The same-period window starts on the first of last month and spans
    /// `today.day()` days, clamped so it never reaches into the current month.
    #[must_use]
    pub fn for_date(today: NaiveDate) -> Self {
        let start_of_this_month = first_of_month(today);
        let start_of_last_month = start_of_this_month - Months::new(1);
        let start_of_next_month = start_of_this_month + Months::new(1);

        let same_period_end = (start_of_last_month + Days::new(u64::from(today.day())))
            .min(start_of_this_month);

        Self {
            today,
            current_month_to_date: DateRange::new(start_of_this_month, today),
            last_month_same_period: DateRange::new(start_of_last_month, same_period_end),
            last_month_total: DateRange::new(start_of_last_month, start_of_this_month),
            current_month_forecast: DateRange::new(
                today.max(start_of_this_month),
                start_of_next_month,
            ),
        }
    }

    /// The windows keyed by their descriptive label.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, DateRange); 4] {
        [
            ("current_month_to_date", self.current_month_to_date),
            ("last_month_same_period", self.last_month_same_period),
            ("last_month_total", self.last_month_total),
            ("current_month_forecast", self.current_month_forecast),
        ]
    }
}

/// One calendar month in the history report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWindow {
    /// First of the month up to the first of the next month.
    pub range: DateRange,
    /// Display label (e.g., "October 2026").
    pub label: String,
}

impl MonthWindow {
    /// Builds the window for the month containing `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        let start = first_of_month(date);
        Self {
            range: DateRange::new(start, start + Months::new(1)),
            label: start.format("%B %Y").to_string(),
        }
    }
}

/// Returns the first day of the month containing `date`.
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// The `count` calendar months ending with the current one, oldest first.
#[must_use]
pub fn trailing_months(today: NaiveDate, count: u32) -> Vec<MonthWindow> {
    let start_of_this_month = first_of_month(today);
    (0..count)
        .rev()
        .map(|back| MonthWindow::containing(start_of_this_month - Months::new(back)))
        .collect()
}
