//! Property-based tests for report window derivation.

use chrono::{Datelike, Days, Months, NaiveDate};
use proptest::prelude::*;

use super::windows::{ReportWindows, first_of_month, trailing_months};

/// Strategy to generate any day between 1970-01-01 and 2199-12-31.
fn any_day() -> impl Strategy<Value = NaiveDate> {
    let origin = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    (0u64..84_000).prop_map(move |offset| origin + Days::new(offset))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Month-to-date starts on day 1 and ends on today.
    #[test]
    fn prop_month_to_date_bounds(today in any_day()) {
        let windows = ReportWindows::for_date(today);
        let mtd = windows.current_month_to_date;

        prop_assert_eq!(mtd.start.day(), 1);
        prop_assert_eq!(mtd.start.month(), today.month());
        prop_assert_eq!(mtd.start.year(), today.year());
        prop_assert_eq!(mtd.end, today);
    }

    /// Forecast runs from today to the first of next month.
    #[test]
    fn prop_forecast_bounds(today in any_day()) {
        let windows = ReportWindows::for_date(today);
        let forecast = windows.current_month_forecast;
        let next_month = first_of_month(today) + Months::new(1);

        prop_assert_eq!(forecast.start, today.max(first_of_month(today)));
        prop_assert_eq!(forecast.end, next_month);
        prop_assert!(!forecast.is_empty());
    }

    /// The same-period window stays inside last month and is never longer
    /// than today's day count.
    #[test]
    fn prop_same_period_within_last_month(today in any_day()) {
        let windows = ReportWindows::for_date(today);
        let same = windows.last_month_same_period;
        let total = windows.last_month_total;

        prop_assert_eq!(same.start, total.start);
        prop_assert!(same.end <= total.end);
        prop_assert!(!same.is_empty());
        prop_assert!((same.end - same.start).num_days() <= i64::from(today.day()));
        prop_assert_eq!(total.end, first_of_month(today));
    }

    /// Trailing months are contiguous and end with the current month.
    #[test]
    fn prop_trailing_months_contiguous(today in any_day(), count in 1u32..24) {
        let months = trailing_months(today, count);

        prop_assert_eq!(months.len(), count as usize);
        for pair in months.windows(2) {
            prop_assert_eq!(pair[0].range.end, pair[1].range.start);
        }
        prop_assert_eq!(months[months.len() - 1].range.start, first_of_month(today));
    }
}
