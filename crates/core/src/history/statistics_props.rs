//! Property-based tests for history statistics.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::HistoryService;
use super::types::{TrendDirection, TrendThresholds};

/// Strategy to generate a monthly cost from 0.00 to 1,000,000.00.
fn monthly_cost() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Total is the sum and average is total / n.
    #[test]
    fn prop_total_and_average(costs in prop::collection::vec(monthly_cost(), 1..24)) {
        let stats = HistoryService::calculate_statistics(&costs).unwrap();
        let sum: Decimal = costs.iter().copied().sum();

        prop_assert_eq!(stats.total, sum);
        prop_assert_eq!(stats.average, sum / Decimal::from(costs.len()));
    }

    /// Minimum and maximum are attained and bound every month.
    #[test]
    fn prop_extremes(costs in prop::collection::vec(monthly_cost(), 1..24)) {
        let stats = HistoryService::calculate_statistics(&costs).unwrap();

        prop_assert!(costs.contains(&stats.minimum));
        prop_assert!(costs.contains(&stats.maximum));
        for cost in &costs {
            prop_assert!(stats.minimum <= *cost && *cost <= stats.maximum);
        }
    }

    /// There is one month-over-month change per adjacent pair.
    #[test]
    fn prop_changes_length(costs in prop::collection::vec(monthly_cost(), 1..24)) {
        let stats = HistoryService::calculate_statistics(&costs).unwrap();
        prop_assert_eq!(stats.changes.len(), costs.len() - 1);
    }

    /// Six months always yield five changes.
    #[test]
    fn prop_six_months_five_changes(costs in prop::collection::vec(monthly_cost(), 6)) {
        let stats = HistoryService::calculate_statistics(&costs).unwrap();
        prop_assert_eq!(stats.changes.len(), 5);
        prop_assert_eq!(stats.average, stats.total / Decimal::from(6));
    }

    /// A flat history is always stable.
    #[test]
    fn prop_flat_history_is_stable(cost in 1i64..100_000_000i64, months in 2usize..24) {
        let costs = vec![Decimal::new(cost, 2); months];
        let trend = HistoryService::analyze_trend(&costs, &TrendThresholds::default()).unwrap();

        prop_assert_eq!(trend.change_percent, Decimal::ZERO);
        prop_assert_eq!(trend.direction, TrendDirection::Stable);
    }
}
