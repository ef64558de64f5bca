//! History collection and statistics.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::types::{
    HistoryReport, HistoryStatistics, MonthTrend, MonthlyCost, TrendAnalysis, TrendDirection,
    TrendThresholds,
};
use crate::billing::CostSource;
use crate::change::percent_change;
use crate::period::MonthWindow;

/// Service for building the multi-month history report.
pub struct HistoryService;

impl HistoryService {
    /// Queries each month in order and builds the report.
    ///
    /// A failed month is logged and counted as zero so the report still
    /// completes.
    pub async fn collect<S>(
        source: &S,
        months: Vec<MonthWindow>,
        thresholds: &TrendThresholds,
    ) -> HistoryReport
    where
        S: CostSource + ?Sized,
    {
        let mut currency = None;
        let mut previous: Option<Decimal> = None;
        let mut entries = Vec::with_capacity(months.len());

        for window in months {
            debug!(month = %window.label, range = %window.range, "querying monthly cost");

            let (cost, query_failed) = match source.cost_and_usage(&window.range).await {
                Ok(money) => {
                    currency.get_or_insert(money.currency);
                    (money.amount, false)
                }
                Err(err) => {
                    warn!(
                        range = %window.range,
                        error = %err,
                        "error getting cost data, counting month as zero"
                    );
                    (Decimal::ZERO, true)
                }
            };

            let trend = previous.and_then(|prev| Self::classify_month(cost, prev, thresholds));
            previous = Some(cost);

            entries.push(MonthlyCost {
                window,
                cost,
                trend,
                query_failed,
            });
        }

        let costs: Vec<Decimal> = entries.iter().map(|m| m.cost).collect();

        HistoryReport {
            currency: currency.unwrap_or_default(),
            statistics: Self::calculate_statistics(&costs),
            trend: Self::analyze_trend(&costs, thresholds),
            months: entries,
        }
    }

    /// Change from `previous` to `current` (percent).
    ///
    /// Zero unless `previous` is positive.
    #[must_use]
    pub fn month_over_month(current: Decimal, previous: Decimal) -> Decimal {
        if previous > Decimal::ZERO {
            percent_change(current, previous)
        } else {
            Decimal::ZERO
        }
    }

    /// Classifies a month against the one before it.
    ///
    /// Returns `None` when the previous month has no positive cost.
    #[must_use]
    pub fn classify_month(
        current: Decimal,
        previous: Decimal,
        thresholds: &TrendThresholds,
    ) -> Option<MonthTrend> {
        if previous <= Decimal::ZERO {
            return None;
        }

        let change = percent_change(current, previous);
        let trend = if change > thresholds.arrow_percent {
            MonthTrend::Up
        } else if change < -thresholds.arrow_percent {
            MonthTrend::Down
        } else {
            MonthTrend::Flat
        };
        Some(trend)
    }

    /// Calculates summary statistics over costs in chronological order.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn calculate_statistics(costs: &[Decimal]) -> Option<HistoryStatistics> {
        let minimum = costs.iter().copied().min()?;
        let maximum = costs.iter().copied().max()?;
        let total: Decimal = costs.iter().copied().sum();

        let changes: Vec<Decimal> = costs
            .windows(2)
            .map(|pair| Self::month_over_month(pair[1], pair[0]))
            .collect();

        Some(HistoryStatistics {
            total,
            average: total / Decimal::from(costs.len()),
            minimum,
            maximum,
            average_change: mean(&changes),
            changes,
        })
    }

    /// Compares the most recent half of the months with the older half.
    ///
    /// With an odd count the middle month belongs to neither half. Returns
    /// `None` with fewer than two months or when the older half has no
    /// positive spend.
    #[must_use]
    pub fn analyze_trend(costs: &[Decimal], thresholds: &TrendThresholds) -> Option<TrendAnalysis> {
        let half = costs.len() / 2;
        if half == 0 {
            return None;
        }

        let older_average = mean(&costs[..half]);
        let recent_average = mean(&costs[costs.len() - half..]);
        if older_average <= Decimal::ZERO {
            return None;
        }

        let change_percent = percent_change(recent_average, older_average);
        let direction = if change_percent > thresholds.significant_percent {
            TrendDirection::Upward
        } else if change_percent < -thresholds.significant_percent {
            TrendDirection::Downward
        } else {
            TrendDirection::Stable
        };

        Some(TrendAnalysis {
            recent_average,
            older_average,
            change_percent,
            direction,
        })
    }
}

fn mean(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        Decimal::ZERO
    } else {
        values.iter().copied().sum::<Decimal>() / Decimal::from(values.len())
    }
}
