//! History data types.

use costlens_shared::config::HistoryConfig;
use costlens_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::MonthWindow;

/// Thresholds used to classify changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendThresholds {
    /// Month-over-month change (percent) beyond which a month is rising or falling.
    pub arrow_percent: Decimal,
    /// Recent-vs-older change (percent) considered significant.
    pub significant_percent: Decimal,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self {
            arrow_percent: Decimal::from(5),
            significant_percent: Decimal::from(10),
        }
    }
}

impl From<&HistoryConfig> for TrendThresholds {
    fn from(config: &HistoryConfig) -> Self {
        Self {
            arrow_percent: config.arrow_threshold_percent,
            significant_percent: config.significant_threshold_percent,
        }
    }
}

/// Direction of a single month against the month before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthTrend {
    /// Increased beyond the arrow threshold.
    Up,
    /// Decreased beyond the arrow threshold.
    Down,
    /// Within the arrow threshold.
    Flat,
}

/// Cost of one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyCost {
    /// The month queried.
    pub window: MonthWindow,
    /// Total cost for the month.
    pub cost: Decimal,
    /// Direction against the previous month, when that month had a positive cost.
    pub trend: Option<MonthTrend>,
    /// True when the query failed and zero was substituted.
    pub query_failed: bool,
}

/// Summary statistics over the monthly costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStatistics {
    /// Sum of all months.
    pub total: Decimal,
    /// Mean monthly cost.
    pub average: Decimal,
    /// Lowest month.
    pub minimum: Decimal,
    /// Highest month.
    pub maximum: Decimal,
    /// Month-over-month changes (percent), oldest pair first.
    pub changes: Vec<Decimal>,
    /// Mean of `changes`, zero when there are none.
    pub average_change: Decimal,
}

/// Overall direction of recent spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Recent months are significantly above older months.
    Upward,
    /// Recent months are significantly below older months.
    Downward,
    /// Within the significance threshold.
    Stable,
}

/// Recent months compared with older months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Mean of the most recent half of the months.
    pub recent_average: Decimal,
    /// Mean of the older half of the months.
    pub older_average: Decimal,
    /// Change of the recent mean against the older mean (percent).
    pub change_percent: Decimal,
    /// Classified direction.
    pub direction: TrendDirection,
}

/// Multi-month history report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryReport {
    /// Currency of every amount.
    pub currency: Currency,
    /// Monthly costs, oldest first.
    pub months: Vec<MonthlyCost>,
    /// Statistics, absent when no months were requested.
    pub statistics: Option<HistoryStatistics>,
    /// Trend analysis, absent with fewer than two months or no positive older spend.
    pub trend: Option<TrendAnalysis>,
}

impl HistoryReport {
    /// Number of months whose query failed.
    #[must_use]
    pub fn failed_months(&self) -> usize {
        self.months.iter().filter(|m| m.query_failed).count()
    }
}
