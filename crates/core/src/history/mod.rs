//! Multi-month cost history and trend statistics.

pub mod service;
pub mod types;

#[cfg(test)]
mod statistics_props;

pub use service::HistoryService;
pub use types::{
    HistoryReport, HistoryStatistics, MonthTrend, MonthlyCost, TrendAnalysis, TrendDirection,
    TrendThresholds,
};
