//! Summary data types.

use costlens_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::ReportWindows;

/// Current spend compared against last month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendSummary {
    /// Windows the figures were queried for.
    pub windows: ReportWindows,
    /// Currency of every amount below.
    pub currency: Currency,
    /// Cost from the first of the month until today.
    pub month_to_date: Decimal,
    /// Cost over the same days of last month.
    pub last_month_same_period: Decimal,
    /// Cost over all of last month.
    pub last_month_total: Decimal,
    /// Forecasted cost for the rest of the current month.
    pub forecast: Decimal,
    /// Month-to-date change against the same period last month (percent).
    pub month_to_date_change: Decimal,
    /// Forecast change against last month's total (percent).
    pub forecast_change: Decimal,
}
