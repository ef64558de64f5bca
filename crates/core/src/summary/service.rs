//! Summary collection and calculation.

use costlens_shared::types::{Currency, DateRange, Money};
use rust_decimal::Decimal;
use tracing::debug;

use super::types::SpendSummary;
use crate::billing::{BillingError, CostSource};
use crate::change::percent_change;
use crate::period::ReportWindows;

/// Service for building the spend summary.
pub struct SummaryService;

impl SummaryService {
    /// Builds a summary from already fetched figures.
    #[must_use]
    pub fn compute(
        windows: ReportWindows,
        currency: Currency,
        month_to_date: Decimal,
        last_month_same_period: Decimal,
        last_month_total: Decimal,
        forecast: Decimal,
    ) -> SpendSummary {
        SpendSummary {
            windows,
            currency,
            month_to_date,
            last_month_same_period,
            last_month_total,
            forecast,
            month_to_date_change: percent_change(month_to_date, last_month_same_period),
            forecast_change: percent_change(forecast, last_month_total),
        }
    }

    /// Queries every window in turn and builds the summary.
    ///
    /// Any failed query aborts the summary.
    pub async fn collect<S>(source: &S, windows: ReportWindows) -> Result<SpendSummary, BillingError>
    where
        S: CostSource + ?Sized,
    {
        let month_to_date = Self::cost_for(source, &windows.current_month_to_date).await?;
        let same_period = Self::cost_for(source, &windows.last_month_same_period).await?;
        let last_total = Self::cost_for(source, &windows.last_month_total).await?;
        let forecast = Self::forecast_for(source, &windows.current_month_forecast).await?;

        let currency = [forecast, last_total, same_period, month_to_date]
            .into_iter()
            .flatten()
            .map(|money| money.currency)
            .next()
            .unwrap_or_default();

        Ok(Self::compute(
            windows,
            currency,
            amount(month_to_date),
            amount(same_period),
            amount(last_total),
            amount(forecast),
        ))
    }

    async fn cost_for<S>(source: &S, range: &DateRange) -> Result<Option<Money>, BillingError>
    where
        S: CostSource + ?Sized,
    {
        if range.is_empty() {
            debug!(%range, "empty range, counting as zero cost");
            return Ok(None);
        }
        debug!(%range, "querying cost and usage");
        source.cost_and_usage(range).await.map(Some)
    }

    async fn forecast_for<S>(source: &S, range: &DateRange) -> Result<Option<Money>, BillingError>
    where
        S: CostSource + ?Sized,
    {
        if range.is_empty() {
            debug!(%range, "empty range, counting as zero forecast");
            return Ok(None);
        }
        debug!(%range, "querying cost forecast");
        source.forecast(range).await.map(Some)
    }
}

fn amount(money: Option<Money>) -> Decimal {
    money.map_or(Decimal::ZERO, |m| m.amount)
}
