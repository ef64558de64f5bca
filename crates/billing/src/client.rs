//! Cost Explorer client.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_costexplorer::Client;
use aws_sdk_costexplorer::config::Region;
use aws_sdk_costexplorer::error::DisplayErrorContext;
use aws_sdk_costexplorer::types::{
    DateInterval, ForecastResult, Granularity, Metric, MetricValue, ResultByTime,
};
use costlens_core::billing::{BillingError, CostSource};
use costlens_shared::config::BillingConfig;
use costlens_shared::types::{Currency, DateRange, Money};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::amount::{parse_amount, parse_currency};

const GET_COST_AND_USAGE: &str = "GetCostAndUsage";
const GET_COST_FORECAST: &str = "GetCostForecast";

/// Metric name used by `GetCostAndUsage`.
const COST_METRIC: &str = "UnblendedCost";

/// [`CostSource`] backed by the AWS Cost Explorer API.
#[derive(Debug, Clone)]
pub struct CostExplorerSource {
    client: Client,
}

impl CostExplorerSource {
    /// Wraps an already configured SDK client.
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from the billing configuration.
    ///
    /// Credentials are resolved lazily by the SDK, so a missing credential
    /// only surfaces on the first query.
    pub async fn from_config(config: &BillingConfig) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        let sdk_config = loader.load().await;

        debug!(region = %config.region, profile = ?config.profile, "cost explorer client ready");
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl CostSource for CostExplorerSource {
    async fn cost_and_usage(&self, range: &DateRange) -> Result<Money, BillingError> {
        let period = date_interval(GET_COST_AND_USAGE, range)?;

        let output = self
            .client
            .get_cost_and_usage()
            .time_period(period)
            .granularity(Granularity::Monthly)
            .metrics(COST_METRIC)
            .send()
            .await
            .map_err(|err| {
                BillingError::request(
                    GET_COST_AND_USAGE,
                    *range,
                    DisplayErrorContext(&err).to_string(),
                )
            })?;

        let cost = total_cost(output.results_by_time(), range)?;
        debug!(%range, amount = %cost.amount, currency = %cost.currency, "cost and usage");
        Ok(cost)
    }

    async fn forecast(&self, range: &DateRange) -> Result<Money, BillingError> {
        let period = date_interval(GET_COST_FORECAST, range)?;

        let output = self
            .client
            .get_cost_forecast()
            .time_period(period)
            .metric(Metric::UnblendedCost)
            .granularity(Granularity::Monthly)
            .send()
            .await
            .map_err(|err| {
                BillingError::request(
                    GET_COST_FORECAST,
                    *range,
                    DisplayErrorContext(&err).to_string(),
                )
            })?;

        let forecast = forecast_amount(output.forecast_results_by_time(), output.total(), range)?;
        debug!(%range, amount = %forecast.amount, currency = %forecast.currency, "cost forecast");
        Ok(forecast)
    }
}

fn date_interval(operation: &'static str, range: &DateRange) -> Result<DateInterval, BillingError> {
    if range.is_empty() {
        return Err(BillingError::InvalidRange(*range));
    }

    DateInterval::builder()
        .start(range.start_iso())
        .end(range.end_iso())
        .build()
        .map_err(|err| BillingError::request(operation, *range, err.to_string()))
}

/// Sums the unblended cost over every returned period.
///
/// An empty result list means no spend. The currency is the first period's;
/// periods reported in another unit are still added.
fn total_cost(results: &[ResultByTime], range: &DateRange) -> Result<Money, BillingError> {
    let mut total = Decimal::ZERO;
    let mut currency: Option<Currency> = None;

    for period in results {
        let metric = period
            .total()
            .and_then(|totals| totals.get(COST_METRIC))
            .ok_or_else(|| BillingError::missing(*range, "Total.UnblendedCost"))?;
        let amount = metric
            .amount()
            .ok_or_else(|| BillingError::missing(*range, "Total.UnblendedCost.Amount"))?;

        total += parse_amount(amount)?;

        let unit = parse_currency(metric.unit());
        match currency {
            None => currency = Some(unit),
            Some(first) if first != unit => {
                warn!(%range, expected = %first, found = %unit, "mixed currency units in cost results");
            }
            Some(_) => {}
        }
    }

    Ok(Money::new(total, currency.unwrap_or_default()))
}

/// Reads the mean forecast of the first period, falling back to the total.
fn forecast_amount(
    results: &[ForecastResult],
    total: Option<&MetricValue>,
    range: &DateRange,
) -> Result<Money, BillingError> {
    let amount = results
        .first()
        .and_then(ForecastResult::mean_value)
        .or_else(|| total.and_then(MetricValue::amount))
        .ok_or_else(|| BillingError::missing(*range, "ForecastResultsByTime.MeanValue"))?;

    Ok(Money::new(
        parse_amount(amount)?,
        parse_currency(total.and_then(MetricValue::unit)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
        )
    }

    fn metric(amount: &str, unit: &str) -> MetricValue {
        MetricValue::builder().amount(amount).unit(unit).build()
    }

    fn period(amount: &str) -> ResultByTime {
        period_in(amount, "USD")
    }

    fn period_in(amount: &str, unit: &str) -> ResultByTime {
        ResultByTime::builder()
            .total(COST_METRIC, metric(amount, unit))
            .build()
    }

    #[test]
    fn test_total_cost_sums_periods() {
        let results = vec![period("10.25"), period("4.75"), period("1.5E-2")];
        let cost = total_cost(&results, &range()).unwrap();
        assert_eq!(cost, Money::usd(dec!(15.015)));
    }

    #[test]
    fn test_total_cost_empty_is_zero() {
        let cost = total_cost(&[], &range()).unwrap();
        assert_eq!(cost, Money::usd(Decimal::ZERO));
    }

    #[rstest]
    #[case("CNY")]
    #[case("AUD")]
    #[case("INR")]
    #[case("N/A")]
    fn test_total_cost_unknown_unit_still_reports_amount(#[case] unit: &str) {
        let results = vec![period_in("12.34", unit)];
        let cost = total_cost(&results, &range()).unwrap();
        assert_eq!(cost, Money::usd(dec!(12.34)));
    }

    #[test]
    fn test_total_cost_mixed_units_keeps_first_currency() {
        let results = vec![period_in("10", "EUR"), period_in("5", "USD")];
        let cost = total_cost(&results, &range()).unwrap();
        assert_eq!(cost, Money::new(dec!(15), Currency::Eur));
    }

    #[test]
    fn test_forecast_unknown_unit_still_reports_amount() {
        let total = metric("99.5", "CNY");
        let forecast = forecast_amount(&[], Some(&total), &range()).unwrap();
        assert_eq!(forecast, Money::usd(dec!(99.5)));
    }

    #[test]
    fn test_total_cost_missing_metric() {
        let results = vec![
            ResultByTime::builder()
                .total("BlendedCost", metric("3", "USD"))
                .build(),
        ];
        assert!(matches!(
            total_cost(&results, &range()),
            Err(BillingError::MissingData { field: "Total.UnblendedCost", .. })
        ));
    }

    #[test]
    fn test_total_cost_rejects_bad_amount() {
        let results = vec![period("abc")];
        assert!(matches!(
            total_cost(&results, &range()),
            Err(BillingError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_forecast_uses_first_mean_value() {
        let results = vec![
            ForecastResult::builder().mean_value("321.09").build(),
            ForecastResult::builder().mean_value("1").build(),
        ];
        let total = metric("400", "USD");
        let forecast = forecast_amount(&results, Some(&total), &range()).unwrap();
        assert_eq!(forecast, Money::usd(dec!(321.09)));
    }

    #[test]
    fn test_forecast_falls_back_to_total() {
        let total = metric("400.5", "EUR");
        let forecast = forecast_amount(&[], Some(&total), &range()).unwrap();
        assert_eq!(forecast, Money::new(dec!(400.5), Currency::Eur));
    }

    #[test]
    fn test_forecast_missing() {
        assert!(matches!(
            forecast_amount(&[], None, &range()),
            Err(BillingError::MissingData { .. })
        ));
    }

    #[test]
    fn test_date_interval_rejects_empty_range() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        let empty = DateRange::new(day, day);
        assert!(matches!(
            date_interval(GET_COST_AND_USAGE, &empty),
            Err(BillingError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_date_interval_uses_iso_dates() {
        let interval = date_interval(GET_COST_AND_USAGE, &range()).unwrap();
        assert_eq!(interval.start(), "2026-09-01");
        assert_eq!(interval.end(), "2026-10-01");
    }
}
