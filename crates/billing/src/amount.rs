//! Parsing of the string-encoded figures Cost Explorer returns.

use std::str::FromStr;

use costlens_core::billing::BillingError;
use costlens_shared::types::Currency;
use rust_decimal::Decimal;
use tracing::warn;

/// Parses an amount such as `"123.4567"` or `"1.2E-7"`.
pub fn parse_amount(raw: &str) -> Result<Decimal, BillingError> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| BillingError::InvalidAmount(raw.to_string()))
}

/// Parses a metric unit.
///
/// A missing or unrecognised unit falls back to USD; the amount is still
/// reported.
#[must_use]
pub fn parse_currency(unit: Option<&str>) -> Currency {
    let Some(unit) = unit else {
        return Currency::default();
    };

    Currency::from_str(unit).unwrap_or_else(|_| {
        warn!(unit, fallback = %Currency::default(), "unrecognised currency unit");
        Currency::default()
    })
}
