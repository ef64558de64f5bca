//! Billing API error types.

use costlens_shared::AppError;
use costlens_shared::types::DateRange;
use thiserror::Error;

/// Errors raised while querying the billing API.
#[derive(Debug, Error)]
pub enum BillingError {
    /// The request failed (credentials, throttling, service error).
    #[error("{operation} failed for {range}: {message}")]
    Request {
        /// API operation name.
        operation: &'static str,
        /// Requested range.
        range: DateRange,
        /// Underlying error description.
        message: String,
    },

    /// The response did not contain the expected figure.
    #[error("response for {range} is missing {field}")]
    MissingData {
        /// Requested range.
        range: DateRange,
        /// The absent field.
        field: &'static str,
    },

    /// An amount string could not be parsed as a decimal.
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    /// The range cannot be sent to the API.
    #[error("invalid date range {0}")]
    InvalidRange(DateRange),
}

impl BillingError {
    /// Create a request error.
    #[must_use]
    pub fn request(operation: &'static str, range: DateRange, message: impl Into<String>) -> Self {
        Self::Request {
            operation,
            range,
            message: message.into(),
        }
    }

    /// Create a missing data error.
    #[must_use]
    pub const fn missing(range: DateRange, field: &'static str) -> Self {
        Self::MissingData { range, field }
    }
}

impl From<BillingError> for AppError {
    fn from(err: BillingError) -> Self {
        Self::Billing(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        )
    }

    #[test]
    fn test_request_display() {
        let err = BillingError::request("GetCostAndUsage", range(), "expired token");
        assert_eq!(
            err.to_string(),
            "GetCostAndUsage failed for 2026-10-01..2026-10-18: expired token"
        );
    }

    #[test]
    fn test_missing_display() {
        let err = BillingError::missing(range(), "MeanValue");
        assert_eq!(
            err.to_string(),
            "response for 2026-10-01..2026-10-18 is missing MeanValue"
        );
    }

    #[test]
    fn test_into_app_error() {
        let err: AppError = BillingError::InvalidAmount("abc".into()).into();
        assert_eq!(err.error_code(), "BILLING_API_ERROR");
        assert_eq!(err.to_string(), "Billing API error: invalid amount 'abc'");
    }
}
