//! The billing API trait.

use async_trait::async_trait;
use costlens_shared::types::{DateRange, Money};

use super::error::BillingError;

/// Read-only access to cost figures at monthly granularity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CostSource: Send + Sync {
    /// Total unblended cost over `range`, summed across every returned period.
    async fn cost_and_usage(&self, range: &DateRange) -> Result<Money, BillingError>;

    /// Forecasted unblended cost over `range`.
    async fn forecast(&self, range: &DateRange) -> Result<Money, BillingError>;
}
