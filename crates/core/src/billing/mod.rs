//! The billing API seam.
//!
//! Report logic talks to the billing API only through [`CostSource`], so it can
//! be exercised without credentials or network access.

pub mod error;
pub mod source;

pub use error::BillingError;
pub use source::CostSource;

#[cfg(test)]
pub use source::MockCostSource;
