//! AWS Cost Explorer adapter for costlens.
//!
//! Implements [`costlens_core::billing::CostSource`] on top of the official
//! SDK. Credentials come from the SDK's default provider chain, optionally
//! narrowed to a named profile.

mod amount;
mod client;

pub use amount::{parse_amount, parse_currency};
pub use client::CostExplorerSource;
