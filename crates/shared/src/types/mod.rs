//! Common types used across the application.

pub mod money;
pub mod period;

pub use money::{Currency, Money};
pub use period::DateRange;
