//! Core cost reporting logic for costlens.
//!
//! This crate contains pure reporting logic with ZERO SDK or terminal dependencies.
//! Date windows, percentage math, and trend statistics live here; the billing
//! API is reached only through the [`billing::CostSource`] trait.
//!
//! # Modules
//!
//! - `period` - Date-range derivation from today's date
//! - `change` - Percentage-change formula
//! - `billing` - The billing API seam and its errors
//! - `summary` - Month-to-date and forecast comparison
//! - `history` - Multi-month history and trend statistics

pub mod billing;
pub mod change;
pub mod history;
pub mod period;
pub mod summary;
