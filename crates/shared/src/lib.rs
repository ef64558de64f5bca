//! Shared types, errors, and configuration for costlens.
//!
//! This crate provides common types used across all other crates:
//! - Money types with decimal precision
//! - Date ranges in the billing API's half-open form
//! - Application-wide error types
//! - Configuration management
//! - Tracing subscriber setup for the binaries

pub mod config;
pub mod error;
pub mod telemetry;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
