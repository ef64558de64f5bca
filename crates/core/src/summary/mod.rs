//! Month-to-date and forecast spend summary.

pub mod service;
pub mod types;


pub use service::SummaryService;
pub use types::SpendSummary;
