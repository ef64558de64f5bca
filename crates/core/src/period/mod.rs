//! Reporting windows derived from today's date.

pub mod windows;

#[cfg(test)]
mod windows_props;

pub use windows::{MonthWindow, ReportWindows, first_of_month, trailing_months};
