//! Rendering of costlens reports.
//!
//! - `format` - Currency and percentage text
//! - `palette` - Sign-to-color mapping shared by both outputs
//! - `terminal` - ANSI-colored text for stdout
//! - `html` - Standalone HTML page and its output file

pub mod format;
pub mod html;
pub mod palette;
pub mod terminal;

pub use format::{format_money, format_percent};
pub use html::{render_summary_html, write_report};
pub use palette::{Accent, change_accent};
pub use terminal::{render_history, render_summary};
