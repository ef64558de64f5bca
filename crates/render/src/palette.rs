//! Colors shared by the terminal and HTML renderers.

use colored::Color;
use rust_decimal::Decimal;

/// A named highlight color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    /// Default for current figures.
    Cyan,
    /// Last-month figures and unchanged values.
    Yellow,
    /// Forecasts and totals.
    Magenta,
    /// Decreases.
    Green,
    /// Increases.
    Red,
    /// Banners.
    Blue,
}

impl Accent {
    /// Terminal color (the bright ANSI variants).
    #[must_use]
    pub const fn terminal(self) -> Color {
        match self {
            Self::Cyan => Color::BrightCyan,
            Self::Yellow => Color::BrightYellow,
            Self::Magenta => Color::BrightMagenta,
            Self::Green => Color::BrightGreen,
            Self::Red => Color::BrightRed,
            Self::Blue => Color::BrightBlue,
        }
    }

    /// CSS hex color.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Cyan => "#00ffff",
            Self::Yellow => "#ffff55",
            Self::Magenta => "#ff55ff",
            Self::Green => "#55ff55",
            Self::Red => "#ff5555",
            Self::Blue => "#5555ff",
        }
    }
}

/// Color for a percentage change: spend going up is red, down is green.
#[must_use]
pub fn change_accent(percent: Decimal) -> Accent {
    if percent > Decimal::ZERO {
        Accent::Red
    } else if percent < Decimal::ZERO {
        Accent::Green
    } else {
        Accent::Yellow
    }
}
