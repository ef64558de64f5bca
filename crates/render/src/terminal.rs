//! ANSI-colored terminal output.
//!
//! Colors follow `colored`'s global control, so `NO_COLOR` and non-tty
//! output fall back to plain text.

use colored::{ColoredString, Colorize};
use costlens_core::history::{HistoryReport, MonthTrend, TrendDirection};
use costlens_core::summary::SpendSummary;
use costlens_shared::types::{Currency, Money};
use rust_decimal::Decimal;

use crate::format::{format_money, format_percent};
use crate::palette::{Accent, change_accent};

const SUMMARY_BANNER: &str = "================= AWS COST SUMMARY =================";
const SUMMARY_RULE: &str = "====================================================";
const HISTORY_RULE: &str = "================================================================";

fn money(amount: Decimal, currency: Currency, accent: Accent) -> ColoredString {
    format_money(Money::new(amount, currency)).color(accent.terminal()).bold()
}

fn percent(value: Decimal) -> ColoredString {
    format_percent(value)
        .color(change_accent(value).terminal())
        .bold()
}

fn banner(text: &str) -> ColoredString {
    text.color(Accent::Blue.terminal()).bold()
}

/// Renders the month-to-date and forecast summary.
#[must_use]
pub fn render_summary(summary: &SpendSummary) -> String {
    let currency = summary.currency;
    let lines = [
        String::new(),
        banner(SUMMARY_BANNER).to_string(),
        format!(
            "📅 Month-to-date cost: {}",
            money(summary.month_to_date, currency, Accent::Cyan)
        ),
        format!(
            "   ↳ {} compared to last month for the same period",
            percent(summary.month_to_date_change)
        ),
        format!(
            "   ↳ Last month's cost for the same period: {}",
            money(summary.last_month_same_period, currency, Accent::Yellow)
        ),
        String::new(),
        format!(
            "🔮 Total forecasted cost for current month: {}",
            money(summary.forecast, currency, Accent::Magenta)
        ),
        format!(
            "   ↳ {} compared to last month's total costs",
            percent(summary.forecast_change)
        ),
        format!(
            "   ↳ Last month's total cost: {}",
            money(summary.last_month_total, currency, Accent::Yellow)
        ),
        banner(SUMMARY_RULE).to_string(),
        String::new(),
    ];
    lines.join("\n")
}

fn trend_arrow(trend: Option<MonthTrend>) -> String {
    match trend {
        Some(MonthTrend::Up) => format!(" {}", "↗".color(Accent::Red.terminal())),
        Some(MonthTrend::Down) => format!(" {}", "↘".color(Accent::Green.terminal())),
        Some(MonthTrend::Flat) => format!(" {}", "→".color(Accent::Yellow.terminal())),
        None => String::new(),
    }
}

/// Renders the multi-month history with statistics and trend analysis.
#[must_use]
pub fn render_history(report: &HistoryReport) -> String {
    let currency = report.currency;
    let month_count = report.months.len();
    let mut lines = vec![
        String::new(),
        banner(&format!(
            "================= AWS HISTORICAL COSTS (Last {month_count} Months) ================="
        ))
        .to_string(),
    ];

    for month in &report.months {
        let failed = if month.query_failed {
            format!(" {}", "(query failed)".dimmed())
        } else {
            String::new()
        };
        lines.push(format!(
            "📅 {:<15} {}{}{}",
            month.window.label,
            money(month.cost, currency, Accent::Cyan),
            trend_arrow(month.trend),
            failed,
        ));
    }

    if let Some(stats) = &report.statistics {
        lines.push(String::new());
        lines.push(
            "📊 SUMMARY STATISTICS"
                .color(Accent::Magenta.terminal())
                .bold()
                .to_string(),
        );
        lines.push(format!(
            "💰 Total cost ({month_count} months): {}",
            money(stats.total, currency, Accent::Magenta)
        ));
        lines.push(format!(
            "📈 Average monthly cost: {}",
            money(stats.average, currency, Accent::Cyan)
        ));
        lines.push(format!(
            "📉 Lowest month: {}",
            money(stats.minimum, currency, Accent::Green)
        ));
        lines.push(format!(
            "📈 Highest month: {}",
            money(stats.maximum, currency, Accent::Red)
        ));
        if !stats.average_change.is_zero() {
            lines.push(format!(
                "📊 Average month-over-month change: {}",
                percent(stats.average_change)
            ));
        }
    }

    if let Some(trend) = &report.trend {
        let half = month_count / 2;
        lines.push(String::new());
        lines.push(
            "📈 TREND ANALYSIS"
                .color(Accent::Yellow.terminal())
                .bold()
                .to_string(),
        );
        lines.push(format!(
            "Recent {half} months vs older {half} months: {}",
            percent(trend.change_percent)
        ));
        let verdict = match trend.direction {
            TrendDirection::Upward => "⚠️  Costs are trending upward significantly"
                .color(Accent::Red.terminal()),
            TrendDirection::Downward => "✅ Costs are trending downward significantly"
                .color(Accent::Green.terminal()),
            TrendDirection::Stable => {
                "📊 Costs are relatively stable".color(Accent::Yellow.terminal())
            }
        };
        lines.push(verdict.to_string());
    }

    lines.push(banner(HISTORY_RULE).to_string());
    lines.push(String::new());
    lines.join("\n")
}
