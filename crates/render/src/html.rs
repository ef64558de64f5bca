//! Static HTML report.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use costlens_core::summary::SpendSummary;
use costlens_shared::AppResult;
use costlens_shared::types::{Currency, Money};
use rust_decimal::Decimal;
use tracing::info;

use crate::format::{format_money, format_percent};
use crate::palette::{Accent, change_accent};

/// File name of the report inside the output directory.
pub const REPORT_FILE: &str = "index.html";

const STYLE: &str = r"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            background-color: #000000;
            color: #ffffff;
            font-family: 'Monaco', 'Menlo', 'Ubuntu Mono', 'Consolas', 'Courier New', monospace;
            padding: 20px;
            min-height: 100vh;
        }

        .container {
            max-width: 800px;
            width: 100%;
            margin: 0 auto;
            padding: 30px;
        }

        .cost-section {
            margin-bottom: 25px;
            padding: 15px;
            border-left: 3px solid #5555ff;
        }

        .cost-label {
            font-size: 18px;
            margin-bottom: 10px;
            display: flex;
            align-items: center;
            gap: 8px;
        }

        .cost-value {
            font-size: 28px;
            margin: 10px 0;
        }

        .comparison {
            margin-top: 8px;
            margin-left: 20px;
            font-size: 14px;
            color: #cccccc;
        }

        .comparison-item {
            margin: 5px 0;
        }

        .emoji {
            font-size: 20px;
        }

        .update-date {
            text-align: right;
            margin-top: 30px;
            padding-top: 15px;
            color: #666666;
            font-size: 12px;
        }
";

fn styled(text: &str, accent: Accent) -> String {
    format!(
        r#"<span style="color: {}; font-weight: bold;">{text}</span>"#,
        accent.hex()
    )
}

fn money(amount: Decimal, currency: Currency, accent: Accent) -> String {
    styled(&format_money(Money::new(amount, currency)), accent)
}

fn percent(value: Decimal) -> String {
    styled(&format_percent(value), change_accent(value))
}

struct Section<'a> {
    emoji: &'a str,
    label: &'a str,
    value: String,
    comparisons: [String; 2],
}

impl Section<'_> {
    fn render(&self) -> String {
        format!(
            r#"        <div class="cost-section">
            <div class="cost-label">
                <span class="emoji">{emoji}</span>
                <span>{label}</span>
            </div>
            <div class="cost-value">
                {value}
            </div>
            <div class="comparison">
                <div class="comparison-item">
                    ↳ {first}
                </div>
                <div class="comparison-item">
                    ↳ {second}
                </div>
            </div>
        </div>
"#,
            emoji = self.emoji,
            label = self.label,
            value = self.value,
            first = self.comparisons[0],
            second = self.comparisons[1],
        )
    }
}

/// Renders the summary as a standalone HTML page.
#[must_use]
pub fn render_summary_html(summary: &SpendSummary, generated_at: NaiveDateTime) -> String {
    let currency = summary.currency;

    let month_to_date = Section {
        emoji: "📅",
        label: "Month-to-date cost:",
        value: money(summary.month_to_date, currency, Accent::Cyan),
        comparisons: [
            format!(
                "{} compared to last month for the same period",
                percent(summary.month_to_date_change)
            ),
            format!(
                "Last month's cost for the same period: {}",
                money(summary.last_month_same_period, currency, Accent::Yellow)
            ),
        ],
    };

    let forecast = Section {
        emoji: "🔮",
        label: "Total forecasted cost for current month:",
        value: money(summary.forecast, currency, Accent::Magenta),
        comparisons: [
            format!(
                "{} compared to last month's total costs",
                percent(summary.forecast_change)
            ),
            format!(
                "Last month's total cost: {}",
                money(summary.last_month_total, currency, Accent::Yellow)
            ),
        ],
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>AWS Cost Summary</title>
    <style>{STYLE}    </style>
</head>
<body>
    <div class="container">
{month_to_date}
{forecast}
        <div class="update-date">
            Last updated: {updated}
        </div>
    </div>
</body>
</html>"#,
        month_to_date = month_to_date.render(),
        forecast = forecast.render(),
        updated = generated_at.format("%Y-%m-%d %H:%M:%S"),
    )
}

/// Writes the page to `<dir>/index.html`, creating `dir` when missing.
///
/// Returns the path written.
pub fn write_report(dir: &Path, html: &str) -> AppResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(REPORT_FILE);
    fs::write(&path, html)?;

    info!(path = %path.display(), bytes = html.len(), "html report written");
    Ok(path)
}
