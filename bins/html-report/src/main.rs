//! costlens HTML report
//!
//! Writes the cost summary to `html/index.html` (or the configured directory).

use costlens_billing::CostExplorerSource;
use costlens_core::period::ReportWindows;
use costlens_core::summary::SummaryService;
use costlens_render::{render_summary_html, write_report};
use costlens_shared::{AppConfig, AppError, telemetry};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    telemetry::init();

    let config = AppConfig::load().map_err(AppError::from)?;
    let source = CostExplorerSource::from_config(&config.billing).await;

    let now = chrono::Local::now().naive_local();
    let windows = ReportWindows::for_date(now.date());

    let summary = SummaryService::collect(&source, windows)
        .await
        .map_err(AppError::from)
        .inspect_err(|err| error!(code = err.error_code(), %err, "cost summary failed"))?;

    let html = render_summary_html(&summary, now);
    let path = write_report(&config.report.html_dir, &html)
        .inspect_err(|err| error!(code = err.error_code(), %err, "writing html report failed"))?;

    println!("HTML report generated: {}", path.display());
    Ok(())
}
