//! costlens cost summary
//!
//! Prints month-to-date spend and the current month's forecast, each compared
//! against last month.

use costlens_billing::CostExplorerSource;
use costlens_core::period::ReportWindows;
use costlens_core::summary::SummaryService;
use costlens_render::render_summary;
use costlens_shared::{AppConfig, AppError, telemetry};
use tracing::{debug, error};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    telemetry::init();

    let config = AppConfig::load().map_err(AppError::from)?;
    let source = CostExplorerSource::from_config(&config.billing).await;

    let windows = ReportWindows::for_date(chrono::Local::now().date_naive());
    for (label, range) in windows.entries() {
        debug!(label, %range, "report window");
    }

    let summary = SummaryService::collect(&source, windows)
        .await
        .map_err(AppError::from)
        .inspect_err(|err| error!(code = err.error_code(), %err, "cost summary failed"))?;

    println!("{}", render_summary(&summary));
    Ok(())
}
