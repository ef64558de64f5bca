//! costlens cost history
//!
//! Prints the last six calendar months of spend with summary statistics and
//! a recent-versus-older trend. Months whose query fails count as zero.

use costlens_billing::CostExplorerSource;
use costlens_core::history::{HistoryService, TrendThresholds};
use costlens_core::period::trailing_months;
use costlens_render::render_history;
use costlens_shared::{AppConfig, AppError, telemetry};
use tracing::warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    telemetry::init();

    let config = AppConfig::load().map_err(AppError::from)?;
    let source = CostExplorerSource::from_config(&config.billing).await;

    let months = trailing_months(chrono::Local::now().date_naive(), config.history.months);
    let thresholds = TrendThresholds::from(&config.history);

    let report = HistoryService::collect(&source, months, &thresholds).await;
    if report.failed_months() > 0 {
        warn!(
            failed = report.failed_months(),
            "some months could not be fetched and were counted as zero"
        );
    }

    println!("{}", render_history(&report));
    Ok(())
}
