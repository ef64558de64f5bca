//! Application configuration management.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
///
/// Every field has a default, so the tools run without any config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Billing API configuration.
    #[serde(default)]
    pub billing: BillingConfig,
    /// Report output configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Historical report configuration.
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Billing API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Region the Cost Explorer endpoint lives in.
    #[serde(default = "default_region")]
    pub region: String,
    /// Named credentials profile. `None` uses the default provider chain.
    #[serde(default)]
    pub profile: Option<String>,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            profile: None,
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}

/// Report output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Directory the HTML report is written into.
    #[serde(default = "default_html_dir")]
    pub html_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            html_dir: default_html_dir(),
        }
    }
}

fn default_html_dir() -> PathBuf {
    PathBuf::from("html")
}

/// Historical report configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Number of calendar months to report, current month included.
    #[serde(default = "default_months")]
    pub months: u32,
    /// Month-over-month change (percent) beyond which a trend arrow tilts.
    #[serde(default = "default_arrow_threshold")]
    pub arrow_threshold_percent: Decimal,
    /// Recent-vs-older change (percent) considered a significant trend.
    #[serde(default = "default_significant_threshold")]
    pub significant_threshold_percent: Decimal,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            months: default_months(),
            arrow_threshold_percent: default_arrow_threshold(),
            significant_threshold_percent: default_significant_threshold(),
        }
    }
}

fn default_months() -> u32 {
    6
}

fn default_arrow_threshold() -> Decimal {
    Decimal::from(5)
}

fn default_significant_threshold() -> Decimal {
    Decimal::from(10)
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("COSTLENS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(
            [
                "COSTLENS__BILLING__REGION",
                "COSTLENS__BILLING__PROFILE",
                "COSTLENS__REPORT__HTML_DIR",
                "COSTLENS__HISTORY__MONTHS",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.billing.region, "us-east-1");
                assert!(config.billing.profile.is_none());
                assert_eq!(config.report.html_dir, PathBuf::from("html"));
                assert_eq!(config.history.months, 6);
                assert_eq!(config.history.arrow_threshold_percent, dec!(5));
                assert_eq!(config.history.significant_threshold_percent, dec!(10));
            },
        );
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("COSTLENS__BILLING__REGION", Some("eu-west-1")),
                ("COSTLENS__BILLING__PROFILE", Some("finance")),
                ("COSTLENS__REPORT__HTML_DIR", Some("public")),
                ("COSTLENS__HISTORY__MONTHS", Some("12")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.billing.region, "eu-west-1");
                assert_eq!(config.billing.profile.as_deref(), Some("finance"));
                assert_eq!(config.report.html_dir, PathBuf::from("public"));
                assert_eq!(config.history.months, 12);
            },
        );
    }
}
