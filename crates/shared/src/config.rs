//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report layout and output configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Variance classification configuration.
    #[serde(default)]
    pub variance: VarianceConfig,
}

/// How the report binary emits its results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text lines for a console.
    #[default]
    Text,
    /// The report value objects as JSON.
    Json,
}

/// Report layout configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Width of the statement label column.
    #[serde(default = "default_label_width")]
    pub label_width: usize,
    /// Width of the statement amount column.
    #[serde(default = "default_amount_width")]
    pub amount_width: usize,
    /// Currency used for every rendered amount.
    #[serde(default)]
    pub currency: Currency,
    /// Output format.
    #[serde(default)]
    pub output: OutputFormat,
    /// Restrict the income statement to a single period (e.g. "2023-Q1").
    #[serde(default)]
    pub period: Option<String>,
}

fn default_label_width() -> usize {
    25
}

fn default_amount_width() -> usize {
    15
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            label_width: default_label_width(),
            amount_width: default_amount_width(),
            currency: Currency::default(),
            output: OutputFormat::default(),
            period: None,
        }
    }
}

/// Variance classification configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct VarianceConfig {
    /// Percent beyond which a variance leaves the Yellow band, in either direction.
    #[serde(default = "default_threshold_percent")]
    pub threshold_percent: Decimal,
}

fn default_threshold_percent() -> Decimal {
    Decimal::TEN
}

impl Default for VarianceConfig {
    fn default() -> Self {
        Self {
            threshold_percent: default_threshold_percent(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("TALLY")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    /// Builds configuration from an already assembled set of sources.
    ///
    /// # Errors
    ///
    /// Returns an error if a source fails to load or a value has the wrong shape.
    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn from_toml(toml: &str) -> Result<AppConfig, config::ConfigError> {
        AppConfig::from_builder(
            config::Config::builder()
                .add_source(config::File::from_str(toml, config::FileFormat::Toml)),
        )
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.report.label_width, 25);
        assert_eq!(config.report.amount_width, 15);
        assert_eq!(config.report.currency, Currency::Usd);
        assert_eq!(config.report.output, OutputFormat::Text);
        assert!(config.report.period.is_none());
        assert_eq!(config.variance.threshold_percent, dec!(10));
    }

    #[test]
    fn test_empty_sources_use_defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config.report.label_width, 25);
        assert_eq!(config.variance.threshold_percent, dec!(10));
    }

    #[test]
    fn test_file_overrides() {
        let config = from_toml(
            r#"
            [report]
            label_width = 30
            currency = "EUR"
            output = "json"
            period = "2023-Q1"

            [variance]
            threshold_percent = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.report.label_width, 30);
        assert_eq!(config.report.amount_width, 15);
        assert_eq!(config.report.currency, Currency::Eur);
        assert_eq!(config.report.output, OutputFormat::Json);
        assert_eq!(config.report.period.as_deref(), Some("2023-Q1"));
        assert_eq!(config.variance.threshold_percent, dec!(5));
    }

    #[test]
    fn test_unknown_output_format_is_rejected() {
        assert!(from_toml("[report]\noutput = \"pdf\"").is_err());
    }
}
