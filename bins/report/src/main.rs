//! Tally report runner.
//!
//! Loads configuration, pulls the demonstration data from the sample provider
//! and prints the income statement followed by the variance report.
//!
//! Usage: cargo run --bin tally-report

use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_core::source::{BudgetSource, LedgerSource, SampleData};
use tally_core::statement::{
    self, StatementBuilder, StatementLayout, StatementLine, StatementStructure,
};
use tally_core::variance::{
    self, DepartmentVariance, Thresholds, VarianceAnalyzer, VarianceLayout, VarianceSummary,
};
use tally_shared::{AppConfig, AppError, AppResult, OutputFormat};

/// Everything the runner produces, for JSON output.
#[derive(Debug, Serialize)]
struct ReportBundle {
    period: Option<String>,
    statement: Vec<StatementLine>,
    variances: Vec<DepartmentVariance>,
    variance_summary: VarianceSummary,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally_report=info,tally_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load().map_err(AppError::from)?;
    info!(
        output = ?config.report.output,
        currency = %config.report.currency,
        "Configuration loaded"
    );

    match run(&config, &SampleData) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
        Err(err) => {
            tracing::error!(code = err.error_code(), "{err}");
            std::process::exit(err.exit_code());
        }
    }
}

fn run<S: LedgerSource + BudgetSource>(config: &AppConfig, source: &S) -> AppResult<Vec<String>> {
    let transactions = source
        .transactions()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let budget_rows = source
        .budget_rows()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    info!(
        transactions = transactions.len(),
        budget_rows = budget_rows.len(),
        "Input rows loaded"
    );

    let period = config
        .report
        .period
        .clone()
        .or_else(|| StatementBuilder::periods(&transactions).into_iter().next());

    let structure = StatementStructure::standard();
    let statement_lines = match &period {
        Some(period) => StatementBuilder::build_for_period(&transactions, &structure, period),
        None => StatementBuilder::build(&transactions, &structure),
    };

    let thresholds = Thresholds::from(&config.variance);
    let variances = VarianceAnalyzer::analyze_with(&budget_rows, &thresholds);
    let variance_summary = VarianceAnalyzer::summarize(&variances);

    match config.report.output {
        OutputFormat::Text => {
            let mut out = statement::render(
                &statement_lines,
                &StatementLayout::from(&config.report),
                &statement::statement_title(period.as_deref()),
            );
            out.push(String::new());
            out.extend(variance::render(
                &variances,
                &VarianceLayout::from(&config.report),
            ));
            Ok(out)
        }
        OutputFormat::Json => {
            let bundle = ReportBundle {
                period,
                statement: statement_lines,
                variances,
                variance_summary,
            };
            Ok(vec![serde_json::to_string_pretty(&bundle)?])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tally_core::source::InMemorySource;
    use tally_core::statement::TransactionRow;
    use tally_core::variance::BudgetRow;

    #[test]
    fn test_text_output_contains_both_reports() {
        let lines = run(&AppConfig::default(), &SampleData).unwrap();

        assert_eq!(lines[0], "Income Statement (2023-Q1)");
        assert!(lines.iter().any(|line| line.starts_with("Net Income")));
        assert!(lines.iter().any(|line| line == "Variance Analysis Report"));
    }

    #[test]
    fn test_json_output() {
        let mut config = AppConfig::default();
        config.report.output = OutputFormat::Json;

        let lines = run(&config, &SampleData).unwrap();
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();

        assert_eq!(value["period"], "2023-Q1");
        assert_eq!(value["statement"].as_array().map(Vec::len), Some(9));
        assert_eq!(value["variances"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn test_invalid_transaction_is_validation_error() {
        let source = InMemorySource::new().with_transactions(vec![TransactionRow::new(
            "Revenue",
            "",
            Decimal::ONE,
            "P1",
        )]);

        let err = run(&AppConfig::default(), &source).unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.exit_code(), 65);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_invalid_budget_row_is_validation_error() {
        let source = InMemorySource::new()
            .with_budget_rows(vec![BudgetRow::new(" ", Decimal::ONE, Decimal::ONE)]);

        let err = run(&AppConfig::default(), &source).unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("department is empty"));
    }
}
