//! Fixed-width variance table.

use rust_decimal::{Decimal, RoundingStrategy};
use tally_shared::{Currency, Money, ReportConfig};

use super::types::DepartmentVariance;

/// Marker printed in place of an undefined variance percentage.
pub const NOT_AVAILABLE: &str = "N/A";

/// Column layout of the variance table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarianceLayout {
    /// Department column width, left-aligned.
    pub department_width: usize,
    /// Width of each numeric column, right-aligned.
    pub column_width: usize,
    /// Status column width, right-aligned.
    pub status_width: usize,
    /// Currency for amount columns.
    pub currency: Currency,
}

impl Default for VarianceLayout {
    fn default() -> Self {
        Self {
            department_width: 15,
            column_width: 10,
            status_width: 8,
            currency: Currency::Usd,
        }
    }
}

impl From<&ReportConfig> for VarianceLayout {
    fn from(config: &ReportConfig) -> Self {
        Self {
            currency: config.currency,
            ..Self::default()
        }
    }
}

impl VarianceLayout {
    /// Full table width: six columns separated by single spaces.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.department_width + 4 * (self.column_width + 1) + 1 + self.status_width
    }
}

/// Renders the variance table for `rows`.
#[must_use]
pub fn render(rows: &[DepartmentVariance], layout: &VarianceLayout) -> Vec<String> {
    let mut out = Vec::with_capacity(rows.len() + 4);
    out.push("Variance Analysis Report".to_string());
    out.push("=".repeat(layout.width()));
    out.push(row_text(
        layout,
        "Department",
        ["Actual", "Budget", "Var ($)", "Var (%)"],
        "Status",
    ));
    out.push("-".repeat(layout.width()));

    for row in rows {
        let money = |amount: Decimal| Money::new(amount, layout.currency);
        let actual = money(row.actual).format_signed(0);
        let budget = money(row.budget).format_signed(0);
        let variance = money(row.variance_absolute).format_signed(0);
        let percent = format_percent(row.variance_percent);
        let status = row.status.to_string();

        out.push(row_text(
            layout,
            &row.department,
            [&actual, &budget, &variance, &percent],
            &status,
        ));
    }

    out
}

/// One decimal place with a `%` suffix, or [`NOT_AVAILABLE`].
#[must_use]
pub fn format_percent(percent: Option<Decimal>) -> String {
    let Some(percent) = percent else {
        return NOT_AVAILABLE.to_string();
    };

    let mut rounded = percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.rescale(1);
    format!("{rounded}%")
}

fn row_text(layout: &VarianceLayout, department: &str, columns: [&str; 4], status: &str) -> String {
    let department: String = department.chars().take(layout.department_width).collect();
    let mut text = format!("{department:<width$}", width = layout.department_width);
    for column in columns {
        text.push_str(&format!(" {column:>width$}", width = layout.column_width));
    }
    text.push_str(&format!(" {status:>width$}", width = layout.status_width));
    text
}
