//! Variance calculation and status classification.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::types::{
    BudgetRow, DepartmentVariance, Polarity, Status, Thresholds, VarianceSummary,
};

/// Service for budget-vs-actual variance analysis.
pub struct VarianceAnalyzer;

impl VarianceAnalyzer {
    /// Analyzes every row with the default ±10% thresholds.
    #[must_use]
    pub fn analyze(rows: &[BudgetRow]) -> Vec<DepartmentVariance> {
        Self::analyze_with(rows, &Thresholds::default())
    }

    /// Analyzes every row with the given thresholds.
    #[must_use]
    pub fn analyze_with(rows: &[BudgetRow], thresholds: &Thresholds) -> Vec<DepartmentVariance> {
        rows.iter().map(|row| Self::evaluate(row, thresholds)).collect()
    }

    /// Computes the variance of a single row.
    #[must_use]
    pub fn evaluate(row: &BudgetRow, thresholds: &Thresholds) -> DepartmentVariance {
        let variance_absolute = row.actual.saturating_sub(row.budget);
        let variance_percent = Self::variance_percent(variance_absolute, row.budget);

        if row.budget.is_zero() {
            debug!(department = %row.department, "Zero budget, variance percent not available");
        }

        DepartmentVariance {
            department: row.department.clone(),
            actual: row.actual,
            budget: row.budget,
            variance_absolute,
            variance_percent,
            status: Self::classify(variance_percent, row.polarity, thresholds),
        }
    }

    /// `variance / budget * 100`, or `None` when the budget is zero.
    ///
    /// A quotient beyond the `Decimal` range saturates to `Decimal::MAX` or
    /// `Decimal::MIN` with the sign of the true result.
    #[must_use]
    pub fn variance_percent(variance: Decimal, budget: Decimal) -> Option<Decimal> {
        if budget.is_zero() {
            return None;
        }

        let percent = variance
            .checked_div(budget)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED));

        Some(percent.unwrap_or_else(|| {
            warn!(%variance, %budget, "Variance percent out of range, saturating");
            if variance.is_sign_negative() == budget.is_sign_negative() {
                Decimal::MAX
            } else {
                Decimal::MIN
            }
        }))
    }

    /// Maps a variance percentage to a status band.
    ///
    /// Expense: above `+threshold` is Red, below `-threshold` is Green.
    /// Revenue: the bands are swapped. Boundaries and unknown percentages are
    /// Yellow.
    #[must_use]
    pub fn classify(percent: Option<Decimal>, polarity: Polarity, thresholds: &Thresholds) -> Status {
        let Some(percent) = percent else {
            return Status::Yellow;
        };

        let (over, under) = match polarity {
            Polarity::Expense => (Status::Red, Status::Green),
            Polarity::Revenue => (Status::Green, Status::Red),
        };

        if percent > thresholds.percent {
            over
        } else if percent < -thresholds.percent {
            under
        } else {
            Status::Yellow
        }
    }

    /// Totals across all analyzed rows.
    #[must_use]
    pub fn summarize(variances: &[DepartmentVariance]) -> VarianceSummary {
        let total_actual = variances
            .iter()
            .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v.actual));
        let total_budget = variances
            .iter()
            .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v.budget));
        let total_variance = total_actual.saturating_sub(total_budget);

        VarianceSummary {
            total_actual,
            total_budget,
            total_variance,
            variance_percent: Self::variance_percent(total_variance, total_budget),
        }
    }
}
