//! Budget variance data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::VarianceConfig;

/// Which direction of variance is unfavorable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Spending above budget is unfavorable.
    #[default]
    Expense,
    /// Earning above target is favorable.
    Revenue,
}

/// Actual vs budget figures for one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRow {
    /// Department or category name.
    pub department: String,
    /// Actual amount.
    pub actual: Decimal,
    /// Budgeted amount.
    pub budget: Decimal,
    /// Variance polarity.
    #[serde(default)]
    pub polarity: Polarity,
}

impl BudgetRow {
    /// Creates an expense row.
    #[must_use]
    pub fn new(department: impl Into<String>, actual: Decimal, budget: Decimal) -> Self {
        Self {
            department: department.into(),
            actual,
            budget,
            polarity: Polarity::Expense,
        }
    }

    /// Creates a revenue row (higher actual is favorable).
    #[must_use]
    pub fn revenue(department: impl Into<String>, actual: Decimal, budget: Decimal) -> Self {
        Self {
            polarity: Polarity::Revenue,
            ..Self::new(department, actual, budget)
        }
    }
}

/// Status band derived from the variance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Favorable beyond the threshold.
    Green,
    /// Within the threshold, or not measurable.
    Yellow,
    /// Unfavorable beyond the threshold.
    Red,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Red => "Red",
        })
    }
}

/// Variance of one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentVariance {
    /// Department name.
    pub department: String,
    /// Actual amount.
    pub actual: Decimal,
    /// Budgeted amount.
    pub budget: Decimal,
    /// actual - budget.
    pub variance_absolute: Decimal,
    /// variance_absolute / budget * 100, `None` when the budget is zero.
    pub variance_percent: Option<Decimal>,
    /// Status band.
    pub status: Status,
}

/// Totals across all departments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarianceSummary {
    /// Total actual.
    pub total_actual: Decimal,
    /// Total budget.
    pub total_budget: Decimal,
    /// Total actual - total budget.
    pub total_variance: Decimal,
    /// Overall variance percentage, `None` when the total budget is zero.
    pub variance_percent: Option<Decimal>,
}

/// Band limits applied to the variance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Magnitude beyond which a variance leaves the Yellow band. Exclusive.
    pub percent: Decimal,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            percent: Decimal::TEN,
        }
    }
}

impl From<&VarianceConfig> for Thresholds {
    fn from(config: &VarianceConfig) -> Self {
        Self {
            percent: config.threshold_percent.abs(),
        }
    }
}
