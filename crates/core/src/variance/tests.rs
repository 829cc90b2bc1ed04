//! Property-based tests for the variance module.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::render::{VarianceLayout, render};
use super::service::VarianceAnalyzer;
use super::types::{BudgetRow, Polarity, Status, Thresholds};

fn polarity_strategy() -> impl Strategy<Value = Polarity> {
    prop_oneof![Just(Polarity::Expense), Just(Polarity::Revenue)]
}

proptest! {
    /// variance_absolute = actual - budget for every row.
    #[test]
    fn test_absolute_variance(
        actual in -1_000_000_000i64..1_000_000_000,
        budget in -1_000_000_000i64..1_000_000_000,
    ) {
        let row = BudgetRow::new("Dept", Decimal::from(actual), Decimal::from(budget));
        let result = VarianceAnalyzer::evaluate(&row, &Thresholds::default());

        prop_assert_eq!(result.variance_absolute, Decimal::from(actual) - Decimal::from(budget));
    }

    /// A zero budget never panics and always lands in the Yellow band.
    #[test]
    fn test_zero_budget_sentinel(
        actual in -1_000_000_000i64..1_000_000_000,
        polarity in polarity_strategy(),
    ) {
        let row = BudgetRow {
            polarity,
            ..BudgetRow::new("Dept", Decimal::from(actual), Decimal::ZERO)
        };
        let result = VarianceAnalyzer::evaluate(&row, &Thresholds::default());

        prop_assert_eq!(result.variance_percent, None);
        prop_assert_eq!(result.status, Status::Yellow);
    }

    /// Only a zero budget yields an unavailable percent, however small the budget.
    #[test]
    fn test_non_zero_budget_always_has_percent(
        actual in -1_000_000_000i64..1_000_000_000,
        mantissa in prop_oneof![1i64..1_000, -1_000i64..-1],
        scale in 0u32..=28,
    ) {
        let budget = Decimal::new(mantissa, scale);
        let row = BudgetRow::new("Dept", Decimal::from(actual), budget);
        let result = VarianceAnalyzer::evaluate(&row, &Thresholds::default());

        prop_assert!(result.variance_percent.is_some());
    }

    /// Expense status follows the exclusive ±10 bands.
    #[test]
    fn test_expense_status_matches_percent(
        actual in 0i64..1_000_000,
        budget in 1i64..1_000_000,
    ) {
        let row = BudgetRow::new("Dept", Decimal::from(actual), Decimal::from(budget));
        let result = VarianceAnalyzer::evaluate(&row, &Thresholds::default());
        let percent = result.variance_percent.unwrap();

        let expected = if percent > dec!(10) {
            Status::Red
        } else if percent < dec!(-10) {
            Status::Green
        } else {
            Status::Yellow
        };
        prop_assert_eq!(result.status, expected);
    }

    /// Revenue polarity mirrors expense polarity; Yellow stays Yellow.
    #[test]
    fn test_revenue_mirrors_expense(
        actual in 0i64..1_000_000,
        budget in 1i64..1_000_000,
    ) {
        let expense = VarianceAnalyzer::evaluate(
            &BudgetRow::new("Dept", Decimal::from(actual), Decimal::from(budget)),
            &Thresholds::default(),
        );
        let revenue = VarianceAnalyzer::evaluate(
            &BudgetRow::revenue("Dept", Decimal::from(actual), Decimal::from(budget)),
            &Thresholds::default(),
        );

        let mirrored = match expense.status {
            Status::Red => Status::Green,
            Status::Green => Status::Red,
            Status::Yellow => Status::Yellow,
        };
        prop_assert_eq!(revenue.status, mirrored);
        prop_assert_eq!(revenue.variance_percent, expense.variance_percent);
    }

    /// Identical input renders byte-identical output.
    #[test]
    fn test_render_is_idempotent(
        figures in prop::collection::vec((0i64..10_000_000, 0i64..10_000_000), 0..20),
    ) {
        let rows: Vec<BudgetRow> = figures
            .iter()
            .enumerate()
            .map(|(i, (actual, budget))| {
                BudgetRow::new(format!("Dept {i}"), Decimal::from(*actual), Decimal::from(*budget))
            })
            .collect();
        let layout = VarianceLayout::default();

        let first = render(&VarianceAnalyzer::analyze(&rows), &layout);
        let second = render(&VarianceAnalyzer::analyze(&rows), &layout);

        prop_assert_eq!(first, second);
    }
}
