//! Aligned text rendering of statement lines.

use tally_shared::{Currency, Money, ReportConfig};

use super::types::{LineKind, StatementLine};

/// Column layout of a rendered statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementLayout {
    /// Label column width. Longer labels are truncated.
    pub label_width: usize,
    /// Amount column width, right-aligned.
    pub amount_width: usize,
    /// Currency for the amount column.
    pub currency: Currency,
    /// Decimal places shown.
    pub decimals: u32,
}

impl Default for StatementLayout {
    fn default() -> Self {
        Self {
            label_width: 25,
            amount_width: 15,
            currency: Currency::Usd,
            decimals: 2,
        }
    }
}

impl From<&ReportConfig> for StatementLayout {
    fn from(config: &ReportConfig) -> Self {
        Self {
            label_width: config.label_width,
            amount_width: config.amount_width,
            currency: config.currency,
            ..Self::default()
        }
    }
}

impl StatementLayout {
    /// Full report width: label, separating space, amount.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.label_width + 1 + self.amount_width
    }
}

/// Title line for a statement, with the period when known.
#[must_use]
pub fn statement_title(period: Option<&str>) -> String {
    match period {
        Some(period) => format!("Income Statement ({period})"),
        None => "Income Statement".to_string(),
    }
}

/// Renders `lines` under `title`.
///
/// Negative amounts of every kind are shown as parenthesized magnitudes.
/// Totals are followed by a dash rule and the grand total by an equals rule.
#[must_use]
pub fn render(lines: &[StatementLine], layout: &StatementLayout, title: &str) -> Vec<String> {
    let dash_rule = "-".repeat(layout.width());
    let equals_rule = "=".repeat(layout.width());

    let mut out = Vec::with_capacity(lines.len() * 2 + 2);
    out.push(title.to_string());
    out.push(dash_rule.clone());

    for line in lines {
        out.push(render_line(line, layout));
        match line.kind {
            LineKind::Total => out.push(dash_rule.clone()),
            LineKind::GrandTotal => out.push(equals_rule.clone()),
            LineKind::Header | LineKind::Detail => {}
        }
    }

    out
}

fn render_line(line: &StatementLine, layout: &StatementLayout) -> String {
    let label: String = line.label.chars().take(layout.label_width).collect();
    let amount = Money::new(line.amount, layout.currency).format_accounting(layout.decimals);
    format!(
        "{label:<label_width$} {amount:>amount_width$}",
        label_width = layout.label_width,
        amount_width = layout.amount_width,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_layout_width() {
        assert_eq!(StatementLayout::default().width(), 41);
    }

    #[test]
    fn test_title() {
        assert_eq!(statement_title(Some("2023-Q1")), "Income Statement (2023-Q1)");
        assert_eq!(statement_title(None), "Income Statement");
    }

    #[test]
    fn test_negative_total_is_parenthesized() {
        let lines = vec![StatementLine::new("Gross Profit", dec!(-1500), LineKind::Total)];
        let out = render(&lines, &StatementLayout::default(), "T");

        assert_eq!(out[2], "Gross Profit                  ($1,500.00)");
        assert_eq!(out[3], "-".repeat(41));
    }

    #[test]
    fn test_long_label_is_truncated() {
        let lines = vec![StatementLine::new(
            "Depreciation and Amortization Expense",
            dec!(1),
            LineKind::Header,
        )];
        let out = render(&lines, &StatementLayout::default(), "T");

        assert_eq!(out[2], "Depreciation and Amortiza           $1.00");
        assert_eq!(out[2].chars().count(), 41);
    }

    #[test]
    fn test_grand_total_rule() {
        let lines = vec![StatementLine::new("Net Income", dec!(10), LineKind::GrandTotal)];
        let out = render(&lines, &StatementLayout::default(), "T");

        assert_eq!(out.len(), 4);
        assert_eq!(out[3], "=".repeat(41));
    }

    #[test]
    fn test_layout_from_config() {
        let config = ReportConfig {
            label_width: 30,
            amount_width: 12,
            currency: Currency::Eur,
            ..ReportConfig::default()
        };
        let layout = StatementLayout::from(&config);

        assert_eq!(layout.width(), 43);
        assert_eq!(layout.currency, Currency::Eur);
        assert_eq!(layout.decimals, 2);
    }
}
