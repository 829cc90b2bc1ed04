//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision and owns
//! the textual conventions used by every rendered report.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The signed amount in major units (e.g., dollars).
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "USD", "IDR").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the report renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    #[default]
    Usd,
    /// Indonesian Rupiah
    Idr,
    /// Euro
    Eur,
    /// Singapore Dollar
    Sgd,
    /// Japanese Yen
    Jpy,
}

impl Currency {
    /// Symbol printed in front of formatted amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Idr => "Rp",
            Self::Eur => "€",
            Self::Sgd => "S$",
            Self::Jpy => "¥",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Accounting notation: negatives are wrapped in parentheses,
    /// `($280,000.00)`.
    #[must_use]
    pub fn format_accounting(&self, dp: u32) -> String {
        let (negative, digits) = rounded_parts(self.amount, dp);
        if negative {
            format!("({}{digits})", self.currency.symbol())
        } else {
            format!("{}{digits}", self.currency.symbol())
        }
    }

    /// Leading minus sign for negatives, `-$5,000`.
    #[must_use]
    pub fn format_signed(&self, dp: u32) -> String {
        let (negative, digits) = rounded_parts(self.amount, dp);
        if negative {
            format!("-{}{digits}", self.currency.symbol())
        } else {
            format!("{}{digits}", self.currency.symbol())
        }
    }
}

/// Rounds half away from zero to `dp` places and returns the sign of the
/// rounded value with its grouped magnitude. Amounts that round to zero are
/// never reported as negative.
fn rounded_parts(amount: Decimal, dp: u32) -> (bool, String) {
    let mut rounded = amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    rounded = rounded.abs();
    rounded.rescale(dp);

    let text = rounded.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut digits = group_thousands(int_part);
    if let Some(frac) = frac_part {
        digits.push('.');
        digits.push_str(frac);
    }
    (negative, digits)
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Idr => write!(f, "IDR"),
            Self::Eur => write!(f, "EUR"),
            Self::Sgd => write!(f, "SGD"),
            Self::Jpy => write!(f, "JPY"),
        }
    }
}
