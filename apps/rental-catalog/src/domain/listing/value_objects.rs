//! Listing value objects.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::errors::FieldProblem;

/// Storage-assigned listing identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListingId(i64);

impl ListingId {
    /// Wrap a raw row id.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw row id.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative listing price in USD.
///
/// Kept as a `Decimal` so the stored value is exactly what was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price, rejecting negative amounts.
    pub fn new(amount: Decimal) -> Result<Self, FieldProblem> {
        if amount < Decimal::ZERO {
            return Err(FieldProblem::Negative {
                value: amount.to_string(),
            });
        }
        // "-0" parses with the sign bit set
        if amount.is_zero() {
            return Ok(Self::ZERO);
        }
        Ok(Self(amount))
    }

    /// Parse a price as typed into a form.
    ///
    /// Accepts plain decimals and exponent notation (`1e3`), as number
    /// inputs may submit either.
    pub fn parse(text: &str) -> Result<Self, FieldProblem> {
        let trimmed = text.trim();
        let amount = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| FieldProblem::NotANumber {
                value: trimmed.to_string(),
            })?;
        Self::new(amount).map_err(|_| FieldProblem::Negative {
            value: trimmed.to_string(),
        })
    }

    /// Get the inner amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format as currency with two decimals and thousands separators, e.g. `$1,200.50`.
    ///
    /// Half cents round up.
    #[must_use]
    pub fn to_currency(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let fixed = format!("{rounded:.2}");
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        format!("${}.{cents}", group_thousands(whole))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
