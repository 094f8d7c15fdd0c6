//! Monetary amounts with exact decimal arithmetic.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount in the platform currency.
///
/// Backed by an exact decimal so that fractional-hour billing never loses
/// cents to binary floating point. Rounding rule, applied wherever an amount
/// is derived (and nowhere else): two decimal places, midpoint away from zero.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Whole units of currency, e.g. `Money::from_major(100_000)`.
    pub fn from_major(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Apply the platform rounding rule: 2 decimal places, midpoint away
    /// from zero.
    pub fn rounded(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Decimal::from_str(s)?))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_major_is_exact() {
        let m = Money::from_major(100_000);
        assert_eq!(m.amount(), Decimal::from(100_000));
    }

    #[test]
    fn rounds_midpoint_away_from_zero() {
        let m = Money::new(Decimal::from_str("10.005").unwrap()).rounded();
        assert_eq!(m, Money::from_str("10.01").unwrap());
    }

    #[test]
    fn rounding_is_idempotent_on_round_amounts() {
        let m = Money::from_major(150_000);
        assert_eq!(m.rounded(), m);
    }

    #[test]
    fn display_and_parse_round_trip() {
        let m = Money::from_str("1234.50").unwrap();
        let back = Money::from_str(&m.to_string()).unwrap();
        assert_eq!(m, back);
    }
}
