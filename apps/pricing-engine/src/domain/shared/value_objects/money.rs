//! Money value object for currency amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A monetary amount in the store currency.
///
/// Represented as a Decimal for precise financial calculations.
/// Breakdown intermediates keep full precision; only the customer-facing
/// final price is rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a new Money value from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a Money value from cents (integer).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if this amount is positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if this amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns true if this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// Take a percentage of this amount (e.g. `percentage = 30` for 30%).
    ///
    /// The result keeps full precision.
    #[must_use]
    pub fn percentage(&self, percentage: Decimal) -> Self {
        Self(self.0 * percentage / Decimal::ONE_HUNDRED)
    }

    /// Round to 2 decimal places using round-half-up.
    ///
    /// Used only for the customer-facing final price.
    #[must_use]
    pub fn round_half_up(&self) -> Self {
        Self(self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_new_and_display() {
        let m = Money::new(dec!(150.50));
        assert_eq!(format!("{m}"), "$150.50");
    }

    #[test]
    fn money_from_cents() {
        let m = Money::from_cents(15050);
        assert_eq!(m.amount(), dec!(150.50));
    }

    #[test]
    fn money_zero() {
        assert!(Money::ZERO.is_zero());
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::ZERO.is_negative());
    }

    #[test]
    fn money_percentage() {
        let m = Money::new(dec!(565.00));
        assert_eq!(m.percentage(dec!(5)).amount(), dec!(28.2500));
    }

    #[test]
    fn money_percentage_of_zero_is_zero() {
        assert!(Money::ZERO.percentage(dec!(30)).is_zero());
    }

    #[test]
    fn money_round_half_up() {
        // The spec's worked example: 771.225 rounds up to 771.23.
        let m = Money::new(dec!(771.225));
        assert_eq!(m.round_half_up().amount(), dec!(771.23));

        let down = Money::new(dec!(771.224));
        assert_eq!(down.round_half_up().amount(), dec!(771.22));
    }

    #[test]
    fn money_arithmetic() {
        let a = Money::new(dec!(100));
        let b = Money::new(dec!(50));

        assert_eq!((a + b).amount(), dec!(150));
        assert_eq!((a - b).amount(), dec!(50));
        assert_eq!((a * dec!(1.1)).amount(), dec!(110.0));
    }

    #[test]
    fn money_ordering() {
        let a = Money::new(dec!(100));
        let b = Money::new(dec!(50));

        assert!(a > b);
        assert!(b < a);
        assert!(a >= a);
    }

    #[test]
    fn money_serde_roundtrip() {
        let m = Money::new(dec!(150.50));
        let json = serde_json::to_string(&m).unwrap();
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);
    }
}
