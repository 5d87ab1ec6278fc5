//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values and are never mutated in place.

use core::ops::Mul;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker trait for value objects.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Quantity(u8);
///
/// impl ValueObject for Quantity {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// A non-negative decimal amount of money.
///
/// Serialized as a plain JSON number. Equality is numeric, so `18.00 == 18`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("money amount cannot be negative: {0}")]
pub struct NegativeAmount(pub Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Returns `None` for negative amounts.
    pub fn new(amount: Decimal) -> Option<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            None
        } else {
            Some(Self(amount))
        }
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a whole number of units.
    pub fn times(self, units: u32) -> Self {
        Self(self.0 * Decimal::from(units))
    }

    /// Scale by a non-negative factor (e.g. `0.9` for a 10% discount).
    pub fn scaled(self, factor: Decimal) -> Self {
        Self(self.0 * factor.abs())
    }
}

impl TryFrom<Decimal> for Money {
    type Error = NegativeAmount;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Money::new(value).ok_or(NegativeAmount(value))
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Self::Output {
        self.times(rhs)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0.normalize(), f)
    }
}

impl ValueObject for Money {}
