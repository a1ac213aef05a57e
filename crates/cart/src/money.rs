//! Monetary amounts in the smallest currency unit.

use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, ValueObject};

const CENTS_PER_UNIT: u64 = 100;

/// Non-negative amount of money, stored in cents.
///
/// Arithmetic saturates at `u64::MAX` cents instead of wrapping.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Whole currency units (dollars).
    pub const fn units(self) -> u64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Fractional part in cents (`0..100`).
    pub const fn fraction(self) -> u64 {
        self.0 % CENTS_PER_UNIT
    }

    /// The unformatted numeric amount in currency units (`2500` cents → `25.0`).
    pub fn as_major(self) -> f64 {
        self.0 as f64 / CENTS_PER_UNIT as f64
    }

    /// Parse a decimal amount such as `"10"`, `"10.5"` or `"1234.99"`.
    pub fn from_major_str(value: &str) -> DomainResult<Self> {
        let value = value.trim();
        let (whole, fraction) = match value.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (value, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!("malformed amount: {value:?}")));
        }
        if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "amount must have at most two decimal digits: {value:?}"
            )));
        }

        let overflow = || DomainError::validation(format!("amount out of range: {value:?}"));
        let units: u64 = whole.parse().map_err(|_| overflow())?;
        let cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| overflow())? * 10,
            _ => fraction.parse::<u64>().map_err(|_| overflow())?,
        };

        units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(cents))
            .map(Self)
            .ok_or_else(overflow)
    }

    /// This amount multiplied by a quantity.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

/// Plain decimal rendering without currency symbol or grouping (`"25.00"`).
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.units(), self.fraction())
    }
}
