use bigdecimal::BigDecimal;
use bigdecimal::*;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

const SCALE: i64 = 10_000;

/// A monetary value in the smallest currency unit (ten-thousandths).
///
/// # Why Use Money? It is a Value Object.
/// Wrapping an `i64` of minor units gives type safety and keeps every amount
/// in exact fixed-point arithmetic. Balances are derived by subtraction, so a
/// `Money` may legitimately be negative (a credit-heavy account); the only
/// place negativity is illegal is the posting boundary, which rejects it.
/// Binary floating point is never used: the trial-balance invariant demands
/// that matched debits and credits cancel to exactly zero, and accumulated
/// float rounding would break that.
///
/// # Examples
/// ```
/// use balance_engine::common::money::Money;
///
/// let amount = Money::new(1000); // Represents 0.1000 in currency
/// assert_eq!(amount.as_i64(), 1000);
/// assert_eq!(amount.to_string_4dp(), "0.1000");
/// assert!((amount - Money::new(2000)).is_negative());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn to_string_4dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.4}", bd)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    /// Parses a decimal string into fixed-point minor units, rounding to four
    /// decimal places. `BigDecimal` rejects `NaN`/`inf`/malformed input, so a
    /// successfully parsed `Money` is finite by construction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_4dp())
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
