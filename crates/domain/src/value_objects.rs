//! Value objects shared across the product and checkout contexts.

use serde::{Deserialize, Serialize};

/// An amount of money held as whole cents.
///
/// Prices, order totals and reward points are all `Money`. Fractional
/// results (percentages, halves) are settled to a whole cent immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn from_dollars(dollars: i64) -> Self {
        Self::from_cents(dollars * 100)
    }

    pub fn zero() -> Self {
        Self::from_cents(0)
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Price of `quantity` units at this unit price.
    pub fn multiply(&self, quantity: u32) -> Money {
        Self::from_cents(self.cents * i64::from(quantity))
    }

    /// `percent` percent of the amount, rounded to the nearest cent.
    pub fn percentage(&self, percent: f64) -> Money {
        Self::from_cents((self.cents as f64 * percent / 100.0).round() as i64)
    }

    /// Half the amount; an odd cent is dropped.
    pub fn half(&self) -> Money {
        Self::from_cents(self.cents / 2)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_cents(self.cents + rhs.cents)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.cents += rhs.cents;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
