//! Prices

use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Deref, Sub},
};

use serde::{Deserialize, Serialize};

/// Represents a price in whole currency units.
///
/// Signed, because a final price is allowed to drop below zero when discounts
/// exceed the base price.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price {
    value: i64,
}

impl Price {
    /// A price of zero.
    pub const ZERO: Price = Price { value: 0 };

    /// Creates a new Price
    pub const fn new(value: i64) -> Self {
        Price { value }
    }

    /// Returns the raw amount.
    pub const fn value(self) -> i64 {
        self.value
    }
}

impl Deref for Price {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Price::new(value)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Self::Output {
        Price::new(self.value.saturating_add(rhs.value))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        *self = *self + rhs;
    }
}

impl Sub for Price {
    type Output = Price;

    fn sub(self, rhs: Price) -> Self::Output {
        Price::new(self.value.saturating_sub(rhs.value))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
