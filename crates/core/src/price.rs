//! Unit price value object.

use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Price of one unit of a product.
///
/// Stored as a plain JSON number so existing store files stay readable. Any
/// finite amount is accepted, including negative discount lines already
/// present in store files; [`Price::non_negative`] is the stricter constructor
/// for newly entered products.
///
/// Sums and multiples are plain `f64` arithmetic and are not re-validated:
/// totals of extreme amounts can overflow to infinity.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        Ok(Self(amount))
    }

    /// A finite price that is zero or more.
    pub fn non_negative(amount: f64) -> DomainResult<Self> {
        let price = Self::new(amount)?;
        if price.0 < 0.0 {
            return Err(DomainError::validation("price must not be negative"));
        }
        Ok(price)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Line value for `quantity` units at this price.
    pub fn times(self, quantity: u32) -> Price {
        Price(self.0 * f64::from(quantity))
    }
}

impl ValueObject for Price {}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
