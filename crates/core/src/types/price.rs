//! Whole-dollar prices.
//!
//! The demo store prices everything in whole US dollars, so a price is a
//! positive integer rather than a decimal. Serialized as a bare JSON number
//! (`45`), which is what agents reading the discovery documents expect.

use core::fmt;

use serde::{Deserialize, Serialize};

/// ISO 4217 code of the only currency the store sells in.
pub const CURRENCY_CODE: &str = "USD";

/// Error returned for a zero price.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("price must be greater than zero")]
pub struct PriceError;

/// A positive price in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Price(u32);

impl Price {
    /// Create a price, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError`] if `dollars` is zero.
    pub const fn new(dollars: u32) -> Result<Self, PriceError> {
        if dollars == 0 {
            return Err(PriceError);
        }
        Ok(Self(dollars))
    }

    /// Amount in dollars.
    #[must_use]
    pub const fn dollars(self) -> u32 {
        self.0
    }

    /// Amount as a float, for comparison against user-supplied bounds.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Total for `qty` units. Cannot overflow.
    #[must_use]
    pub fn total_for(self, qty: u32) -> u64 {
        u64::from(self.0) * u64::from(qty)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl TryFrom<u32> for Price {
    type Error = PriceError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for u32 {
    fn from(price: Price) -> Self {
        price.0
    }
}
