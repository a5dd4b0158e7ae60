//! Fixed-point decimal prices and integer quantities
//!
//! Uses rust_decimal for prices so that levels can be keyed and compared
//! exactly. Quantities are share counts and never go negative.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::TypeError;

/// Order / level quantity in shares
pub type Quantity = u64;

/// Exact decimal price
///
/// Totally ordered, so it can key a `BTreeMap` of price levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Create a price from a decimal value
    pub fn new(value: Decimal) -> Self {
        Self(value.normalize())
    }

    /// Create a price from an integer mantissa and a decimal scale
    ///
    /// `Price::from_parts(1050, 2)` is `10.50`.
    pub fn from_parts(mantissa: i64, scale: u32) -> Self {
        Self::new(Decimal::new(mantissa, scale))
    }

    /// Create a price from a whole number of currency units
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Convert a decoder-supplied float price
    ///
    /// Returns `None` for NaN or infinite input.
    pub fn from_f64(value: f64) -> Option<Self> {
        Decimal::from_f64(value).map(Self::new)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl FromStr for Price {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Self::new)
            .map_err(|_| TypeError::InvalidPrice(s.to_string()))
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_parse_normalizes_scale() {
        let a: Price = "10.0".parse().unwrap();
        let b: Price = "10".parse().unwrap();
        let c = Price::from_parts(1000, 2);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_price_ordering() {
        let low: Price = "9.5".parse().unwrap();
        let high: Price = "10.0".parse().unwrap();
        assert!(low < high);
    }

    #[test]
    fn test_price_rejects_garbage() {
        let err = "abc".parse::<Price>().unwrap_err();
        assert_eq!(err, TypeError::InvalidPrice("abc".to_string()));
    }

    #[test]
    fn test_price_from_f64() {
        assert_eq!(Price::from_f64(9.5), Some("9.5".parse().unwrap()));
        assert_eq!(Price::from_f64(f64::NAN), None);
    }

    #[test]
    fn test_price_display() {
        let p: Price = "12.340".parse().unwrap();
        assert_eq!(p.to_string(), "12.34");
    }
}
