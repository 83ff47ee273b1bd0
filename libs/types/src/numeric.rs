//! Fixed-point decimal types for prices and quantities
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Ledger values must reproduce identically across replicas.

use crate::errors::NumericError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// Order price. Non-negative fixed-point decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price, rejecting negative values.
    pub fn try_new(value: Decimal) -> Result<Self, NumericError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(NumericError::InvalidPrice(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Price {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value =
            Decimal::from_str(s).map_err(|_| NumericError::InvalidPrice(s.to_string()))?;
        Self::try_new(value).map_err(|_| NumericError::InvalidPrice(s.to_string()))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order/trade quantity. Non-negative fixed-point decimal.
///
/// Zero is representable so fill counters can start empty; strict positivity
/// is enforced at operation boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Create a quantity, rejecting negative values.
    pub fn try_new(value: Decimal) -> Result<Self, NumericError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(NumericError::InvalidQuantity(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Subtract, clamping at zero.
    pub fn saturating_sub(self, other: Quantity) -> Quantity {
        if other.0 >= self.0 {
            Self(Decimal::ZERO)
        } else {
            Self(self.0 - other.0)
        }
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 + rhs.0)
    }
}

impl FromStr for Quantity {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value =
            Decimal::from_str(s).map_err(|_| NumericError::InvalidQuantity(s.to_string()))?;
        Self::try_new(value).map_err(|_| NumericError::InvalidQuantity(s.to_string()))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_parse() {
        let price: Price = "0.65".parse().unwrap();
        assert_eq!(price.as_decimal(), Decimal::new(65, 2));
    }

    #[test]
    fn test_price_rejects_garbage() {
        assert!("not-a-price".parse::<Price>().is_err());
        assert!("".parse::<Price>().is_err());
    }

    #[test]
    fn test_price_rejects_negative() {
        assert!("-1.5".parse::<Price>().is_err());
        assert!(Price::try_new(Decimal::from(-3)).is_err());
    }

    #[test]
    fn test_price_zero_allowed() {
        let price: Price = "0".parse().unwrap();
        assert!(price.is_zero());
    }

    #[test]
    fn test_quantity_add_and_sub() {
        let a = Quantity::from_u64(30);
        let b = Quantity::from_u64(40);
        assert_eq!(a + b, Quantity::from_u64(70));
        assert_eq!(Quantity::from_u64(100).saturating_sub(a + b), Quantity::from_u64(30));
        assert_eq!(a.saturating_sub(b), Quantity::zero());
    }

    #[test]
    fn test_quantity_ordering() {
        assert!(Quantity::from_u64(5) < Quantity::from_u64(7));
        assert_eq!(
            Quantity::from_u64(5).min(Quantity::from_u64(7)),
            Quantity::from_u64(5)
        );
    }

    #[test]
    fn test_quantity_rejects_negative() {
        assert!("-0.1".parse::<Quantity>().is_err());
    }

    #[test]
    fn test_price_serialization_as_string() {
        let price: Price = "99.5".parse().unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"99.5\"");
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(price, back);
    }
}
