//! Fixed-point price and integer share quantity types
//!
//! Prices use rust_decimal for deterministic arithmetic (no floating-point
//! comparison surprises when crossing). Quantities are whole shares.

use crate::errors::OrderError;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Limit price
///
/// For a BUY this is the maximum the holder will pay, for a SELL the minimum
/// the holder will accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Wrap a decimal without validation
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a price, rejecting negative values
    pub fn try_new(value: Decimal) -> Result<Self, OrderError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(OrderError::InvalidPrice(format!("{value} is negative")));
        }
        Ok(Self(value))
    }

    /// Create a price from a whole number
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Convert a float price, rejecting NaN, infinities and negatives
    pub fn try_from_f64(value: f64) -> Result<Self, OrderError> {
        if !value.is_finite() {
            return Err(OrderError::InvalidPrice(format!("{value} is not finite")));
        }
        let decimal = Decimal::from_f64(value)
            .ok_or_else(|| OrderError::InvalidPrice(format!("{value} is out of range")))?;
        Self::try_new(decimal)
    }

    /// Get inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True if the price may rest on the book
    pub fn is_valid(&self) -> bool {
        !self.0.is_sign_negative() || self.0.is_zero()
    }
}

impl FromStr for Price {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str_exact(s)
            .map_err(|e| OrderError::InvalidPrice(format!("{s}: {e}")))?;
        Self::try_new(decimal)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Remaining share count of an order
///
/// Zero means fully filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub fn new(shares: u64) -> Self {
        Self(shares)
    }

    /// Create a quantity for a new order, rejecting zero
    pub fn try_new(shares: u64) -> Result<Self, OrderError> {
        if shares == 0 {
            return Err(OrderError::InvalidQuantity("quantity must be positive".to_string()));
        }
        Ok(Self(shares))
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Get share count
    pub fn shares(&self) -> u64 {
        self.0
    }

    /// Subtract, returning None if `other` exceeds `self`
    pub fn checked_sub(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_sub(other.0).map(Quantity)
    }
}

/// Totals saturate at `u64::MAX` shares.
impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        Quantity(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Quantity) {
        *self = *self + rhs;
    }
}

impl Sub for Quantity {
    type Output = Quantity;

    fn sub(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 - rhs.0)
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Quantity) {
        self.0 -= rhs.0;
    }
}

impl Sum for Quantity {
    fn sum<I: Iterator<Item = Quantity>>(iter: I) -> Self {
        iter.fold(Quantity::zero(), |acc, q| acc + q)
    }
}

impl From<u64> for Quantity {
    fn from(shares: u64) -> Self {
        Self(shares)
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
    fn test_price_ordering() {
        assert!(Price::from_u64(105) > Price::from_u64(100));
        assert_eq!(Price::from_str("100.00").unwrap(), Price::from_u64(100));
    }

    #[test]
    fn test_price_rejects_negative() {
        assert!(Price::try_new(Decimal::from(-1)).is_err());
        assert!(Price::from_str("-0.01").is_err());
        assert!(Price::try_new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_price_from_f64() {
        let price = Price::try_from_f64(123.5).unwrap();
        assert_eq!(price, Price::from_str("123.5").unwrap());
        assert!(Price::try_from_f64(0.0).unwrap().is_zero());

        assert!(Price::try_from_f64(f64::NAN).is_err());
        assert!(Price::try_from_f64(f64::INFINITY).is_err());
        assert!(Price::try_from_f64(-5.0).is_err());
    }

    #[test]
    fn test_price_serialization() {
        let price = Price::from_str("3000.50").unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"3000.50\"");
    }

    #[test]
    fn test_quantity_arithmetic() {
        let mut q = Quantity::new(8);
        q -= Quantity::new(5);
        assert_eq!(q, Quantity::new(3));
        assert_eq!(q.checked_sub(Quantity::new(4)), None);
        assert_eq!(q.min(Quantity::new(10)), Quantity::new(3));

        let total: Quantity = [1, 2, 3].into_iter().map(Quantity::new).sum();
        assert_eq!(total.shares(), 6);
    }

    #[test]
    fn test_quantity_sum_saturates() {
        let mut q = Quantity::new(u64::MAX - 1);
        q += Quantity::new(5);
        assert_eq!(q, Quantity::new(u64::MAX));

        let total: Quantity = [u64::MAX, u64::MAX, 1].into_iter().map(Quantity::new).sum();
        assert_eq!(total.shares(), u64::MAX);
    }

    #[test]
    fn test_quantity_try_new() {
        assert!(Quantity::try_new(0).is_err());
        assert_eq!(Quantity::try_new(10).unwrap().shares(), 10);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_price_accepts_only_non_negative(
                units in -1_000_000i64..1_000_000,
                scale in 0u32..6,
            ) {
                let value = Decimal::new(units, scale);
                prop_assert_eq!(Price::try_new(value).is_ok(), units >= 0);
            }

            #[test]
            fn prop_quantity_checked_sub(a in any::<u64>(), b in any::<u64>()) {
                let diff = Quantity::new(a).checked_sub(Quantity::new(b));
                prop_assert_eq!(diff.is_some(), a >= b);
                if let Some(diff) = diff {
                    prop_assert_eq!(diff + Quantity::new(b), Quantity::new(a));
                }
            }
        }
    }
}
