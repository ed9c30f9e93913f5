//! Order submission types

use crate::errors::OrderError;
use crate::ids::Ticker;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

/// An order as submitted by a caller, before it rests on the book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub side: Side,
    pub ticker: Ticker,
    pub quantity: Quantity,
    pub limit_price: Price,
}

impl OrderRequest {
    pub fn new(side: Side, ticker: impl Into<Ticker>, quantity: u64, limit_price: Price) -> Self {
        Self {
            side,
            ticker: ticker.into(),
            quantity: Quantity::new(quantity),
            limit_price,
        }
    }

    /// Build a request from a float price, rejecting NaN, infinities and
    /// negative prices up front.
    pub fn from_f64_price(
        side: Side,
        ticker: impl Into<Ticker>,
        quantity: u64,
        limit_price: f64,
    ) -> Result<Self, OrderError> {
        let limit_price = Price::try_from_f64(limit_price)?;
        Ok(Self::new(side, ticker, quantity, limit_price))
    }

    /// Check the submission contract: positive quantity, non-negative price
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.quantity.is_zero() {
            return Err(OrderError::InvalidQuantity("quantity must be positive".to_string()));
        }
        if !self.limit_price.is_valid() {
            return Err(OrderError::InvalidPrice(format!(
                "{} is negative",
                self.limit_price
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_side_serialization() {
        assert_eq!(serde_json::to_string(&Side::BUY).unwrap(), "\"BUY\"");
        let side: Side = serde_json::from_str("\"SELL\"").unwrap();
        assert_eq!(side, Side::SELL);
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        let request = OrderRequest::new(Side::BUY, "AAPL", 10, Price::from_u64(100));
        assert!(request.validate().is_ok());

        let free = OrderRequest::new(Side::SELL, "AAPL", 1, Price::from_u64(0));
        assert!(free.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_quantity() {
        let request = OrderRequest::new(Side::BUY, "AAPL", 0, Price::from_u64(100));
        assert!(matches!(request.validate(), Err(OrderError::InvalidQuantity(_))));
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let request = OrderRequest::new(Side::SELL, "AAPL", 5, Price::new(Decimal::from(-1)));
        assert!(matches!(request.validate(), Err(OrderError::InvalidPrice(_))));
    }

    #[test]
    fn test_from_f64_price() {
        let request = OrderRequest::from_f64_price(Side::BUY, "TSLA", 3, 101.25).unwrap();
        assert_eq!(request.limit_price, Price::try_from_f64(101.25).unwrap());

        assert!(OrderRequest::from_f64_price(Side::BUY, "TSLA", 3, f64::NAN).is_err());
    }
}
