//! Trade report emitted for every crossing

use crate::ids::Ticker;
use crate::numeric::{Price, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One executed crossing between the buy head and the sell head of a
/// partition
///
/// `ticker` is the ticker of the submission that triggered the match; `price`
/// is always the resting sell order's limit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeReport {
    pub ticker: Ticker,
    pub quantity: Quantity,
    pub price: Price,
}

impl TradeReport {
    pub fn new(ticker: Ticker, quantity: Quantity, price: Price) -> Self {
        Self {
            ticker,
            quantity,
            price,
        }
    }

    /// Calculate trade value (price × quantity)
    ///
    /// `None` when the product does not fit in a `Decimal`.
    pub fn trade_value(&self) -> Option<Decimal> {
        Decimal::from(self.quantity.shares()).checked_mul(self.price.as_decimal())
    }
}

impl fmt::Display for TradeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Matched {} shares of {} at ${}",
            self.quantity, self.ticker, self.price
        )
    }
}
