//! Crossing detection logic
//!
//! Determines when the buy head and the sell head of a partition can trade.

use types::numeric::Price;

/// Check if a bid and ask can match at given prices
///
/// A buy crosses a sell when the buy limit is at least the sell limit.
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Execution price of a crossing: always the resting sell order's limit.
pub fn execution_price(_bid_price: Price, ask_price: Price) -> Price {
    ask_price
}
