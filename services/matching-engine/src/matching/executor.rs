//! Trade execution logic
//!
//! Repeatedly crosses the buy head against the sell head of one partition
//! until a side runs empty or the heads no longer cross. Orders below the
//! heads are never inspected.

use types::ids::Ticker;
use types::numeric::Quantity;
use types::order::Side;
use types::trade::TradeReport;

use crate::book::Partition;
use crate::matching::crossing;
use crate::sink::TradeSink;

/// Totals for one matching pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    pub trades: usize,
    /// Shares traded, saturating at `u64::MAX`
    pub volume: Quantity,
}

impl MatchOutcome {
    fn record(&mut self, trade: &TradeReport) {
        self.trades += 1;
        self.volume += trade.quantity;
    }
}

/// Match a partition the caller holds exclusively.
///
/// Every crossing is reported to `sink` under `ticker`, the ticker of the
/// submission that triggered the pass. When several tickers share the
/// partition the heads may belong to other tickers.
pub fn match_partition<S>(partition: &mut Partition, ticker: &Ticker, sink: &S) -> MatchOutcome
where
    S: TradeSink + ?Sized,
{
    let mut outcome = MatchOutcome::default();

    while let Some((bid, ask)) = partition.top_of_book() {
        if !crossing::can_match(bid.limit_price, ask.limit_price) {
            break;
        }

        let traded = bid.quantity.min(ask.quantity);
        // Both heads advance in the same iteration on an exact fill
        partition.fill_head(Side::BUY, traded);
        partition.fill_head(Side::SELL, traded);

        let trade = TradeReport::new(
            ticker.clone(),
            traded,
            crossing::execution_price(bid.limit_price, ask.limit_price),
        );
        sink.on_trade(&trade);
        outcome.record(&trade);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;
    use types::numeric::Price;
    use types::order::OrderRequest;

    fn push(partition: &mut Partition, side: Side, qty: u64, price: u64) {
        partition.push_front(OrderRequest::new(side, "AAPL", qty, Price::from_u64(price)));
    }

    #[test]
    fn test_exact_fill_advances_both_heads() {
        let mut partition = Partition::new(540);
        let sink = RecordingSink::new();
        push(&mut partition, Side::SELL, 10, 100);
        push(&mut partition, Side::BUY, 10, 105);

        let outcome = match_partition(&mut partition, &Ticker::new("AAPL"), &sink);

        assert_eq!(outcome.trades, 1);
        assert_eq!(outcome.volume, Quantity::new(10));
        assert!(partition.head(Side::BUY).is_none());
        assert!(partition.head(Side::SELL).is_none());
        assert_eq!(sink.trades()[0].price, Price::from_u64(100));
    }

    #[test]
    fn test_walks_down_the_sell_list() {
        let mut partition = Partition::new(0);
        let sink = RecordingSink::new();
        // Sell list head-first: 3@101, 4@100
        push(&mut partition, Side::SELL, 4, 100);
        push(&mut partition, Side::SELL, 3, 101);
        push(&mut partition, Side::BUY, 5, 102);

        let outcome = match_partition(&mut partition, &Ticker::new("AAPL"), &sink);

        let trades = sink.trades();
        assert_eq!(outcome.trades, 2);
        assert_eq!(trades[0].quantity, Quantity::new(3));
        assert_eq!(trades[0].price, Price::from_u64(101));
        assert_eq!(trades[1].quantity, Quantity::new(2));
        assert_eq!(trades[1].price, Price::from_u64(100));
        assert_eq!(partition.head(Side::SELL).unwrap().quantity, Quantity::new(2));
        assert!(partition.head(Side::BUY).is_none());
    }

    #[test]
    fn test_stops_at_non_crossing_head() {
        let mut partition = Partition::new(0);
        let sink = RecordingSink::new();
        // A crossable sell (90) hides below a non-crossable head (120)
        push(&mut partition, Side::SELL, 1, 90);
        push(&mut partition, Side::SELL, 1, 120);
        push(&mut partition, Side::BUY, 1, 100);

        let outcome = match_partition(&mut partition, &Ticker::new("AAPL"), &sink);

        assert_eq!(outcome, MatchOutcome::default());
        assert!(sink.is_empty());
        assert_eq!(partition.order_count(), 3);
    }

    #[test]
    fn test_empty_side_is_noop() {
        let mut partition = Partition::new(0);
        let sink = RecordingSink::new();
        push(&mut partition, Side::BUY, 5, 100);

        let outcome = match_partition(&mut partition, &Ticker::new("AAPL"), &sink);
        assert_eq!(outcome.trades, 0);
        assert_eq!(partition.order_count(), 1);
    }

    #[test]
    fn test_large_crossing_completes() {
        let mut partition = Partition::new(540);
        let sink = RecordingSink::new();
        let price = Price::from_u64(100_000_000_000);
        partition.push_front(OrderRequest::new(Side::SELL, "AAPL", u64::MAX, price));
        partition.push_front(OrderRequest::new(Side::SELL, "AAPL", u64::MAX, price));
        partition.push_front(OrderRequest::new(Side::BUY, "AAPL", u64::MAX, price));
        partition.push_front(OrderRequest::new(Side::BUY, "AAPL", u64::MAX, price));

        let outcome = match_partition(&mut partition, &Ticker::new("AAPL"), &sink);

        assert_eq!(outcome.trades, 2);
        assert_eq!(outcome.volume, Quantity::new(u64::MAX));
        assert_eq!(partition.order_count(), 0);
    }
}
