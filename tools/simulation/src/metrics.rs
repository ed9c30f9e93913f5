//! Performance metrics for simulation
//!
//! Tracks submissions, rejections, trades, volume, per-ticker activity and a
//! submit latency histogram.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::trade::TradeReport;

/// Latency histogram bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyBucket {
    pub label: String,
    pub lower_ns: u64,
    pub upper_ns: u64,
    pub count: u64,
}

/// Trade activity of one ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickerStats {
    pub trades: u64,
    pub shares: u64,
    pub notional: Decimal,
}

/// Aggregated simulation metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimMetrics {
    pub total_orders: u64,
    pub total_rejected: u64,
    pub total_trades: u64,
    pub total_shares: u64,
    pub total_notional: Decimal,
    pub resting_orders: usize,
    pub per_ticker: BTreeMap<String, TickerStats>,
    pub latency_buckets: Vec<LatencyBucket>,
    pub elapsed_ns: u64,
}

impl SimMetrics {
    /// Create empty metrics with default latency buckets.
    pub fn new() -> Self {
        Self {
            total_orders: 0,
            total_rejected: 0,
            total_trades: 0,
            total_shares: 0,
            total_notional: Decimal::ZERO,
            resting_orders: 0,
            per_ticker: BTreeMap::new(),
            latency_buckets: default_buckets(),
            elapsed_ns: 0,
        }
    }

    /// Record a single trade.
    ///
    /// Share and notional totals saturate rather than overflow.
    pub fn record_trade(&mut self, trade: &TradeReport) {
        let shares = trade.quantity.shares();
        let notional = trade.trade_value();

        self.total_trades += 1;
        self.total_shares = self.total_shares.saturating_add(shares);
        self.total_notional = add_notional(self.total_notional, notional);

        let stats = self
            .per_ticker
            .entry(trade.ticker.as_str().to_string())
            .or_default();
        stats.trades += 1;
        stats.shares = stats.shares.saturating_add(shares);
        stats.notional = add_notional(stats.notional, notional);
    }

    /// Record one accepted submission and how long it took.
    pub fn record_order(&mut self, latency_ns: u64) {
        self.total_orders += 1;
        self.record_latency(latency_ns);
    }

    pub fn record_rejection(&mut self) {
        self.total_rejected += 1;
    }

    /// Record latency in nanoseconds.
    pub fn record_latency(&mut self, latency_ns: u64) {
        for bucket in &mut self.latency_buckets {
            if latency_ns >= bucket.lower_ns && latency_ns < bucket.upper_ns {
                bucket.count += 1;
                return;
            }
        }
        // Overflow bucket (last)
        if let Some(last) = self.latency_buckets.last_mut() {
            last.count += 1;
        }
    }

    /// Fold another trader's submission counters into these.
    pub fn merge_orders(&mut self, other: &SimMetrics) {
        self.total_orders += other.total_orders;
        self.total_rejected += other.total_rejected;
        for (mine, theirs) in self.latency_buckets.iter_mut().zip(&other.latency_buckets) {
            mine.count += theirs.count;
        }
    }

    /// Set elapsed time.
    pub fn set_elapsed(&mut self, ns: u64) {
        self.elapsed_ns = ns;
    }

    /// Throughput: orders per second.
    pub fn orders_per_second(&self) -> f64 {
        if self.elapsed_ns == 0 {
            return 0.0;
        }
        self.total_orders as f64 / (self.elapsed_ns as f64 / 1_000_000_000.0)
    }

    /// Build a summary string.
    pub fn summary(&self) -> String {
        format!(
            "Orders: {} | Rejected: {} | Trades: {} | Shares: {} | Notional: {} | Resting: {} | Throughput: {:.0} orders/s",
            self.total_orders,
            self.total_rejected,
            self.total_trades,
            self.total_shares,
            self.total_notional,
            self.resting_orders,
            self.orders_per_second(),
        )
    }
}

impl Default for SimMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn add_notional(total: Decimal, value: Option<Decimal>) -> Decimal {
    value
        .and_then(|v| total.checked_add(v))
        .unwrap_or(Decimal::MAX)
}

/// Default latency histogram buckets.
fn default_buckets() -> Vec<LatencyBucket> {
    [
        ("<1μs", 0, 1_000),
        ("1-10μs", 1_000, 10_000),
        ("10-100μs", 10_000, 100_000),
        ("100μs-1ms", 100_000, 1_000_000),
        ("1-10ms", 1_000_000, 10_000_000),
        (">10ms", 10_000_000, u64::MAX),
    ]
    .into_iter()
    .map(|(label, lower_ns, upper_ns)| LatencyBucket {
        label: label.into(),
        lower_ns,
        upper_ns,
        count: 0,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::Ticker;
    use types::numeric::{Price, Quantity};

    fn trade(ticker: &str, qty: u64, price: u64) -> TradeReport {
        TradeReport::new(Ticker::new(ticker), Quantity::new(qty), Price::from_u64(price))
    }

    #[test]
    fn test_metrics_creation() {
        let metrics = SimMetrics::new();
        assert_eq!(metrics.total_orders, 0);
        assert_eq!(metrics.total_trades, 0);
        assert_eq!(metrics.latency_buckets.len(), 6);
    }

    #[test]
    fn test_record_trade() {
        let mut metrics = SimMetrics::new();
        metrics.record_trade(&trade("AAPL", 10, 100));
        metrics.record_trade(&trade("AAPL", 5, 102));
        metrics.record_trade(&trade("MSFT", 1, 300));

        assert_eq!(metrics.total_trades, 3);
        assert_eq!(metrics.total_shares, 16);
        assert_eq!(metrics.total_notional, Decimal::from(1000 + 510 + 300));

        let aapl = &metrics.per_ticker["AAPL"];
        assert_eq!(aapl.trades, 2);
        assert_eq!(aapl.shares, 15);
    }

    #[test]
    fn test_record_trade_saturates() {
        let mut metrics = SimMetrics::new();
        let huge = TradeReport::new(
            Ticker::new("AAPL"),
            Quantity::new(u64::MAX),
            Price::from_u64(100_000_000_000),
        );
        metrics.record_trade(&huge);
        metrics.record_trade(&huge);

        assert_eq!(metrics.total_trades, 2);
        assert_eq!(metrics.total_shares, u64::MAX);
        assert_eq!(metrics.total_notional, Decimal::MAX);
        assert_eq!(metrics.per_ticker["AAPL"].notional, Decimal::MAX);
    }

    #[test]
    fn test_latency_histogram() {
        let mut metrics = SimMetrics::new();
        metrics.record_order(500); // <1μs
        metrics.record_order(5_000); // 1-10μs
        metrics.record_order(50_000_000); // >10ms

        assert_eq!(metrics.total_orders, 3);
        assert_eq!(metrics.latency_buckets[0].count, 1);
        assert_eq!(metrics.latency_buckets[1].count, 1);
        assert_eq!(metrics.latency_buckets[5].count, 1);
    }

    #[test]
    fn test_merge_orders() {
        let mut a = SimMetrics::new();
        a.record_order(500);
        let mut b = SimMetrics::new();
        b.record_order(600);
        b.record_rejection();

        a.merge_orders(&b);
        assert_eq!(a.total_orders, 2);
        assert_eq!(a.total_rejected, 1);
        assert_eq!(a.latency_buckets[0].count, 2);
    }

    #[test]
    fn test_throughput() {
        let mut metrics = SimMetrics::new();
        for _ in 0..1000 {
            metrics.record_order(100);
        }
        metrics.set_elapsed(1_000_000_000); // 1 second
        assert!((metrics.orders_per_second() - 1000.0).abs() < 0.01);
        assert!(metrics.summary().contains("Orders: 1000"));
    }
}
