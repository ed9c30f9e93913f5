//! Trade sinks
//!
//! The book hands every executed crossing to a [`TradeSink`], in the order the
//! crossings occur. Sinks are called while the partition guard is held.

use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{info, warn};
use types::trade::TradeReport;

/// Destination for trade reports
pub trait TradeSink: Send + Sync {
    fn on_trade(&self, trade: &TradeReport);
}

impl<S: TradeSink + ?Sized> TradeSink for Arc<S> {
    fn on_trade(&self, trade: &TradeReport) {
        (**self).on_trade(trade)
    }
}

/// Writes each trade to the `trades` tracing target
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TradeSink for LogSink {
    fn on_trade(&self, trade: &TradeReport) {
        info!(
            target: "trades",
            ticker = %trade.ticker,
            quantity = trade.quantity.shares(),
            price = %trade.price,
            "{}",
            trade
        );
    }
}

/// Keeps every trade in memory, in emission order
#[derive(Debug, Default)]
pub struct RecordingSink {
    trades: Mutex<Vec<TradeReport>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the trades recorded so far
    pub fn trades(&self) -> Vec<TradeReport> {
        self.trades
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the recorded trades
    pub fn take(&self) -> Vec<TradeReport> {
        std::mem::take(&mut *self.trades.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.trades.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TradeSink for RecordingSink {
    fn on_trade(&self, trade: &TradeReport) {
        self.trades
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(trade.clone());
    }
}

/// Forwards trades to a channel consumer
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<TradeReport>,
}

impl ChannelSink {
    pub fn new(tx: Sender<TradeReport>) -> Self {
        Self { tx }
    }
}

impl TradeSink for ChannelSink {
    fn on_trade(&self, trade: &TradeReport) {
        if let Err(err) = self.tx.send(trade.clone()) {
            warn!(
                ticker = %err.0.ticker,
                quantity = err.0.quantity.shares(),
                "Trade receiver disconnected, report dropped"
            );
        }
    }
}
