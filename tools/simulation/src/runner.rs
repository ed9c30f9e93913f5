//! Threaded simulation runner
//!
//! Spawns one OS thread per trader against a single shared book. Traders draw
//! from independent seeded streams, so the set of generated orders is fixed by
//! the config while their interleaving on the book is left to the scheduler.

use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Instant;

use anyhow::{anyhow, Result};
use matching_engine::{LogSink, OrderBook, TradeSink};
use tracing::{debug, info};
use types::trade::TradeReport;

use crate::bots::RetailTrader;
use crate::config::SimulationConfig;
use crate::metrics::SimMetrics;

/// Sink that tallies every trade and optionally logs it.
pub struct SimulationSink {
    metrics: Mutex<SimMetrics>,
    log: Option<LogSink>,
}

impl SimulationSink {
    pub fn new(log_trades: bool) -> Self {
        Self {
            metrics: Mutex::new(SimMetrics::new()),
            log: log_trades.then_some(LogSink),
        }
    }

    /// Snapshot of the trade tallies so far
    pub fn metrics(&self) -> SimMetrics {
        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TradeSink for SimulationSink {
    fn on_trade(&self, trade: &TradeReport) {
        if let Some(log) = &self.log {
            log.on_trade(trade);
        }
        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record_trade(trade);
    }
}

/// Run one simulation to completion and return the merged metrics.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimMetrics> {
    config.validate()?;

    let book = Arc::new(OrderBook::with_config(
        &config.book,
        SimulationSink::new(config.log_trades),
    )?);

    info!(
        traders = config.traders,
        orders = config.orders,
        tickers = config.tickers.len(),
        partitions = book.partition_count(),
        "Starting simulation"
    );

    let traders = (0..config.traders)
        .map(|trader_id| RetailTrader::new(trader_id, config))
        .collect::<Result<Vec<_>>>()?;

    let started = Instant::now();
    let handles: Vec<_> = traders
        .into_iter()
        .map(|mut trader| {
            let book = Arc::clone(&book);
            let trader_id = trader.trader_id;
            let quota = config.orders_for_trader(trader_id);
            thread::spawn(move || {
                let mut metrics = SimMetrics::new();
                for _ in 0..quota {
                    let submitted = Instant::now();
                    match trader.tick(&*book) {
                        Ok(_) => metrics.record_order(submitted.elapsed().as_nanos() as u64),
                        Err(err) => {
                            debug!(trader = trader_id, error = %err, "Order rejected");
                            metrics.record_rejection();
                        }
                    }
                }
                metrics
            })
        })
        .collect();

    let mut totals = SimMetrics::new();
    for (trader_id, handle) in handles.into_iter().enumerate() {
        let metrics = handle
            .join()
            .map_err(|_| anyhow!("trader {trader_id} panicked"))?;
        totals.merge_orders(&metrics);
    }
    let elapsed = started.elapsed();

    let trades = book.sink().metrics();
    totals.total_trades = trades.total_trades;
    totals.total_shares = trades.total_shares;
    totals.total_notional = trades.total_notional;
    totals.per_ticker = trades.per_ticker;
    totals.resting_orders = book.order_count()?;
    totals.set_elapsed(elapsed.as_nanos() as u64);

    info!(summary = %totals.summary(), "Simulation complete");
    Ok(totals)
}
