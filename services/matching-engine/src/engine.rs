//! Order book core
//!
//! Owns every partition, each behind its own mutex. A submission locks exactly
//! one partition for the insert and the matching pass that follows, so work on
//! one partition is serialized while distinct partitions proceed in parallel.

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, error, warn};
use types::errors::EngineError;
use types::numeric::{Price, Quantity};
use types::order::{OrderRequest, Side};

use crate::book::{Partition, PartitionView};
use crate::config::BookConfig;
use crate::matching::match_partition;
use crate::partitioner::Partitioner;
use crate::sink::TradeSink;

/// Partitioned limit-order book
pub struct OrderBook<S> {
    partitioner: Partitioner,
    partitions: Box<[Mutex<Partition>]>,
    sink: S,
}

impl<S: TradeSink> OrderBook<S> {
    /// Create a book with the default partition count
    pub fn new(sink: S) -> Self {
        Self::build(Partitioner::default(), sink)
    }

    /// Create a book from configuration
    pub fn with_config(config: &BookConfig, sink: S) -> Result<Self, EngineError> {
        Ok(Self::build(config.partitioner()?, sink))
    }

    fn build(partitioner: Partitioner, sink: S) -> Self {
        let partitions = (0..partitioner.partition_count())
            .map(|index| Mutex::new(Partition::new(index)))
            .collect();
        Self {
            partitioner,
            partitions,
            sink,
        }
    }

    /// Submit an order
    ///
    /// Rejects invalid orders before touching any partition. Otherwise the
    /// order becomes the head of its side list and the partition is matched;
    /// trades go to the sink before this returns.
    pub fn submit(
        &self,
        side: Side,
        ticker: &str,
        quantity: u64,
        limit_price: Price,
    ) -> Result<(), EngineError> {
        self.submit_request(OrderRequest::new(side, ticker, quantity, limit_price))
    }

    /// Submit a prepared request
    pub fn submit_request(&self, request: OrderRequest) -> Result<(), EngineError> {
        if let Err(err) = request.validate() {
            warn!(
                ticker = %request.ticker,
                side = ?request.side,
                quantity = request.quantity.shares(),
                price = %request.limit_price,
                error = %err,
                "Rejecting order"
            );
            return Err(err.into());
        }

        let index = self.partitioner.partition_index(request.ticker.as_str());
        let ticker = request.ticker.clone();
        let side = request.side;

        let outcome = {
            let mut partition = self.lock_partition(index)?;
            partition.push_front(request);
            let outcome = match_partition(&mut partition, &ticker, &self.sink);
            debug_assert!(!partition.is_crossed(), "Heads still cross after matching");
            outcome
        };

        debug!(
            ticker = %ticker,
            side = ?side,
            partition = index,
            trades = outcome.trades,
            volume = outcome.volume.shares(),
            "Order processed"
        );
        Ok(())
    }

    fn lock_partition(&self, index: usize) -> Result<MutexGuard<'_, Partition>, EngineError> {
        let slot = self
            .partitions
            .get(index)
            .ok_or(EngineError::PartitionUnavailable { index })?;
        slot.lock().map_err(|_| {
            error!(partition = index, "Partition guard poisoned");
            EngineError::PartitionUnavailable { index }
        })
    }

    /// Partition index used for `ticker`
    pub fn partition_index(&self, ticker: &str) -> usize {
        self.partitioner.partition_index(ticker)
    }

    pub fn partition_count(&self) -> usize {
        self.partitioner.partition_count()
    }

    /// Copy of the lists in the partition of `ticker`, head first.
    ///
    /// The view covers every ticker sharing that partition.
    pub fn resting_orders(&self, ticker: &str) -> Result<PartitionView, EngineError> {
        let index = self.partitioner.partition_index(ticker);
        Ok(self.lock_partition(index)?.view())
    }

    /// Remaining quantity on one side of the partition of `ticker`
    pub fn resting_quantity(&self, ticker: &str, side: Side) -> Result<Quantity, EngineError> {
        let index = self.partitioner.partition_index(ticker);
        Ok(self.lock_partition(index)?.resting_quantity(side))
    }

    /// Resting order count across all partitions
    pub fn order_count(&self) -> Result<usize, EngineError> {
        let mut total = 0;
        for index in 0..self.partitions.len() {
            total += self.lock_partition(index)?.order_count();
        }
        Ok(total)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
