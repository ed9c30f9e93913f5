//! Matching Engine Service
//!
//! In-memory limit-order book sharded by ticker hash.
//!
//! **Key Invariants:**
//! - At most one submission (insert + match) in progress per partition
//! - New orders become the head of their side list (most recent first)
//! - Only list heads are crossed; execution price is the sell head's limit
//! - After `submit` returns, the partition's heads no longer cross
//! - Conservation of quantity

pub mod book;
pub mod config;
pub mod engine;
pub mod matching;
pub mod partitioner;
pub mod sink;

pub use config::BookConfig;
pub use engine::OrderBook;
pub use partitioner::{partition_index, Partitioner, DEFAULT_PARTITION_COUNT};
pub use sink::{ChannelSink, LogSink, RecordingSink, TradeSink};
