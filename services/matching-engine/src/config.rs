//! Order book configuration

use serde::{Deserialize, Serialize};
use types::errors::EngineError;

use crate::partitioner::{Partitioner, DEFAULT_PARTITION_COUNT};

/// Configuration for an [`OrderBook`](crate::OrderBook).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    /// Number of partitions. Fixed for the lifetime of the book.
    pub partition_count: usize,
}

impl BookConfig {
    /// Build the partitioner described by this config.
    pub fn partitioner(&self) -> Result<Partitioner, EngineError> {
        Partitioner::new(self.partition_count)
    }
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            partition_count: DEFAULT_PARTITION_COUNT,
        }
    }
}
