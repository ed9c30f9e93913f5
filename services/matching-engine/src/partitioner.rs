//! Ticker partitioning
//!
//! Maps a ticker to a partition index with a polynomial rolling hash
//! (multiplier 31), reduced modulo the partition count after every character.
//! Distinct tickers may collide; colliding tickers share one partition,
//! including its order lists and its guard.

use types::errors::EngineError;

/// Partition count used when none is configured
pub const DEFAULT_PARTITION_COUNT: usize = 1024;

/// Upper bound on the partition count. Keeps `acc * 31 + codepoint` inside u64.
pub const MAX_PARTITION_COUNT: usize = u32::MAX as usize;

const HASH_MULTIPLIER: u64 = 31;

/// Compute the partition index of `ticker` for `partition_count` partitions.
///
/// The empty string maps to 0. `partition_count` must be non-zero.
pub fn partition_index(ticker: &str, partition_count: usize) -> usize {
    let modulus = partition_count as u64;
    let mut acc: u64 = 0;
    for ch in ticker.chars() {
        acc = (acc * HASH_MULTIPLIER + u64::from(u32::from(ch))) % modulus;
    }
    acc as usize
}

/// Validated partition function for a fixed partition count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partitioner {
    partition_count: usize,
}

impl Partitioner {
    pub fn new(partition_count: usize) -> Result<Self, EngineError> {
        if partition_count == 0 || partition_count > MAX_PARTITION_COUNT {
            return Err(EngineError::Config {
                message: format!(
                    "partition_count must be in 1..={MAX_PARTITION_COUNT}, got {partition_count}"
                ),
            });
        }
        Ok(Self { partition_count })
    }

    pub fn partition_count(&self) -> usize {
        self.partition_count
    }

    /// Index in `[0, partition_count)` for `ticker`
    pub fn partition_index(&self, ticker: &str) -> usize {
        partition_index(ticker, self.partition_count)
    }
}

impl Default for Partitioner {
    fn default() -> Self {
        Self {
            partition_count: DEFAULT_PARTITION_COUNT,
        }
    }
}
