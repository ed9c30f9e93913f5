//! Error types for the order book
//!
//! Error taxonomy using thiserror. Order validation failures are raised at the
//! submission boundary, before any partition state is touched.

use thiserror::Error;

/// Top-level engine error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid order: {0}")]
    InvalidOrder(#[from] OrderError),

    /// The partition guard could not be acquired (a previous holder panicked
    /// while mutating the partition).
    #[error("Partition {index} unavailable")]
    PartitionUnavailable { index: usize },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Order-specific validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}
