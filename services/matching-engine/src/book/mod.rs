//! Order book storage
//!
//! Per-partition arenas holding the buy and sell lists.

pub mod arena;
pub mod partition;

pub use arena::{OrderArena, OrderHandle, RestingOrder};
pub use partition::{HeadQuote, Partition, PartitionView, RestingOrderView};
