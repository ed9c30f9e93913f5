//! Matching logic module
//!
//! Crosses the heads of a partition's buy and sell lists.

pub mod crossing;
pub mod executor;

pub use crossing::can_match;
pub use executor::{match_partition, MatchOutcome};
