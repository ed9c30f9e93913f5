//! Types library for the partitioned order book
//!
//! Value types shared by the matching engine and the simulation driver.
//!
//! # Modules
//! - `ids`: Ticker identifier
//! - `numeric`: Decimal price and whole-share quantity
//! - `order`: Side and order submission request
//! - `trade`: Trade report emitted per crossing
//! - `errors`: Error taxonomy

pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;
pub mod errors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::trade::*;
    pub use crate::errors::*;
}
