//! Order flow bots

pub mod retail_trader;

pub use retail_trader::RetailTrader;
