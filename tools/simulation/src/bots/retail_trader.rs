//! Retail random trader bot
//!
//! Generates random limit orders with a deterministic seeded RNG: a fair coin
//! for the side, a uniform ticker, a uniform share count and a uniform price
//! on the configured decimal grid.

use anyhow::Result;
use matching_engine::{OrderBook, TradeSink};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use types::errors::EngineError;
use types::numeric::Price;
use types::order::{OrderRequest, Side};

use crate::config::SimulationConfig;

/// Retail random trader with deterministic seeded RNG.
pub struct RetailTrader {
    pub trader_id: usize,
    pub orders_submitted: usize,
    tickers: Vec<String>,
    min_quantity: u64,
    max_quantity: u64,
    min_price: Decimal,
    price_dp: u32,
    /// Number of price grid steps in [min_price, max_price)
    price_ticks: u64,
    rng: ChaCha8Rng,
}

impl RetailTrader {
    /// Create trader `trader_id`, seeded with `config.seed + trader_id`.
    ///
    /// Fails when the configured price range has no `u64` tick grid.
    pub fn new(trader_id: usize, config: &SimulationConfig) -> Result<Self> {
        let price_ticks = config.price_ticks()?;

        Ok(Self {
            trader_id,
            orders_submitted: 0,
            tickers: config.tickers.clone(),
            min_quantity: config.min_quantity,
            max_quantity: config.max_quantity,
            min_price: config.min_price,
            price_dp: config.price_dp,
            price_ticks,
            rng: ChaCha8Rng::seed_from_u64(config.seed.wrapping_add(trader_id as u64)),
        })
    }

    /// Generate the next random order.
    pub fn generate_order(&mut self) -> OrderRequest {
        let side = if self.rng.gen_bool(0.5) { Side::BUY } else { Side::SELL };
        let ticker = self.tickers[self.rng.gen_range(0..self.tickers.len())].as_str();
        let quantity = self.rng.gen_range(self.min_quantity..=self.max_quantity);

        let tick = self.rng.gen_range(0..self.price_ticks);
        let offset = Decimal::from(tick) * Decimal::new(1, self.price_dp);
        let price = Price::new((self.min_price + offset).round_dp(self.price_dp));

        OrderRequest::new(side, ticker, quantity, price)
    }

    /// Generate and submit one order to the book.
    pub fn tick<S: TradeSink>(&mut self, book: &OrderBook<S>) -> Result<OrderRequest, EngineError> {
        let order = self.generate_order();
        book.submit_request(order.clone())?;
        self.orders_submitted += 1;
        Ok(order)
    }
}
