//! Simulation configuration
//!
//! Every field has a default, so a JSON file only needs the fields it
//! overrides. The defaults reproduce the classic workload: 1000 random orders
//! over four tickers, 1 to 100 shares, prices in [100, 150) with cents.

use std::path::Path;

use anyhow::{bail, Context, Result};
use matching_engine::BookConfig;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest scale a decimal price can carry
const MAX_PRICE_DP: u32 = 28;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Tickers drawn uniformly for each order
    pub tickers: Vec<String>,
    /// Concurrent submitter threads
    pub traders: usize,
    /// Total orders across all traders
    pub orders: usize,
    pub min_quantity: u64,
    pub max_quantity: u64,
    /// Inclusive lower price bound
    pub min_price: Decimal,
    /// Exclusive upper price bound
    pub max_price: Decimal,
    /// Decimal places kept on generated prices
    pub price_dp: u32,
    /// Base RNG seed; trader `i` uses `seed + i`
    pub seed: u64,
    /// Emit every trade through the log sink
    pub log_trades: bool,
    pub book: BookConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tickers: ["AAPL", "GOOGL", "MSFT", "TSLA"].map(String::from).to_vec(),
            traders: 8,
            orders: 1000,
            min_quantity: 1,
            max_quantity: 100,
            min_price: Decimal::from(100),
            max_price: Decimal::from(150),
            price_dp: 2,
            seed: 42,
            log_trades: true,
            book: BookConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Load from a JSON file and validate
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tickers.is_empty() {
            bail!("at least one ticker is required");
        }
        if self.traders == 0 {
            bail!("traders must be positive");
        }
        if self.min_quantity == 0 || self.min_quantity > self.max_quantity {
            bail!(
                "quantity range {}..={} is invalid",
                self.min_quantity,
                self.max_quantity
            );
        }
        if self.min_price.is_sign_negative() || self.min_price >= self.max_price {
            bail!(
                "price range {}..{} is invalid",
                self.min_price,
                self.max_price
            );
        }
        self.price_ticks()?;
        self.book.partitioner()?;
        Ok(())
    }

    /// Number of `price_dp` grid steps in `[min_price, max_price)`
    pub fn price_ticks(&self) -> Result<u64> {
        if self.price_dp > MAX_PRICE_DP {
            bail!("price_dp {} exceeds {}", self.price_dp, MAX_PRICE_DP);
        }
        let step = Decimal::new(1, self.price_dp);
        self.max_price
            .checked_sub(self.min_price)
            .and_then(|span| span.checked_div(step))
            .and_then(|ticks| ticks.ceil().to_u64())
            .filter(|&ticks| ticks > 0)
            .with_context(|| {
                format!(
                    "price range {}..{} at {} dp does not fit a u64 tick grid",
                    self.min_price, self.max_price, self.price_dp
                )
            })
    }

    /// Orders assigned to trader `trader`; the remainder goes to the first
    /// traders.
    pub fn orders_for_trader(&self, trader: usize) -> usize {
        let base = self.orders / self.traders;
        let extra = usize::from(trader < self.orders % self.traders);
        base + extra
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tickers.len(), 4);
        assert_eq!(config.book.partition_count, 1024);
    }

    #[test]
    fn test_orders_split_across_traders() {
        let config = SimulationConfig {
            orders: 10,
            traders: 4,
            ..Default::default()
        };
        let split: Vec<usize> = (0..4).map(|t| config.orders_for_trader(t)).collect();
        assert_eq!(split, vec![3, 3, 2, 2]);
        assert_eq!(split.iter().sum::<usize>(), 10);
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        let config = SimulationConfig {
            min_quantity: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimulationConfig {
            min_price: Decimal::from(150),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimulationConfig {
            book: BookConfig { partition_count: 0 },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_price_grid_limits() {
        let config = SimulationConfig {
            price_dp: 16,
            ..Default::default()
        };
        assert_eq!(config.price_ticks().unwrap(), 500_000_000_000_000_000);
        assert!(config.validate().is_ok());

        // 50 * 10^20 ticks exceed u64
        let config = SimulationConfig {
            price_dp: 20,
            ..Default::default()
        };
        assert!(config.price_ticks().is_err());
        assert!(config.validate().is_err());

        // Span / 10^-28 overflows the decimal itself
        let config = SimulationConfig {
            price_dp: 28,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SimulationConfig {
            price_dp: 29,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"orders": 50, "tickers": ["NVDA"], "book": {{"partition_count": 64}}}}"#
        )
        .unwrap();

        let config = SimulationConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.orders, 50);
        assert_eq!(config.tickers, vec!["NVDA".to_string()]);
        assert_eq!(config.book.partition_count, 64);
        assert_eq!(config.max_quantity, 100);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(SimulationConfig::from_json_file("/nonexistent/sim.json").is_err());
    }
}
