//! Order Book Simulation
//!
//! Drives the partitioned matching engine with seeded random traders running
//! on concurrent threads and reports what happened.
//!
//! # Modules
//! - `config` — Simulation parameters, loadable from JSON
//! - `bots` — Retail random trader
//! - `runner` — Threaded simulation loop over a shared book
//! - `metrics` — Trade tallies and submit latency histogram
//! - `export` — Metrics JSON export

pub mod bots;
pub mod config;
pub mod export;
pub mod metrics;
pub mod runner;

pub use config::SimulationConfig;
pub use runner::{run_simulation, SimulationSink};

/// Crate version constant
pub const VERSION: &str = "1.0.0";
