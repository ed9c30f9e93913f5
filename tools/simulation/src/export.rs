//! Metrics export
//!
//! Serializes the config and metrics of a run to JSON for external
//! consumption.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::metrics::SimMetrics;

/// Combined export containing all simulation outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationExport {
    pub version: String,
    pub config: SimulationConfig,
    pub metrics: SimMetrics,
    pub orders_per_second: f64,
}

/// Build a complete simulation export.
pub fn build_export(config: &SimulationConfig, metrics: &SimMetrics) -> SimulationExport {
    SimulationExport {
        version: crate::VERSION.to_string(),
        config: config.clone(),
        metrics: metrics.clone(),
        orders_per_second: metrics.orders_per_second(),
    }
}

/// Export complete simulation data as JSON.
pub fn export_json(export: &SimulationExport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(export)
}

/// Write export to a file path.
pub fn write_to_file(export: &SimulationExport, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let json = export_json(export)?;
    std::fs::write(path, json)?;
    Ok(())
}
