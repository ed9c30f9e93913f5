use anyhow::Result;
use simulation::export::{build_export, export_json, write_to_file};
use simulation::{run_simulation, SimulationConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Usage: `simulate [config.json] [output.json]`
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimulationConfig::from_json_file(&path)?,
        None => SimulationConfig::default(),
    };

    let metrics = run_simulation(&config)?;
    let export = build_export(&config, &metrics);

    match args.next() {
        Some(path) => {
            write_to_file(&export, &path)?;
            info!(path = %path, "Wrote simulation export");
        }
        None => println!("{}", export_json(&export)?),
    }
    Ok(())
}
