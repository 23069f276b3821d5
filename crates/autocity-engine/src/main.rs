//! Command-line entry point for the Autocity simulation.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `autocity-config.yaml` (or the path given as
//!    the first argument), falling back to defaults when the file is absent
//! 2. Initialize structured logging (tracing)
//! 3. Build the workflow from the validated configuration
//! 4. Run the configured number of days, rendering each report to stdout
//! 5. Log the result

mod error;
mod report;

use std::io;
use std::path::{Path, PathBuf};

use autocity_core::config::LoggingConfig;
use autocity_core::{SimulationConfig, SimulationWorkflow};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::report::ConsoleReporter;

/// Configuration file read when no path is given.
const DEFAULT_CONFIG_PATH: &str = "autocity-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or is invalid, or
/// if reports cannot be written.
fn main() -> Result<(), EngineError> {
    // 1. Load configuration.
    let config_path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let (config, from_file) = load_config(&config_path)?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("autocity-engine starting");
    info!(
        path = %config_path.display(),
        from_file,
        world_name = config.world.name,
        seed = config.world.seed,
        days = config.simulation.days,
        citizens = config.citizens.roster.len(),
        "Configuration loaded"
    );

    // 3. Build the workflow.
    config.validate()?;
    let mut workflow = SimulationWorkflow::from_config(&config)?;

    // 4. Run the simulation.
    let mut reporter = ConsoleReporter::new(io::stdout().lock(), config.logging.report_format);
    let reports = workflow.run(config.simulation.days, &mut reporter)?;
    reporter.finish()?;

    // 5. Log results.
    let city = workflow.city();
    info!(
        run_id = %workflow.run_id(),
        days = reports.len(),
        economy = %city.economy(),
        safety = %city.safety(),
        happiness = %city.happiness(),
        "autocity-engine shutdown complete"
    );

    Ok(())
}

/// Load the simulation configuration, or defaults if the file is missing.
///
/// Environment overrides apply in both cases. The returned flag records
/// whether the file was found.
fn load_config(path: &Path) -> Result<(SimulationConfig, bool), EngineError> {
    if path.exists() {
        Ok((SimulationConfig::from_file(path)?, true))
    } else {
        let mut config = SimulationConfig::default();
        config.apply_env_overrides();
        Ok((config, false))
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so that stdout carries only reports.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
