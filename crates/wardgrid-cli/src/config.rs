//! Loading and overriding the driver configuration.
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use wardgrid::config::DriverConfig;

/// Load a driver configuration from a JSON file.
pub fn load_driver_config<P: AsRef<Path>>(path: P) -> Result<DriverConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DriverConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Resolve the configuration for a subcommand: the optional `config` file,
/// or the defaults (printed to stderr as a template), then the command line
/// overrides that the subcommand defines.
pub fn from_arguments(matches: &ArgMatches) -> Result<DriverConfig> {
    let mut config = match matches.get_one::<std::path::PathBuf>("config") {
        Some(path) => {
            log::info!("[wardgrid] Using config: {:?}", path);
            load_driver_config(path)?
        }
        None => {
            let config = DriverConfig::default();
            eprintln!("[wardgrid] No config file provided; using defaults.");
            eprintln!("{}", serde_json::to_string_pretty(&config)?);
            config
        }
    };

    if let Ok(Some(&large_rows)) = matches.try_get_one::<usize>("large_rows") {
        config.large_rows = large_rows;
    }
    if let Ok(Some(&large_cols)) = matches.try_get_one::<usize>("large_cols") {
        config.large_cols = large_cols;
    }
    if let Ok(Some(&dim)) = matches.try_get_one::<usize>("dim") {
        config.guard_dim = dim;
    }
    if let Ok(Some(&seed)) = matches.try_get_one::<u64>("seed") {
        config.seed = Some(seed);
    }
    Ok(config)
}
