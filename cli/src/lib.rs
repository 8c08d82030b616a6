pub mod commands;
pub mod repl;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use radix_engine::ConverterConfig;

/// Load converter settings from a TOML file, or the defaults when no path
/// is given.
///
/// Missing keys take their defaults; unknown keys are rejected so a typo
/// does not silently disable a panel.
pub fn load_config(path: Option<&Path>) -> Result<ConverterConfig> {
    let Some(path) = path else {
        return Ok(ConverterConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: ConverterConfig = toml::from_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    log::debug!("loaded config from {}: {config:?}", path.display());
    Ok(config)
}

/// Map the `-v` count to a log filter. `RUST_LOG` still wins.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(level);
    // A second init (tests, embedding) is harmless.
    let _ = env_logger::Builder::from_env(env).try_init();
}
