// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{DagConfig, RawDagConfig};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawDagConfig`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawDagConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    debug!(path = ?path, "loaded config file");
    let config: RawDagConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
///
/// This is the recommended entry point:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks the graph limits.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<DagConfig> {
    let raw_config = load_from_path(&path)?;
    let config = DagConfig::try_from(raw_config)?;
    Ok(config)
}

/// Parse and validate configuration held in memory.
pub fn parse_str(contents: &str) -> Result<DagConfig> {
    let raw: RawDagConfig = toml::from_str(contents)?;
    DagConfig::try_from(raw)
}

/// `Dagstore.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Dagstore.toml")
}
