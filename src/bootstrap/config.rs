//! # Configuration Loader
//!
//! Reads the TOML file and maps it onto [`ExplorerConfig`]. Range checks
//! belong to [`ExplorerConfig::validate`], which runs during wiring.

use std::path::{Path, PathBuf};

use anyhow::Context;
use be_core::ExplorerConfig;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "BREWERY_EXPLORER_CONFIG";

/// Config file looked up in the working directory when the env var is unset.
pub const DEFAULT_CONFIG_FILE: &str = "brewery-explorer.toml";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<ExplorerConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    Ok(ExplorerConfig::from_toml(&toml_value))
}

/// Config path from `BREWERY_EXPLORER_CONFIG`, else [`DEFAULT_CONFIG_FILE`].
pub fn resolve_config_path(env_value: Option<String>) -> PathBuf {
    env_value
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load the config at `path`, or defaults when the file does not exist.
pub fn resolve_config(path: &Path) -> anyhow::Result<ExplorerConfig> {
    if !path.exists() {
        return Ok(ExplorerConfig::default());
    }
    load_config(path.to_path_buf())
}
