//! Configuration loading
//!
//! Reads TOML and hands it to [`PageConfig::from_toml`]. Keys the document
//! omits keep their built-in values.

use std::path::Path;

use anyhow::Context;
use lp_core::PageConfig;

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> anyhow::Result<PageConfig> {
    let toml_value: toml::Value =
        toml::from_str(content).context("Failed to parse config as TOML")?;
    PageConfig::from_toml(&toml_value)
}

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: impl AsRef<Path>) -> anyhow::Result<PageConfig> {
    let config_path = config_path.as_ref();
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    parse_config(&content)
}
