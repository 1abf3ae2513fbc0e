//! Load blot rule configuration from TOML files

use std::fs;
use std::path::Path;

use crate::core::config::BlotConfig;
use crate::core::error::{BlotError, Result};

/// Load a blot config from a TOML file
///
/// A missing file yields the defaults; a present but malformed or invalid
/// file is an error.
pub fn load_config(path: &Path) -> Result<BlotConfig> {
    if !path.exists() {
        return Ok(BlotConfig::default());
    }
    let content = fs::read_to_string(path)?;
    parse_config_toml(&content)
}

/// Parse a blot config from TOML content
pub fn parse_config_toml(content: &str) -> Result<BlotConfig> {
    let config: BlotConfig = toml::from_str(content)?;
    config.validate().map_err(BlotError::InvalidConfig)?;
    Ok(config)
}
