//! Core TOML config loading: read from path or platform default.

use std::path::Path;

use breach_common::ConfigError;
use tracing::{debug, info};

use crate::schema::BreachConfig;

use super::paths::default_config_path;

/// Load config from a specific TOML file path.
///
/// Missing fields are filled from serde defaults. Validation is left to
/// the caller.
pub fn load_from_path(path: &Path) -> Result<BreachConfig, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: BreachConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/breach/config.toml`
/// On Linux: `~/.config/breach/config.toml`
///
/// A missing file yields the defaults. Nothing is written to disk.
pub fn load_default() -> Result<BreachConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            debug!("no config at {}, using defaults", path.display());
            Ok(BreachConfig::default())
        }
        Err(e) => Err(e),
    }
}
