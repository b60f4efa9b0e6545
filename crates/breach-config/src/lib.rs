//! Breach configuration.
//!
//! TOML-based settings for how the embedded webviews behave and how the
//! window's containers space their children. Every section uses serde
//! defaults, so an absent or partial file yields the built-in behavior.
//!
//! The window itself and its browser views are fixed; they live in the app.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{BreachConfig, LayoutConfig, WebViewSettings};

use std::path::Path;

use breach_common::ConfigError;

/// Load config from `override_path` if given, otherwise from the platform
/// default path, then validate it. A missing default file is not an error.
pub fn load_config(override_path: Option<&Path>) -> Result<BreachConfig, ConfigError> {
    let config = match override_path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_with_missing_override_fails() {
        let err = load_config(Some(Path::new("/tmp/breach_missing_override.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_rejects_invalid_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[layout]\nspacing = 100\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("layout.spacing"));
    }

    #[test]
    fn load_config_reads_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[webview]\nautoplay = true\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(config.webview.autoplay);
        assert_eq!(config.layout.spacing, 0);
    }
}
