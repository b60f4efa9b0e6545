//! Configuration validation.
//!
//! Each section has its own check; errors from all of them are collected
//! into a single `ConfigError`.

mod helpers;
mod layout;
mod webview;


use breach_common::ConfigError;

use crate::schema::BreachConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BreachConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_layout(&mut errors, config);
    webview::validate_webview(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
