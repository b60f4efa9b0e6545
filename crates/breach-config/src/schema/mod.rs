//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod layout;
mod webview;

pub use layout::*;
pub use webview::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BreachConfig {
    pub layout: LayoutConfig,
    pub webview: WebViewSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: BreachConfig = toml::from_str("").unwrap();
        assert_eq!(config.layout.spacing, 0);
        assert!(config.webview.user_agent.is_none());
        assert!(config.webview.clipboard);
    }

    #[test]
    fn window_section_is_not_configuration() {
        // Title and size are fixed; an old `[window]` table is ignored.
        let config: BreachConfig =
            toml::from_str("[window]\ntitle = \"Other\"\nwidth = 1280\n").unwrap();
        assert_eq!(config.layout.spacing, 0);
    }

    #[test]
    fn sections_deserialize_independently() {
        let toml_str = r#"
[layout]
spacing = 6

[webview]
devtools = true
user_agent = "Breach/0.1"
"#;
        let config: BreachConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.layout.spacing, 6);
        assert!(config.webview.devtools);
        assert_eq!(config.webview.user_agent.as_deref(), Some("Breach/0.1"));
    }

    #[test]
    fn serializes_both_sections() {
        let json = serde_json::to_value(BreachConfig::default()).unwrap();
        assert!(json.get("layout").is_some());
        assert!(json.get("webview").is_some());
        assert!(json.get("window").is_none());
    }
}
