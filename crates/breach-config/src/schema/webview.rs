//! Settings applied to every embedded browser view.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    /// Enable the web inspector (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent; `None` keeps the engine's own.
    pub user_agent: Option<String>,
    /// Allow media to start playing without a user gesture.
    pub autoplay: bool,
    /// Allow page scripts to access the clipboard.
    pub clipboard: bool,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: None,
            autoplay: false,
            clipboard: true,
        }
    }
}
