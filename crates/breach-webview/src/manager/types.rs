/// Settings shared by every WebView the manager creates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebViewConfig {
    /// Whether to enable dev tools.
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: None,
            clipboard: true,
            autoplay: false,
        }
    }
}
