//! WebView lifecycle management.
//!
//! `WebViewManager` builds `wry::WebView` instances as children of the
//! shell window; `WebViewRegistry` owns them until they are destroyed.

mod handle;
mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use registry::WebViewRegistry;
pub use types::WebViewConfig;

/// Builds child WebViews with a fixed set of settings.
pub struct WebViewManager {
    config: WebViewConfig,
}

impl WebViewManager {
    pub fn new(config: WebViewConfig) -> Self {
        Self { config }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new(WebViewConfig::default())
    }
}
