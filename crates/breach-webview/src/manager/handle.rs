use std::sync::Arc;

use breach_common::ViewId;
use wry::WebView;

use crate::handler::ViewHandler;

/// Handle to a live child WebView.
///
/// Holds a reference to the shared handler so the handler outlives the
/// native view.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) view_id: ViewId,
    /// URL the view was created with.
    pub(super) url: String,
    pub(super) handler: Arc<ViewHandler>,
}

impl WebViewHandle {
    pub fn view_id(&self) -> ViewId {
        self.view_id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Show or hide the WebView.
    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }
}
