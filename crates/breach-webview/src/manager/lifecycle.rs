use std::sync::Arc;

use breach_common::ViewId;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::handler::ViewHandler;

use super::handle::WebViewHandle;
use super::WebViewManager;

impl WebViewManager {
    /// Create a WebView as a child of `window`, positioned at `bounds`,
    /// loading `url`.
    ///
    /// Returns once the native view exists; the handler's `after_created`
    /// hook has run by then.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        view_id: ViewId,
        window: &W,
        bounds: wry::Rect,
        url: &str,
        handler: &Arc<ViewHandler>,
    ) -> Result<WebViewHandle, wry::Error> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(self.config.devtools)
            .with_clipboard(self.config.clipboard)
            .with_autoplay(self.config.autoplay)
            .with_focused(false)
            .with_url(url);

        if let Some(ua) = &self.config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_page_load_handler(builder, Arc::clone(handler), view_id);
        builder = Self::attach_title_handler(builder, Arc::clone(handler), view_id);

        let webview = builder.build_as_child(window)?;
        handler.after_created(view_id, url);

        Ok(WebViewHandle {
            webview,
            view_id,
            url: url.to_string(),
            handler: Arc::clone(handler),
        })
    }
}
