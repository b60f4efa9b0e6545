use std::collections::BTreeMap;
use std::sync::Arc;

use breach_common::ViewId;
use tracing::debug;
use wry::raw_window_handle;

use crate::handler::ViewHandler;

use super::handle::WebViewHandle;
use super::WebViewManager;

/// Owns every live WebView, keyed by view ID.
pub struct WebViewRegistry {
    manager: WebViewManager,
    handles: BTreeMap<ViewId, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: BTreeMap::new(),
        }
    }

    /// Swap the manager used for future WebViews.
    pub fn set_manager(&mut self, manager: WebViewManager) {
        self.manager = manager;
    }

    /// Create a WebView for `view_id` and register it.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        view_id: ViewId,
        window: &W,
        bounds: wry::Rect,
        url: &str,
        handler: &Arc<ViewHandler>,
    ) -> Result<(), wry::Error> {
        let handle = self.manager.create(view_id, window, bounds, url, handler)?;
        self.handles.insert(view_id, handle);
        Ok(())
    }

    pub fn get(&self, view_id: ViewId) -> Option<&WebViewHandle> {
        self.handles.get(&view_id)
    }

    /// Destroy a WebView by view ID. The view's handler is told before the
    /// native view goes away.
    pub fn destroy(&mut self, view_id: ViewId) -> bool {
        match self.handles.remove(&view_id) {
            Some(handle) => {
                handle.handler.before_close(view_id);
                drop(handle);
                debug!(%view_id, "WebView destroyed");
                true
            }
            None => false,
        }
    }

    /// Destroy all live WebViews, newest first.
    pub fn destroy_all(&mut self) {
        let ids: Vec<ViewId> = self.handles.keys().rev().copied().collect();
        for view_id in ids {
            self.destroy(view_id);
        }
    }

    pub fn handles(&self) -> impl Iterator<Item = &WebViewHandle> {
        self.handles.values()
    }

    pub fn count(&self) -> usize {
        self.handles.len()
    }
}
