use std::sync::Arc;

use breach_common::ViewId;
use tracing::trace;
use wry::WebViewBuilder;

use crate::events::PageLoadState;
use crate::handler::ViewHandler;

use super::WebViewManager;

impl WebViewManager {
    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        handler: Arc<ViewHandler>,
        view_id: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            trace!(%view_id, ?state, url = %url, "page load");
            handler.on_page_load(view_id, state, url);
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        handler: Arc<ViewHandler>,
        view_id: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            trace!(%view_id, title = %title, "title changed");
            handler.on_title_changed(view_id, title);
        })
    }
}
