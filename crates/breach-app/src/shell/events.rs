//! Draining the shared handler's event sink.

use breach_webview::{PageLoadState, ViewEvent};
use tracing::{debug, info};

use super::backend::ShellBackend;
use super::core::Shell;

impl<B: ShellBackend> Shell<B> {
    /// Log and discard pending view events. Returns how many were handled.
    pub fn poll_events(&mut self) -> usize {
        let events = self.handler.drain_events();
        for event in &events {
            match event {
                ViewEvent::Created { view_id, url } => {
                    debug!(%view_id, url = %url, "view attached");
                }
                ViewEvent::PageLoad {
                    view_id,
                    state: PageLoadState::Started,
                    url,
                } => {
                    debug!(%view_id, url = %url, "page load started");
                }
                ViewEvent::PageLoad {
                    view_id,
                    state: PageLoadState::Finished,
                    url,
                } => {
                    info!(%view_id, url = %url, "page loaded");
                }
                ViewEvent::TitleChanged { view_id, title } => {
                    debug!(%view_id, title = %title, "title changed");
                }
                ViewEvent::Closed { view_id } => {
                    debug!(%view_id, "view closed");
                }
            }
        }
        events.len()
    }
}
