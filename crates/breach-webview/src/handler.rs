//! The handler shared by every browser view.
//!
//! One `ViewHandler` is created by the shell and handed to each view at
//! creation. Engine callbacks run on the UI thread but must be `'static`,
//! so the handler is reference-counted and keeps its state behind mutexes.

use std::sync::{Mutex, MutexGuard, PoisonError};

use breach_common::ViewId;
use tracing::debug;

use crate::events::{PageLoadState, ViewEvent};

#[derive(Debug, Default)]
pub struct ViewHandler {
    /// Event sink, drained by the main loop.
    events: Mutex<Vec<ViewEvent>>,
    /// Views created and not yet closed, in creation order.
    live: Mutex<Vec<ViewId>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ViewHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a view whose native widget has just been realized.
    pub fn after_created(&self, view_id: ViewId, url: &str) {
        debug!(%view_id, url, "view created");
        lock(&self.live).push(view_id);
        self.push(ViewEvent::Created {
            view_id,
            url: url.to_string(),
        });
    }

    /// Record a view that is about to be destroyed. Returns `false` for a
    /// view that was never created or is already closed.
    pub fn before_close(&self, view_id: ViewId) -> bool {
        let removed = {
            let mut live = lock(&self.live);
            match live.iter().position(|id| *id == view_id) {
                Some(idx) => {
                    live.remove(idx);
                    true
                }
                None => false,
            }
        };
        if removed {
            debug!(%view_id, "view closing");
            self.push(ViewEvent::Closed { view_id });
        }
        removed
    }

    pub fn on_page_load(&self, view_id: ViewId, state: PageLoadState, url: String) {
        self.push(ViewEvent::PageLoad {
            view_id,
            state,
            url,
        });
    }

    pub fn on_title_changed(&self, view_id: ViewId, title: String) {
        self.push(ViewEvent::TitleChanged { view_id, title });
    }

    /// Live views in creation order.
    pub fn live_views(&self) -> Vec<ViewId> {
        lock(&self.live).clone()
    }

    pub fn live_count(&self) -> usize {
        lock(&self.live).len()
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<ViewEvent> {
        std::mem::take(&mut *lock(&self.events))
    }

    fn push(&self, event: ViewEvent) {
        lock(&self.events).push(event);
    }
}
