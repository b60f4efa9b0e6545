//! WebView event types.

use breach_common::ViewId;
use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events reported through the shared view handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewEvent {
    /// The native view exists and is attached to its window.
    Created { view_id: ViewId, url: String },
    /// Page load state changed. Carries the URL.
    PageLoad {
        view_id: ViewId,
        state: PageLoadState,
        url: String,
    },
    /// Document title changed.
    TitleChanged { view_id: ViewId, title: String },
    /// The view is about to be destroyed.
    Closed { view_id: ViewId },
}

impl ViewEvent {
    pub fn view_id(&self) -> ViewId {
        match self {
            ViewEvent::Created { view_id, .. }
            | ViewEvent::PageLoad { view_id, .. }
            | ViewEvent::TitleChanged { view_id, .. }
            | ViewEvent::Closed { view_id } => *view_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_event_reports_its_view() {
        let id = ViewId(2);
        let events = [
            ViewEvent::Created {
                view_id: id,
                url: "http://www.github.com".into(),
            },
            ViewEvent::PageLoad {
                view_id: id,
                state: PageLoadState::Finished,
                url: "https://github.com/".into(),
            },
            ViewEvent::TitleChanged {
                view_id: id,
                title: "GitHub".into(),
            },
            ViewEvent::Closed { view_id: id },
        ];
        assert!(events.iter().all(|e| e.view_id() == id));
    }

    #[test]
    fn page_load_state_follows_wry() {
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Started),
            PageLoadState::Started
        );
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Finished),
            PageLoadState::Finished
        );
    }

    #[test]
    fn events_serialize_with_variant_name() {
        let json = serde_json::to_string(&ViewEvent::Closed { view_id: ViewId(3) }).unwrap();
        assert_eq!(json, r#"{"Closed":{"view_id":3}}"#);
    }
}
