//! Browser views for the Breach shell.
//!
//! Wraps the `wry` crate to provide:
//! - Child WebViews bound to a window region
//! - A single shared handler that tracks view lifespans and collects
//!   page-load and title events
//! - A registry owning every live view until shutdown
//! - Detection of engine worker-subprocess launches

pub mod events;
pub mod handler;
pub mod manager;
pub mod process;

pub use events::{PageLoadState, ViewEvent};
pub use handler::ViewHandler;
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry};
pub use process::ProcessType;
