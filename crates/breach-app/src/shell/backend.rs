//! The seam between the shell and its two collaborators: the browser
//! engine and the window toolkit.

use std::sync::Arc;

use breach_common::{Orientation, Rect, ShellError, ViewId};
use breach_layout::{BoxNode, ContainerId};
use breach_webview::ViewHandler;

use super::views::WindowSpec;

/// A layout container a browser view is created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container {
    pub id: ContainerId,
    pub orientation: Orientation,
}

/// Engine and toolkit operations, in the order the shell calls them.
///
/// `Cx` is whatever the toolkit hands out while its loop is running
/// (`winit::event_loop::ActiveEventLoop` for the native backend). Window
/// and view creation and the quit request need it.
pub trait ShellBackend {
    type Cx: ?Sized;

    /// Give the engine a chance to run as a worker subprocess. Returns the
    /// status the process must exit with when this launch was one.
    fn execute_subprocess(&mut self, args: &[String]) -> Option<i32>;

    fn initialize_engine(&mut self, args: &[String]) -> Result<(), ShellError>;

    fn initialize_toolkit(&mut self) -> Result<(), ShellError>;

    /// Create the (hidden) top-level window holding `tree`. Returns the
    /// client area in logical pixels.
    fn create_window(
        &mut self,
        cx: &Self::Cx,
        window: &WindowSpec,
        tree: &BoxNode,
    ) -> Result<Rect, ShellError>;

    /// Create a browser view inside `container` and block until the native
    /// view exists.
    fn create_browser_sync(
        &mut self,
        cx: &Self::Cx,
        view: ViewId,
        url: &str,
        container: Container,
        bounds: Rect,
        handler: &Arc<ViewHandler>,
    ) -> Result<(), ShellError>;

    fn set_view_bounds(&mut self, view: ViewId, bounds: Rect);

    /// Make the window and everything in it visible.
    fn show_all(&mut self, cx: &Self::Cx) -> Result<(), ShellError>;

    /// Ask the message loop to return. Does not block.
    fn quit_message_loop(&mut self, cx: &Self::Cx);

    fn destroy_view(&mut self, view: ViewId);

    fn shutdown_engine(&mut self);
}
