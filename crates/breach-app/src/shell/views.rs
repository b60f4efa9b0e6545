//! The fixed widget tree and browser views of the shell window.

use breach_common::ViewId;
use breach_layout::{BoxNode, ContainerId};

/// Vertical container, the window's only child.
pub const ROOT_VBOX: ContainerId = ContainerId(0);
/// Horizontal row packed first into the root container.
pub const ROW_HBOX: ContainerId = ContainerId(1);

/// The top-level window. Fixed at build time, not configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSpec {
    pub title: &'static str,
    /// Initial inner size in logical pixels.
    pub width: f64,
    pub height: f64,
}

pub const WINDOW: WindowSpec = WindowSpec {
    title: "Breach",
    width: 400.0,
    height: 400.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSpec {
    pub id: ViewId,
    pub container: ContainerId,
    pub url: &'static str,
}

/// Browser views in creation order.
pub const VIEWS: [ViewSpec; 3] = [
    ViewSpec {
        id: ViewId(1),
        container: ROW_HBOX,
        url: "http://code.google.com",
    },
    ViewSpec {
        id: ViewId(2),
        container: ROW_HBOX,
        url: "http://www.github.com",
    },
    ViewSpec {
        id: ViewId(3),
        container: ROOT_VBOX,
        url: "http://www.google.com",
    },
];

/// `VBox[ HBox[] ]`, ready for the views to be packed.
pub fn window_tree() -> BoxNode {
    let mut root = BoxNode::vbox(ROOT_VBOX);
    root.pack(ROOT_VBOX, BoxNode::hbox(ROW_HBOX));
    root
}
