//! Box-container layout for the shell window.
//!
//! A window holds a tree of containers, each laying its children out along
//! one axis, and browser views at the leaves. `LayoutEngine` turns that
//! tree into one bounds rectangle per view.

pub mod layout;
pub mod tree;

pub use layout::LayoutEngine;
pub use tree::{BoxNode, ContainerId};
