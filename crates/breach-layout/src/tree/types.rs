//! Core types for the container tree: ContainerId and BoxNode.

use std::fmt;

use breach_common::{Orientation, ViewId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(pub u32);

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoxNode {
    View {
        view_id: ViewId,
    },
    Container {
        id: ContainerId,
        orientation: Orientation,
        children: Vec<BoxNode>,
    },
}

impl BoxNode {
    pub fn view(view_id: ViewId) -> Self {
        BoxNode::View { view_id }
    }

    /// An empty container.
    pub fn container(id: ContainerId, orientation: Orientation) -> Self {
        BoxNode::Container {
            id,
            orientation,
            children: Vec::new(),
        }
    }

    pub fn hbox(id: ContainerId) -> Self {
        Self::container(id, Orientation::Horizontal)
    }

    pub fn vbox(id: ContainerId) -> Self {
        Self::container(id, Orientation::Vertical)
    }

    pub fn view_count(&self) -> usize {
        match self {
            BoxNode::View { .. } => 1,
            BoxNode::Container { children, .. } => children.iter().map(Self::view_count).sum(),
        }
    }

    pub fn container_count(&self) -> usize {
        match self {
            BoxNode::View { .. } => 0,
            BoxNode::Container { children, .. } => {
                1 + children.iter().map(Self::container_count).sum::<usize>()
            }
        }
    }
}
