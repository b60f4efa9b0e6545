//! Lookup and mutation on the container tree: pack, remove, find.

use breach_common::{Orientation, ViewId};

use super::{BoxNode, ContainerId};

impl BoxNode {
    /// Append `child` as the last child of the container `target`.
    /// Returns `true` if the container was found.
    pub fn pack(&mut self, target: ContainerId, child: BoxNode) -> bool {
        match self.find_container_mut(target) {
            Some(BoxNode::Container { children, .. }) => {
                children.push(child);
                true
            }
            _ => false,
        }
    }

    /// Remove a view from whichever container holds it. Containers are left
    /// in place even when they become empty.
    pub fn remove_view(&mut self, target: ViewId) -> bool {
        match self {
            BoxNode::View { .. } => false,
            BoxNode::Container { children, .. } => {
                if let Some(idx) = children
                    .iter()
                    .position(|c| matches!(c, BoxNode::View { view_id } if *view_id == target))
                {
                    children.remove(idx);
                    return true;
                }
                children.iter_mut().any(|c| c.remove_view(target))
            }
        }
    }

    pub fn find_container(&self, target: ContainerId) -> Option<&BoxNode> {
        match self {
            BoxNode::View { .. } => None,
            BoxNode::Container { id, children, .. } => {
                if *id == target {
                    return Some(self);
                }
                children.iter().find_map(|c| c.find_container(target))
            }
        }
    }

    fn find_container_mut(&mut self, target: ContainerId) -> Option<&mut BoxNode> {
        if matches!(self, BoxNode::Container { id, .. } if *id == target) {
            return Some(self);
        }
        match self {
            BoxNode::View { .. } => None,
            BoxNode::Container { children, .. } => {
                children.iter_mut().find_map(|c| c.find_container_mut(target))
            }
        }
    }

    /// Orientation of the container `target`, if it exists.
    pub fn orientation_of(&self, target: ContainerId) -> Option<Orientation> {
        match self.find_container(target)? {
            BoxNode::Container { orientation, .. } => Some(*orientation),
            BoxNode::View { .. } => None,
        }
    }

    /// Direct children of the container `target`.
    pub fn children_of(&self, target: ContainerId) -> &[BoxNode] {
        match self.find_container(target) {
            Some(BoxNode::Container { children, .. }) => children,
            _ => &[],
        }
    }
}
