//! Layout calculation: recursive tree-to-rect computation.

use breach_common::{Orientation, Rect, ViewId};

use crate::tree::BoxNode;

use super::LayoutEngine;

impl LayoutEngine {
    /// Bounds for every view in `root`, in packing order.
    pub fn compute(&self, root: &BoxNode, bounds: Rect) -> Vec<(ViewId, Rect)> {
        let mut results = Vec::new();
        self.layout_node(root, bounds, &mut results);
        results
    }

    fn layout_node(&self, node: &BoxNode, bounds: Rect, out: &mut Vec<(ViewId, Rect)>) {
        match node {
            BoxNode::View { view_id } => {
                out.push((*view_id, bounds));
            }
            BoxNode::Container {
                orientation,
                children,
                ..
            } => {
                if children.is_empty() {
                    return;
                }
                let n = children.len() as f64;
                let spacing = self.spacing as f64;
                let extent = match orientation {
                    Orientation::Horizontal => bounds.width,
                    Orientation::Vertical => bounds.height,
                };
                let share = ((extent - spacing * (n - 1.0)).max(0.0)) / n;

                for (i, child) in children.iter().enumerate() {
                    let offset = i as f64 * (share + spacing);
                    let rect = match orientation {
                        Orientation::Horizontal => Rect {
                            x: bounds.x + offset,
                            y: bounds.y,
                            width: share,
                            height: bounds.height,
                        },
                        Orientation::Vertical => Rect {
                            x: bounds.x,
                            y: bounds.y + offset,
                            width: bounds.width,
                            height: share,
                        },
                    };
                    self.layout_node(child, rect, out);
                }
            }
        }
    }
}
