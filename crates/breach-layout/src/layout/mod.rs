mod calculation;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{BoxNode, ContainerId};
    use breach_common::{Rect, ViewId};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    fn shell_tree() -> BoxNode {
        let mut root = BoxNode::vbox(ContainerId(0));
        root.pack(ContainerId(0), BoxNode::hbox(ContainerId(1)));
        root.pack(ContainerId(1), BoxNode::view(ViewId(1)));
        root.pack(ContainerId(1), BoxNode::view(ViewId(2)));
        root.pack(ContainerId(0), BoxNode::view(ViewId(3)));
        root
    }

    #[test]
    fn single_view_fills_bounds() {
        let engine = LayoutEngine::default();
        let bounds = Rect::from_size(800.0, 600.0);
        let result = engine.compute(&BoxNode::view(ViewId(1)), bounds);
        assert_eq!(result, vec![(ViewId(1), bounds)]);
    }

    #[test]
    fn empty_container_yields_nothing() {
        let engine = LayoutEngine::default();
        let result = engine.compute(&BoxNode::vbox(ContainerId(0)), Rect::from_size(800.0, 600.0));
        assert!(result.is_empty());
    }

    #[test]
    fn horizontal_box_divides_width() {
        let engine = LayoutEngine::default();
        let mut row = BoxNode::hbox(ContainerId(0));
        row.pack(ContainerId(0), BoxNode::view(ViewId(1)));
        row.pack(ContainerId(0), BoxNode::view(ViewId(2)));
        let result = engine.compute(&row, Rect::from_size(800.0, 600.0));
        assert_eq!(result.len(), 2);
        assert!(approx(result[0].1.width, 400.0));
        assert!(approx(result[1].1.x, 400.0));
        assert!(approx(result[1].1.height, 600.0));
    }

    #[test]
    fn shell_tree_layout() {
        let engine = LayoutEngine::default();
        let result = engine.compute(&shell_tree(), Rect::from_size(400.0, 400.0));
        assert_eq!(result.len(), 3);

        let (a, ra) = result[0];
        let (b, rb) = result[1];
        let (c, rc) = result[2];
        assert_eq!((a, b, c), (ViewId(1), ViewId(2), ViewId(3)));

        // Row takes the top half, split side by side.
        assert_eq!(ra, Rect { x: 0.0, y: 0.0, width: 200.0, height: 200.0 });
        assert_eq!(rb, Rect { x: 200.0, y: 0.0, width: 200.0, height: 200.0 });
        // Stacked view takes the bottom half, full width.
        assert_eq!(rc, Rect { x: 0.0, y: 200.0, width: 400.0, height: 200.0 });
    }

    #[test]
    fn spacing_reduces_available_space() {
        let engine = LayoutEngine { spacing: 10 };
        let result = engine.compute(&shell_tree(), Rect::from_size(410.0, 410.0));
        let (_, ra) = result[0];
        let (_, rb) = result[1];
        let (_, rc) = result[2];
        assert!(approx(ra.width + rb.width, 400.0));
        assert!(approx(rb.x, 210.0));
        assert!(approx(rc.y, 210.0));
        assert!(approx(rc.height, 200.0));
    }

    #[test]
    fn spacing_larger_than_extent_clamps_to_zero() {
        let engine = LayoutEngine { spacing: 64 };
        let result = engine.compute(&shell_tree(), Rect::from_size(20.0, 20.0));
        assert!(result.iter().all(|(_, r)| r.width >= 0.0 && r.height >= 0.0));
        assert!(approx(result[2].1.height, 0.0));
    }

    #[test]
    fn offset_bounds_are_respected() {
        let engine = LayoutEngine::default();
        let bounds = Rect {
            x: 50.0,
            y: 30.0,
            width: 400.0,
            height: 400.0,
        };
        let result = engine.compute(&shell_tree(), bounds);
        assert!(approx(result[0].1.x, 50.0));
        assert!(approx(result[1].1.x, 250.0));
        assert!(approx(result[2].1.y, 230.0));
    }
}
