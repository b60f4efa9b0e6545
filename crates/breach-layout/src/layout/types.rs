//! Layout engine configuration.

/// Computes view bounds from a container tree.
///
/// Every child of a container gets an equal share of the container's extent
/// along its axis and the full extent across it, like a GTK box whose
/// children are all packed with expand and fill.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    /// Gap in pixels between siblings inside a container.
    pub spacing: u32,
}
