//! Window construction, browser view creation, and relayout.

use breach_common::{Rect, ShellError, ViewId};
use breach_layout::BoxNode;
use tracing::{debug, info};

use super::backend::{Container, ShellBackend};
use super::core::{Phase, Shell};
use super::views::{ViewSpec, VIEWS, WINDOW};

impl<B: ShellBackend> Shell<B> {
    /// Build the window, create the browser views in order, and show it.
    ///
    /// Only the first call after launch does anything; the toolkit may
    /// report itself resumed more than once. A failed build is final: the
    /// partial window is left for `shutdown` and never built again.
    pub fn build(&mut self, cx: &B::Cx) -> Result<(), ShellError> {
        if matches!(
            self.phase,
            Phase::Built | Phase::Failed | Phase::Quitting | Phase::ShutDown
        ) {
            return Ok(());
        }
        self.expect_phase(Phase::ToolkitReady, "build")?;

        if let Err(e) = self.build_window(cx) {
            self.phase = Phase::Failed;
            return Err(e);
        }
        self.phase = Phase::Built;
        info!(views = self.handler.live_count(), "window shown");
        Ok(())
    }

    fn build_window(&mut self, cx: &B::Cx) -> Result<(), ShellError> {
        self.client_area = self.backend.create_window(cx, &WINDOW, &self.tree)?;
        debug!(
            width = self.client_area.width,
            height = self.client_area.height,
            "window created"
        );

        for spec in VIEWS {
            self.create_view(cx, spec)?;
        }

        self.backend.show_all(cx)
    }

    fn create_view(&mut self, cx: &B::Cx, spec: ViewSpec) -> Result<(), ShellError> {
        let orientation = self.tree.orientation_of(spec.container).ok_or_else(|| {
            ShellError::WindowCreation(format!("{} is not part of the window", spec.container))
        })?;

        // Packing a new child shrinks its siblings; move them first.
        self.tree.pack(spec.container, BoxNode::view(spec.id));
        let bounds = self.apply_layout(Some(spec.id));
        let rect = bounds.unwrap_or(self.client_area);

        let container = Container {
            id: spec.container,
            orientation,
        };
        if let Err(e) = self.backend.create_browser_sync(
            cx,
            spec.id,
            spec.url,
            container,
            rect,
            &self.handler,
        ) {
            self.tree.remove_view(spec.id);
            return Err(e);
        }
        self.bounds.insert(spec.id, rect);

        info!(
            view_id = %spec.id,
            url = spec.url,
            container = %orientation,
            "browser view created"
        );
        Ok(())
    }

    /// Recompute view bounds for a new client area.
    pub fn relayout(&mut self, client_area: Rect) {
        if self.phase != Phase::Built || client_area.is_empty() {
            return;
        }
        self.client_area = client_area;
        self.apply_layout(None);
    }

    /// Push changed bounds to every existing view except `pending`, and
    /// return the bounds computed for `pending`.
    fn apply_layout(&mut self, pending: Option<ViewId>) -> Option<Rect> {
        let mut pending_rect = None;
        for (view_id, rect) in self.layout.compute(&self.tree, self.client_area) {
            if Some(view_id) == pending {
                pending_rect = Some(rect);
                continue;
            }
            if self.bounds.get(&view_id) != Some(&rect) {
                self.backend.set_view_bounds(view_id, rect);
                self.bounds.insert(view_id, rect);
            }
        }
        pending_rect
    }
}
