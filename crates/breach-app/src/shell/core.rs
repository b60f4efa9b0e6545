//! Shell struct definition and constructor.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use breach_common::{Rect, ShellError, ViewId};
use breach_layout::{BoxNode, LayoutEngine};
use breach_webview::ViewHandler;

use super::backend::ShellBackend;
use super::views::window_tree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing initialized yet.
    Created,
    /// Launch is not a worker subprocess.
    Probed,
    EngineReady,
    ToolkitReady,
    /// Window, containers and views exist and are visible.
    Built,
    /// Building the window failed part way; only shutdown remains.
    Failed,
    /// Quit requested; the loop is winding down.
    Quitting,
    ShutDown,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Created => "created",
            Phase::Probed => "probed",
            Phase::EngineReady => "engine-ready",
            Phase::ToolkitReady => "toolkit-ready",
            Phase::Built => "built",
            Phase::Failed => "failed",
            Phase::Quitting => "quitting",
            Phase::ShutDown => "shut down",
        }
    }

    /// Whether the engine has been initialized and not yet shut down.
    pub(super) fn engine_live(self) -> bool {
        matches!(
            self,
            Phase::EngineReady
                | Phase::ToolkitReady
                | Phase::Built
                | Phase::Failed
                | Phase::Quitting
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct Shell<B: ShellBackend> {
    pub(super) backend: B,
    pub(super) phase: Phase,
    /// Shared by every browser view; outlives all of them.
    pub(super) handler: Arc<ViewHandler>,
    pub(super) tree: BoxNode,
    pub(super) layout: LayoutEngine,
    /// Window client area in logical pixels.
    pub(super) client_area: Rect,
    /// Bounds last applied to each view.
    pub(super) bounds: BTreeMap<ViewId, Rect>,
}

impl<B: ShellBackend> Shell<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            phase: Phase::Created,
            handler: Arc::new(ViewHandler::new()),
            tree: window_tree(),
            layout: LayoutEngine::default(),
            client_area: Rect::from_size(0.0, 0.0),
            bounds: BTreeMap::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn handler(&self) -> &Arc<ViewHandler> {
        &self.handler
    }

    pub(super) fn expect_phase(
        &self,
        expected: Phase,
        operation: &'static str,
    ) -> Result<(), ShellError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(ShellError::InvalidPhase {
                operation,
                phase: self.phase.name(),
            })
        }
    }
}
