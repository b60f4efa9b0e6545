//! Close handling and engine teardown.

use tracing::{debug, info};

use super::backend::ShellBackend;
use super::core::{Phase, Shell};

impl<B: ShellBackend> Shell<B> {
    /// Window close signal. The first call asks the message loop to quit;
    /// there is no confirmation and no veto.
    pub fn request_close(&mut self, cx: &B::Cx) {
        if self.phase != Phase::Built {
            debug!(phase = %self.phase, "close ignored");
            return;
        }
        info!("window close requested");
        self.phase = Phase::Quitting;
        self.backend.quit_message_loop(cx);
    }

    /// Destroy the views, then shut the engine down. Runs once; later calls
    /// do nothing.
    pub fn shutdown(&mut self) {
        if !self.phase.engine_live() {
            return;
        }
        info!("shutting down");

        // Views go before the engine, newest first.
        let mut views = self.handler.live_views();
        views.reverse();
        for view_id in views {
            self.backend.destroy_view(view_id);
            self.tree.remove_view(view_id);
            self.bounds.remove(&view_id);
        }

        self.backend.shutdown_engine();
        self.phase = Phase::ShutDown;
        info!("browser engine shut down");
    }
}
