//! Process-level startup: subprocess probe, engine and toolkit init.

use breach_common::ShellError;
use breach_config::BreachConfig;
use breach_layout::LayoutEngine;

use super::backend::ShellBackend;
use super::core::{Phase, Shell};

/// Exit status of a launch that turned out to be an engine worker.
pub const SUBPROCESS_EXIT_CODE: i32 = -1;

impl<B: ShellBackend> Shell<B> {
    /// First action of the process. Returns the status to exit with when the
    /// engine recognizes `args` as a subprocess launch; the shell is then
    /// finished and nothing else may be touched.
    pub fn probe(&mut self, args: &[String]) -> Option<i32> {
        if self.phase != Phase::Created {
            return None;
        }
        match self.backend.execute_subprocess(args) {
            Some(code) => {
                self.phase = Phase::ShutDown;
                Some(code)
            }
            None => {
                self.phase = Phase::Probed;
                None
            }
        }
    }

    /// Initialize the browser engine, then the window toolkit.
    pub fn launch(&mut self, args: &[String], config: &BreachConfig) -> Result<(), ShellError> {
        self.expect_phase(Phase::Probed, "launch")?;

        self.layout = LayoutEngine {
            spacing: config.layout.spacing,
        };

        self.backend.initialize_engine(args)?;
        self.phase = Phase::EngineReady;
        tracing::debug!("browser engine initialized");

        self.backend.initialize_toolkit()?;
        self.phase = Phase::ToolkitReady;
        tracing::debug!("window toolkit initialized");
        Ok(())
    }
}
