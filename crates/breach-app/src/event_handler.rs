//! `ApplicationHandler` implementation for the winit event loop.

use std::time::{Duration, Instant};

use breach_common::ShellError;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::WindowId;

use crate::native::NativeBackend;
use crate::shell::Shell;

/// How often engine events and the GTK main context are serviced while idle.
const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Drives a launched shell from winit callbacks.
pub struct BreachApp<'a> {
    shell: &'a mut Shell<NativeBackend>,
    /// First build error; ends the loop.
    failure: Option<ShellError>,
}

impl<'a> BreachApp<'a> {
    pub fn new(shell: &'a mut Shell<NativeBackend>) -> Self {
        Self {
            shell,
            failure: None,
        }
    }

    pub fn into_failure(self) -> Option<ShellError> {
        self.failure
    }
}

impl ApplicationHandler for BreachApp<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(e) = self.shell.build(event_loop) {
            tracing::error!("Failed to build window: {e}");
            self.failure = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.shell.request_close(event_loop);
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(area) = self.shell.backend().client_area() {
                        self.shell.relayout(area);
                    }
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.shell.backend().pump_toolkit();
        self.shell.poll_events();
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }
}
