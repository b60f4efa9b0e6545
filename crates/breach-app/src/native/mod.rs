//! The production backend: wry browser views inside a winit window.

mod bounds;

use std::sync::Arc;

use breach_common::{Rect, ShellError, ViewId};
use breach_config::WebViewSettings;
use breach_layout::BoxNode;
use breach_webview::{process, ViewHandler, WebViewConfig, WebViewManager, WebViewRegistry};
use tracing::{debug, info, warn};
use winit::dpi::LogicalSize;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::Window;

use crate::shell::views::WindowSpec;
use crate::shell::{Container, ShellBackend, SUBPROCESS_EXIT_CODE};

use self::bounds::to_wry_rect;

pub struct NativeBackend {
    /// Created by toolkit init, handed to `run_app` by `take_event_loop`.
    event_loop: Option<EventLoop<()>>,
    window: Option<Window>,
    views: WebViewRegistry,
}

impl NativeBackend {
    pub fn new() -> Self {
        Self {
            event_loop: None,
            window: None,
            views: WebViewRegistry::new(WebViewManager::default()),
        }
    }

    /// Replace the settings new views are built with. Views that already
    /// exist keep theirs.
    pub fn apply_settings(&mut self, settings: &WebViewSettings) {
        let config = WebViewConfig {
            devtools: settings.devtools,
            user_agent: settings.user_agent.clone(),
            clipboard: settings.clipboard,
            autoplay: settings.autoplay,
        };
        if self.views.count() > 0 {
            warn!("webview settings changed after views were created");
        }
        self.views.set_manager(WebViewManager::new(config));
    }

    pub fn take_event_loop(&mut self) -> Option<EventLoop<()>> {
        self.event_loop.take()
    }

    /// Current client area in logical pixels.
    pub fn client_area(&self) -> Option<Rect> {
        let window = self.window.as_ref()?;
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        Some(Rect::from_size(size.width, size.height))
    }

    /// Run pending toolkit work. WebKitGTK dispatches through the GTK main
    /// context, which winit does not drive.
    pub fn pump_toolkit(&self) {
        #[cfg(target_os = "linux")]
        while gtk::events_pending() {
            gtk::main_iteration_do(false);
        }
    }

    fn window(&self) -> Result<&Window, ShellError> {
        self.window
            .as_ref()
            .ok_or_else(|| ShellError::WindowCreation("window does not exist".into()))
    }
}

impl Default for NativeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellBackend for NativeBackend {
    type Cx = ActiveEventLoop;

    fn execute_subprocess(&mut self, args: &[String]) -> Option<i32> {
        let kind = process::probe(args)?;
        info!(kind = %kind, "running as engine subprocess");
        Some(SUBPROCESS_EXIT_CODE)
    }

    fn initialize_engine(&mut self, _args: &[String]) -> Result<(), ShellError> {
        let version = wry::webview_version().map_err(|e| ShellError::EngineInit(e.to_string()))?;
        info!(version = %version, "browser engine available");
        Ok(())
    }

    fn initialize_toolkit(&mut self) -> Result<(), ShellError> {
        #[cfg(target_os = "linux")]
        gtk::init().map_err(|e| ShellError::ToolkitInit(e.to_string()))?;

        let event_loop = EventLoop::new().map_err(|e| ShellError::ToolkitInit(e.to_string()))?;
        self.event_loop = Some(event_loop);
        Ok(())
    }

    fn create_window(
        &mut self,
        cx: &ActiveEventLoop,
        spec: &WindowSpec,
        tree: &BoxNode,
    ) -> Result<Rect, ShellError> {
        let attrs = Window::default_attributes()
            .with_title(spec.title)
            .with_inner_size(LogicalSize::new(spec.width, spec.height))
            .with_visible(false);

        let window = cx
            .create_window(attrs)
            .map_err(|e| ShellError::WindowCreation(e.to_string()))?;
        self.window = Some(window);
        debug!(
            containers = tree.container_count(),
            views = tree.view_count(),
            "window tree attached"
        );

        self.client_area()
            .ok_or_else(|| ShellError::WindowCreation("window has no client area".into()))
    }

    fn create_browser_sync(
        &mut self,
        _cx: &ActiveEventLoop,
        view: ViewId,
        url: &str,
        container: Container,
        bounds: Rect,
        handler: &Arc<ViewHandler>,
    ) -> Result<(), ShellError> {
        let window = self.window.as_ref().ok_or_else(|| ShellError::ViewCreation {
            view,
            url: url.to_string(),
            reason: "window does not exist".into(),
        })?;
        debug!(
            %view,
            container = %container.id,
            orientation = %container.orientation,
            "creating browser view"
        );

        self.views
            .create(view, window, to_wry_rect(&bounds), url, handler)
            .map_err(|e| ShellError::ViewCreation {
                view,
                url: url.to_string(),
                reason: e.to_string(),
            })
    }

    fn set_view_bounds(&mut self, view: ViewId, bounds: Rect) {
        let Some(handle) = self.views.get(view) else {
            return;
        };
        if let Err(e) = handle.set_bounds(to_wry_rect(&bounds)) {
            warn!(%view, error = %e, "failed to move browser view");
        }
    }

    fn show_all(&mut self, _cx: &ActiveEventLoop) -> Result<(), ShellError> {
        let window = self.window()?;
        for handle in self.views.handles() {
            debug!(view_id = %handle.view_id(), url = handle.url(), "showing view");
            if let Err(e) = handle.set_visible(true) {
                warn!(view_id = %handle.view_id(), error = %e, "failed to show view");
            }
        }
        window.set_visible(true);
        Ok(())
    }

    fn quit_message_loop(&mut self, cx: &ActiveEventLoop) {
        cx.exit();
    }

    fn destroy_view(&mut self, view: ViewId) {
        self.views.destroy(view);
    }

    fn shutdown_engine(&mut self) {
        if self.views.count() > 0 {
            warn!(count = self.views.count(), "views still live at engine shutdown");
            self.views.destroy_all();
        }
        self.window = None;
    }
}
