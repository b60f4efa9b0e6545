mod cli;
mod event_handler;
mod native;
mod shell;

use breach_common::ShellError;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use event_handler::BreachApp;
use native::NativeBackend;
use shell::Shell;

const DEFAULT_LOG_DIRECTIVE: &str = "breach=info";

/// Exit status when startup fails after the subprocess probe.
const FAILURE_EXIT_CODE: i32 = 1;

fn init_logging(log_level: Option<&str>) {
    let directive = log_level
        .unwrap_or(DEFAULT_LOG_DIRECTIVE)
        .parse::<Directive>()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse::<Directive>());

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Bring the engine and toolkit up and run the message loop until it
/// returns.
fn run(
    shell: &mut Shell<NativeBackend>,
    raw: &[String],
    config: &breach_config::BreachConfig,
) -> Result<(), ShellError> {
    shell.launch(raw, config)?;

    let event_loop = shell
        .backend_mut()
        .take_event_loop()
        .ok_or_else(|| ShellError::EventLoop("toolkit produced no event loop".into()))?;

    let mut app = BreachApp::new(shell);
    tracing::info!("Entering event loop");
    let result = event_loop.run_app(&mut app);

    if let Some(e) = app.into_failure() {
        return Err(e);
    }
    result.map_err(|e| ShellError::EventLoop(e.to_string()))
}

fn main() {
    let raw: Vec<String> = std::env::args().collect();

    // Worker launches must not touch logging, config or the toolkit.
    let mut shell = Shell::new(NativeBackend::new());
    if let Some(code) = shell.probe(&raw) {
        std::process::exit(code);
    }

    let args = cli::parse(&raw);
    init_logging(args.log_level.as_deref());

    tracing::info!("Breach v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = breach_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        breach_config::BreachConfig::default()
    });
    shell.backend_mut().apply_settings(&config.webview);

    let code = match run(&mut shell, &raw, &config) {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("Startup failed: {e}");
            FAILURE_EXIT_CODE
        }
    };

    tracing::info!(
        phase = %shell.phase(),
        views = shell.handler().live_count(),
        "Message loop returned"
    );
    shell.shutdown();
    tracing::info!("Shutdown complete");
    std::process::exit(code);
}
