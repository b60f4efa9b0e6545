use std::path::PathBuf;

use crate::types::ViewId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures surfaced by the browser engine or the window toolkit while the
/// shell brings the window up, runs it, and tears it down.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("browser engine initialization failed: {0}")]
    EngineInit(String),

    #[error("window toolkit initialization failed: {0}")]
    ToolkitInit(String),

    #[error("window creation failed: {0}")]
    WindowCreation(String),

    #[error("failed to create {view} for {url}: {reason}")]
    ViewCreation {
        view: ViewId,
        url: String,
        reason: String,
    },

    #[error("event loop error: {0}")]
    EventLoop(String),

    #[error("{operation} is not valid while the shell is {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("layout.spacing = 65".into());
        assert_eq!(err.to_string(), "config validation error: layout.spacing = 65");
    }

    #[test]
    fn shell_error_display() {
        let err = ShellError::EngineInit("no webkit".into());
        assert_eq!(
            err.to_string(),
            "browser engine initialization failed: no webkit"
        );

        let err = ShellError::ViewCreation {
            view: ViewId(2),
            url: "http://www.github.com".into(),
            reason: "child window unsupported".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to create view-2 for http://www.github.com: child window unsupported"
        );

        let err = ShellError::InvalidPhase {
            operation: "build",
            phase: "shut down",
        };
        assert_eq!(
            err.to_string(),
            "build is not valid while the shell is shut down"
        );
    }
}
