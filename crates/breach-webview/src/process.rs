//! Worker-subprocess detection.
//!
//! Multi-process engines relaunch the host binary for their render, GPU and
//! utility processes and mark those launches with a `--type=<kind>` switch.
//! Such a launch must never touch the window toolkit, so the shell checks
//! for it before anything else.

use std::fmt;

/// Switch that marks an engine worker launch.
pub const PROCESS_TYPE_SWITCH: &str = "--type=";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessType(String);

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inspect raw process arguments (program name first) for a worker launch.
///
/// Scanning stops at a bare `--`; anything after it belongs to the page,
/// not the engine.
pub fn probe<S: AsRef<str>>(args: &[S]) -> Option<ProcessType> {
    args.iter()
        .skip(1)
        .map(AsRef::as_ref)
        .take_while(|arg| *arg != "--")
        .find_map(|arg| arg.strip_prefix(PROCESS_TYPE_SWITCH))
        .filter(|kind| !kind.is_empty())
        .map(|kind| ProcessType(kind.to_string()))
}
