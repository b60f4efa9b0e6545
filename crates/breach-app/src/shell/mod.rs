//! The shell: brings the browser engine and the window toolkit up in a
//! fixed order, builds the window with its three browser views, and tears
//! everything down once the message loop returns.
//!
//! Order: subprocess probe -> engine init -> toolkit init -> window and
//! containers -> views -> show -> message loop -> engine shutdown.

mod backend;
mod build;
mod core;
mod events;
mod launch;
mod shutdown;
pub mod views;


pub use self::core::{Phase, Shell};
pub use backend::{Container, ShellBackend};
pub use launch::SUBPROCESS_EXIT_CODE;
