pub mod errors;
pub mod types;

pub use errors::{ConfigError, ShellError};
pub use types::{Orientation, Rect, ViewId};
