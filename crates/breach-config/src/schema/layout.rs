use serde::{Deserialize, Serialize};

/// Box container layout settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pixels between sibling views inside a container (valid range: 0-64).
    pub spacing: u32,
}
