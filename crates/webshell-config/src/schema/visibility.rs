//! Post-load stylesheet that forces the remote app visible.

use serde::{Deserialize, Serialize};

use crate::defaults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityFixConfig {
    pub enabled: bool,
    /// CSS selectors forced to `opacity: 1; display: block`.
    pub containers: Vec<String>,
    /// Body background applied with the fix.
    pub background: String,
}

impl Default for VisibilityFixConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            containers: defaults::VISIBILITY_FIX_CONTAINERS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            background: defaults::VISIBILITY_FIX_BACKGROUND.to_string(),
        }
    }
}
