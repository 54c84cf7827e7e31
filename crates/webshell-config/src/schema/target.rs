//! Remote entry point.

use serde::{Deserialize, Serialize};

use crate::defaults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// URL loaded on cold start and after every forced reload.
    pub url: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: defaults::TARGET_URL.to_string(),
        }
    }
}
