//! Renderer identity and startup hygiene.

use serde::{Deserialize, Serialize};

use crate::defaults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// User-agent template; `{release}` expands to the host OS release.
    pub user_agent: String,
    /// Clear cache and history once before the first load.
    pub clear_on_startup: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::USER_AGENT_TEMPLATE.to_string(),
            clear_on_startup: true,
        }
    }
}

impl RendererConfig {
    pub fn user_agent_for(&self, release: &str) -> String {
        self.user_agent.replace("{release}", release)
    }
}
