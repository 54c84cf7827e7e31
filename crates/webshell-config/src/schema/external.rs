//! Themed in-app browser tab used for off-domain links.

use serde::{Deserialize, Serialize};

use crate::defaults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalLinkConfig {
    /// Hex colour for the tab toolbar.
    pub toolbar_color: String,
    pub show_title: bool,
    /// Show the share action in the tab menu.
    pub share_state: bool,
}

impl Default for ExternalLinkConfig {
    fn default() -> Self {
        Self {
            toolbar_color: defaults::TOOLBAR_COLOR.to_string(),
            show_title: true,
            share_state: true,
        }
    }
}
