//! Renderer configuration contract and external tab theme.

use serde::{Deserialize, Serialize};
use tracing::warn;
use webshell_common::Color;
use webshell_config::schema::{ExternalLinkConfig, RendererConfig};

/// How the renderer consults its HTTP cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CachePolicy {
    /// Use a cached copy even if stale; fetch only on miss.
    CacheElseNetwork,
    /// Always go to the network.
    NoCache,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MixedContentMode {
    AlwaysAllow,
    Compatibility,
    NeverAllow,
}

/// Every renderer setting the shell depends on.
///
/// Flags marked "where supported" may be ignored by hosts whose renderer
/// lacks them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererSettings {
    pub javascript_enabled: bool,
    pub dom_storage_enabled: bool,
    pub database_enabled: bool,
    pub use_wide_viewport: bool,
    pub load_with_overview_mode: bool,
    pub allow_file_access: bool,
    pub allow_content_access: bool,
    pub support_multiple_windows: bool,
    pub javascript_can_open_windows: bool,
    pub mixed_content: MixedContentMode,
    pub media_playback_requires_gesture: bool,
    pub cache_policy: CachePolicy,
    /// Where supported.
    pub safe_browsing_enabled: bool,
    /// Where supported.
    pub offscreen_pre_raster: bool,
    pub hardware_layer: bool,
    pub overscroll_enabled: bool,
    pub horizontal_scrollbar: bool,
    pub accept_cookies: bool,
    pub accept_third_party_cookies: bool,
    pub user_agent: String,
}

impl RendererSettings {
    /// The shell's fixed profile, with the user agent built for `os_release`.
    pub fn for_shell(config: &RendererConfig, os_release: &str) -> Self {
        Self {
            javascript_enabled: true,
            dom_storage_enabled: true,
            database_enabled: true,
            use_wide_viewport: true,
            load_with_overview_mode: true,
            allow_file_access: true,
            allow_content_access: true,
            support_multiple_windows: true,
            javascript_can_open_windows: true,
            mixed_content: MixedContentMode::AlwaysAllow,
            media_playback_requires_gesture: false,
            cache_policy: CachePolicy::CacheElseNetwork,
            safe_browsing_enabled: false,
            offscreen_pre_raster: true,
            hardware_layer: true,
            overscroll_enabled: false,
            horizontal_scrollbar: false,
            accept_cookies: true,
            accept_third_party_cookies: true,
            user_agent: config.user_agent_for(os_release),
        }
    }
}

/// Appearance of the in-app browser tab used for off-domain links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabTheme {
    pub toolbar_color: Color,
    pub show_title: bool,
    pub share_state: bool,
}

impl TabTheme {
    pub fn from_config(config: &ExternalLinkConfig) -> Self {
        let toolbar_color = Color::from_hex(&config.toolbar_color).unwrap_or_else(|| {
            warn!(color = %config.toolbar_color, "invalid toolbar colour, using default");
            Self::default().toolbar_color
        });
        Self {
            toolbar_color,
            show_title: config.show_title,
            share_state: config.share_state,
        }
    }
}

impl Default for TabTheme {
    fn default() -> Self {
        Self {
            toolbar_color: Color::from_rgba(0x21, 0x96, 0xf3, 255),
            show_title: true,
            share_state: true,
        }
    }
}
