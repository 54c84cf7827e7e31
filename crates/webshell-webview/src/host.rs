//! Capabilities the host platform injects into the supervisor.
//!
//! Everything here is called from the UI thread only, so none of the
//! traits require `Send`.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use webshell_common::{HostError, Notification};

use crate::settings::{CachePolicy, RendererSettings, TabTheme};
use crate::state::SavedState;

/// Handle to one scheduled deferred callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerToken(pub u64);

impl fmt::Display for TimerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// The embedded HTML rendering surface.
pub trait Renderer {
    fn apply_settings(&mut self, settings: &RendererSettings);
    fn set_cache_policy(&mut self, policy: CachePolicy);

    fn load_url(&mut self, url: &str);
    fn stop_loading(&mut self);
    /// Reload the current history entry.
    fn reload(&mut self);

    /// Drop the HTTP cache, including on-disk files.
    fn clear_cache(&mut self);
    fn clear_history(&mut self);

    fn can_go_back(&self) -> bool;
    fn go_back(&mut self);

    /// Serialize back/forward list and page state. `None` if nothing to save.
    fn save_state(&mut self) -> Option<SavedState>;
    fn restore_state(&mut self, state: &SavedState) -> Result<(), HostError>;

    /// Suspend in-page timers and media.
    fn pause(&mut self);
    fn resume(&mut self);

    fn evaluate_script(&mut self, script: &str) -> Result<(), HostError>;
    fn set_visible(&mut self, visible: bool);

    /// Tear down the surface. No other method is called afterwards.
    fn destroy(&mut self);
}

/// Process-wide cookie jar.
pub trait CookieStore {
    fn set_accept_cookies(&mut self, accept: bool);
    fn set_accept_third_party_cookies(&mut self, accept: bool);
    fn remove_all_cookies(&mut self);
}

/// Opens URLs outside the renderer.
pub trait ExternalLauncher {
    /// Themed in-app browser tab.
    fn launch_in_app_tab(&mut self, url: &str, theme: &TabTheme) -> Result<(), HostError>;
    /// Generic "view this URL" handoff to whatever app claims it.
    fn launch_view_intent(&mut self, url: &str) -> Result<(), HostError>;
}

/// Launches the platform document picker. The outcome comes back later as
/// [`crate::ShellEvent::FileChooserResult`].
pub trait FilePicker {
    fn open_document(&mut self, mime_mask: &str) -> Result<(), HostError>;
}

/// Main-thread timer. Fired tokens are fed back as
/// [`crate::ShellEvent::TimerFired`].
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration) -> TimerToken;
    /// Cancelling an unknown or already-fired token is a no-op.
    fn cancel(&mut self, token: TimerToken);
}

/// Native chrome around the renderer.
pub trait ShellUi {
    fn set_progress_visible(&mut self, visible: bool);
    fn notify(&mut self, notification: Notification);
}

/// Everything the supervisor drives.
pub struct HostCapabilities {
    pub renderer: Box<dyn Renderer>,
    pub cookies: Box<dyn CookieStore>,
    pub launcher: Box<dyn ExternalLauncher>,
    pub picker: Box<dyn FilePicker>,
    pub scheduler: Box<dyn Scheduler>,
    pub ui: Box<dyn ShellUi>,
}

impl fmt::Debug for HostCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostCapabilities").finish_non_exhaustive()
    }
}
