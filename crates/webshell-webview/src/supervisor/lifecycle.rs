use std::time::Instant;

use tracing::{debug, info, warn};
use webshell_common::Notification;

use crate::events::{EventOutcome, Incident};
use crate::settings::CachePolicy;
use crate::state::{StateBundle, SAVED_STATE_KEY};

use super::{Deferred, Phase, Supervisor};

const TIMEOUT_MESSAGE: &str = "Loading is taking longer than expected. Retrying...";
const LOAD_ERROR_MESSAGE: &str = "Error loading page. Please check your connection.";

impl Supervisor {
    /// Configure the renderer and issue the first load, or restore a saved
    /// session from `saved` instead of touching the network.
    pub fn start(&mut self, saved: Option<&StateBundle>) {
        if self.destroyed || self.started {
            warn!(phase = %self.phase, "start ignored: already started or destroyed");
            return;
        }
        self.started = true;
        self.configure_renderer();

        self.host.renderer.set_visible(false);
        self.host.ui.set_progress_visible(true);

        let restored = match saved.and_then(StateBundle::renderer_state) {
            Some(state) => match self.host.renderer.restore_state(state) {
                Ok(()) => {
                    info!(bytes = state.0.len(), "renderer state restored");
                    true
                }
                Err(e) => {
                    warn!(error = %e, "restoring renderer state failed, loading target");
                    false
                }
            },
            None => false,
        };
        if !restored {
            info!(url = %self.target_url, "initial load");
            self.host.renderer.load_url(&self.target_url);
        }
        self.begin_load();
    }

    fn configure_renderer(&mut self) {
        self.host.renderer.apply_settings(&self.settings);
        self.host
            .cookies
            .set_accept_cookies(self.settings.accept_cookies);
        self.host
            .cookies
            .set_accept_third_party_cookies(self.settings.accept_third_party_cookies);
        if self.clear_on_startup {
            self.host.renderer.clear_cache();
            self.host.renderer.clear_history();
        }
        debug!(user_agent = %self.settings.user_agent, "renderer configured");
    }

    /// Enter Loading with a fresh page-load timeout.
    pub(super) fn begin_load(&mut self) {
        self.phase = Phase::Loading;
        self.load_started_at = Some(Instant::now());
        self.arm(Deferred::PageTimeout, self.timings.page_load_timeout);
    }

    pub(super) fn page_started(&mut self, url: &str) -> EventOutcome {
        debug!(url = %url, initial = self.is_initial_load, "page started");
        if self.is_initial_load {
            self.host.renderer.set_visible(false);
            self.host.ui.set_progress_visible(true);
        }
        self.begin_load();
        EventOutcome::Done
    }

    pub(super) fn page_commit_visible(&mut self, url: &str) -> EventOutcome {
        debug!(url = %url, "page commit visible");
        self.host.renderer.set_visible(true);
        EventOutcome::Done
    }

    pub(super) fn page_finished(&mut self, url: &str) -> EventOutcome {
        self.disarm(Deferred::PageTimeout);
        self.redirect_count = 0;
        self.phase = Phase::Visible;

        let elapsed_ms = self
            .load_started_at
            .take()
            .map(|t| t.elapsed().as_millis() as u64);
        info!(url = %url, elapsed_ms, "page load finished");

        if self.is_initial_load {
            self.is_initial_load = false;
            self.arm(Deferred::Reveal, self.timings.reveal_delay_initial);
        } else {
            self.reveal();
        }

        if let Some(script) = self.visibility_fix.script() {
            if let Err(e) = self.host.renderer.evaluate_script(&script) {
                warn!(error = %e, "visibility fix injection failed");
            }
        }
        EventOutcome::Done
    }

    pub(super) fn reveal(&mut self) {
        self.host.ui.set_progress_visible(false);
        self.host.renderer.set_visible(true);
    }

    pub(super) fn timeout_expired(&mut self) {
        if self.phase != Phase::Loading {
            debug!(phase = %self.phase, "page timeout after load settled, ignoring");
            return;
        }
        self.phase = Phase::TimedOut;
        self.record(Incident::SlowLoad);
        warn!(
            incident = %Incident::SlowLoad,
            timeout_ms = self.timings.page_load_timeout.as_millis() as u64,
            "page load timed out, forcing uncached reload"
        );

        self.host.ui.set_progress_visible(false);
        self.host.renderer.stop_loading();
        self.host.ui.notify(Notification::warning(TIMEOUT_MESSAGE));
        self.clear_cache_and_cookies();
        self.host.renderer.set_cache_policy(CachePolicy::NoCache);
        self.navigate_to_target();
        self.arm(Deferred::CacheRestore, self.timings.cache_restore_delay);
    }

    pub(super) fn restore_cache_policy(&mut self) {
        debug!("restoring cache-else-network policy");
        self.host
            .renderer
            .set_cache_policy(CachePolicy::CacheElseNetwork);
    }

    pub(super) fn main_frame_error(&mut self, url: &str, description: &str) -> EventOutcome {
        self.disarm(Deferred::PageTimeout);
        self.phase = Phase::Failed;
        self.record(Incident::TransientNetwork);
        warn!(
            incident = %Incident::TransientNetwork,
            url = %url,
            description = %description,
            initial = self.is_initial_load,
            "main frame load failed"
        );
        self.host.ui.set_progress_visible(false);

        if self.is_initial_load {
            self.is_initial_load = false;
            self.clear_cache_and_cookies();
            self.arm(Deferred::RetryNavigation, self.timings.error_retry_delay);
        } else {
            self.host.ui.notify(Notification::error(LOAD_ERROR_MESSAGE));
        }
        EventOutcome::Done
    }

    pub(super) fn subresource_error(&mut self, url: &str, description: &str) -> EventOutcome {
        warn!(
            incident = %Incident::SubresourceError,
            url = %url,
            description = %description,
            "subresource load failed"
        );
        EventOutcome::Done
    }

    pub(super) fn retry_navigation(&mut self) {
        info!(url = %self.target_url, "retrying target");
        self.navigate_to_target();
    }

    /// Forced reload of the target. Resets the redirect counter.
    fn navigate_to_target(&mut self) {
        self.redirect_count = 0;
        self.host.renderer.load_url(&self.target_url);
    }

    pub fn on_pause(&mut self) {
        if self.destroyed || self.paused {
            return;
        }
        self.paused = true;
        self.host.renderer.pause();
        debug!("renderer paused");
    }

    pub fn on_resume(&mut self) {
        if self.destroyed || !self.paused {
            return;
        }
        self.paused = false;
        self.host.renderer.resume();
        debug!("renderer resumed");
    }

    /// Persist renderer state into the platform bundle.
    pub fn on_save_state(&mut self, out: &mut StateBundle) {
        if self.destroyed {
            return;
        }
        match self.host.renderer.save_state() {
            Some(state) => {
                debug!(bytes = state.0.len(), "renderer state saved");
                out.insert(SAVED_STATE_KEY, state);
            }
            None => debug!("renderer had no state to save"),
        }
    }

    /// Cancel all timers, release the pending file choice, tear down the
    /// renderer. Idempotent.
    pub fn on_destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.timers.cancel_all(self.host.scheduler.as_mut());
        if let Some(callback) = self.pending_file_choice.take() {
            callback.cancel();
        }
        self.host.renderer.destroy();
        self.phase = Phase::Idle;
        info!("supervisor destroyed");
    }
}
