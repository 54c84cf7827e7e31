use tracing::{debug, info, warn};
use webshell_common::Notification;

use crate::events::{EventOutcome, Incident, NavigationDecision, ResourceRequest};

use super::{Deferred, Supervisor};

const NO_HANDLER_MESSAGE: &str = "No app can handle this link";

impl Supervisor {
    /// Decide whether the renderer may follow `request` itself.
    ///
    /// Main-frame navigations are counted before the trust check, so an
    /// external handoff also advances the redirect counter.
    pub(super) fn should_override_navigation(
        &mut self,
        request: &ResourceRequest,
    ) -> NavigationDecision {
        if !request.is_main_frame {
            return NavigationDecision::Allow;
        }

        self.redirect_count += 1;
        debug!(url = %request.url, redirect_count = self.redirect_count, "main frame navigation");

        if self.redirect_count > self.max_redirects {
            self.record(Incident::RedirectStorm);
            warn!(
                incident = %Incident::RedirectStorm,
                redirect_count = self.redirect_count,
                max = self.max_redirects,
                "too many redirects, scheduling hard reload"
            );
            self.redirect_count = 0;
            self.clear_cache_and_cookies();
            self.arm(Deferred::RetryNavigation, self.timings.error_retry_delay);
            return NavigationDecision::Intercept;
        }

        if !self.trusted.is_trusted(&request.url) {
            self.record(Incident::ExternalNavigation);
            info!(url = %request.url, "off-domain navigation handed to external launcher");
            self.launch_external(&request.url);
            return NavigationDecision::Intercept;
        }

        NavigationDecision::Allow
    }

    /// Popups and `target=_blank` never get a nested renderer.
    pub(super) fn create_window_requested(&mut self, hint_url: Option<&str>) -> EventOutcome {
        match hint_url.filter(|u| !u.is_empty()) {
            Some(url) => {
                info!(url = %url, "new window request handed to external launcher");
                self.launch_external(url);
            }
            None => debug!("new window request without a URL hint dropped"),
        }
        EventOutcome::Done
    }

    /// Themed tab, then generic view handler, then a toast.
    fn launch_external(&mut self, url: &str) {
        let tab_err = match self.host.launcher.launch_in_app_tab(url, &self.tab_theme) {
            Ok(()) => return,
            Err(e) => e,
        };
        debug!(url = %url, error = %tab_err, "in-app tab unavailable, trying view intent");

        if let Err(e) = self.host.launcher.launch_view_intent(url) {
            self.record(Incident::LauncherMissing);
            warn!(
                incident = %Incident::LauncherMissing,
                url = %url,
                error = %e,
                "no handler for link"
            );
            self.host.ui.notify(Notification::warning(NO_HANDLER_MESSAGE));
        }
    }
}
