//! The WebView supervisor.
//!
//! `Supervisor` wraps one renderer and drives it through the page-load
//! lifecycle for a single remote target. Host callbacks arrive as
//! [`ShellEvent`]s through [`Supervisor::handle`]; deferred work (timeouts,
//! retries, reveal) is scheduled through the injected [`Scheduler`] and comes
//! back as [`ShellEvent::TimerFired`].
//!
//! [`Scheduler`]: crate::host::Scheduler

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, trace};
use webshell_common::ShellError;
use webshell_config::{validation, ShellConfig};

use crate::events::{BackOutcome, EventOutcome, FileChoiceCallback, Incident, ShellEvent};
use crate::host::HostCapabilities;
use crate::inject::VisibilityFix;
use crate::settings::{RendererSettings, TabTheme};
use crate::trust::TrustedHosts;

mod back;
mod file_chooser;
mod lifecycle;
mod navigation;
mod timers;

#[cfg(test)]
pub(crate) mod test_host;

pub use timers::Deferred;
use timers::TimerSlots;

/// Load lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not started, aborted by back navigation, or destroyed.
    Idle,
    Loading,
    Visible,
    TimedOut,
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Visible => "visible",
            Self::TimedOut => "timed-out",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Delays resolved from config once at construction.
#[derive(Debug, Clone, Copy)]
struct Timings {
    page_load_timeout: Duration,
    reveal_delay_initial: Duration,
    cache_restore_delay: Duration,
    error_retry_delay: Duration,
}

pub struct Supervisor {
    target_url: String,
    max_redirects: u32,
    timings: Timings,
    trusted: TrustedHosts,
    settings: RendererSettings,
    tab_theme: TabTheme,
    visibility_fix: VisibilityFix,
    clear_on_startup: bool,

    host: HostCapabilities,

    phase: Phase,
    is_initial_load: bool,
    redirect_count: u32,
    load_started_at: Option<Instant>,
    timers: TimerSlots,
    pending_file_choice: Option<FileChoiceCallback>,
    started: bool,
    paused: bool,
    destroyed: bool,
    last_incident: Option<Incident>,
}

impl Supervisor {
    /// Build a supervisor from a validated config.
    ///
    /// `os_release` fills the `{release}` slot of the user agent.
    pub fn new(
        config: &ShellConfig,
        host: HostCapabilities,
        os_release: &str,
    ) -> Result<Self, ShellError> {
        validation::validate(config)?;
        Ok(Self {
            target_url: config.target.url.clone(),
            max_redirects: config.navigation.max_redirects,
            timings: Timings {
                page_load_timeout: config.timing.page_load_timeout(),
                reveal_delay_initial: config.timing.reveal_delay_initial(),
                cache_restore_delay: config.timing.cache_restore_delay(),
                error_retry_delay: config.timing.error_retry_delay(),
            },
            trusted: TrustedHosts::from_config(&config.navigation),
            settings: RendererSettings::for_shell(&config.renderer, os_release),
            tab_theme: TabTheme::from_config(&config.external),
            visibility_fix: VisibilityFix::from_config(&config.visibility_fix),
            clear_on_startup: config.renderer.clear_on_startup,
            host,
            phase: Phase::Idle,
            is_initial_load: true,
            redirect_count: 0,
            load_started_at: None,
            timers: TimerSlots::default(),
            pending_file_choice: None,
            started: false,
            paused: false,
            destroyed: false,
            last_incident: None,
        })
    }

    /// The step function. Every host callback goes through here.
    pub fn handle(&mut self, event: ShellEvent) -> EventOutcome {
        if self.destroyed {
            trace!(event = event.name(), "event after destroy ignored");
            return match event {
                ShellEvent::FileChooserRequested { callback, .. } => {
                    callback.cancel();
                    EventOutcome::FileChooser(false)
                }
                ShellEvent::BackRequested => EventOutcome::Back(BackOutcome::DeferToSystem),
                _ => EventOutcome::Ignored,
            };
        }

        match event {
            ShellEvent::PageStarted { url } => self.page_started(&url),
            ShellEvent::PageCommitVisible { url } => self.page_commit_visible(&url),
            ShellEvent::PageFinished { url } => self.page_finished(&url),
            ShellEvent::ResourceLoading { url } => {
                debug!(url = %url, "loading resource");
                EventOutcome::Done
            }
            ShellEvent::LoadError {
                request,
                description,
            } => {
                if request.is_main_frame {
                    self.main_frame_error(&request.url, &description)
                } else {
                    self.subresource_error(&request.url, &description)
                }
            }
            ShellEvent::NavigationRequested(request) => {
                EventOutcome::Navigation(self.should_override_navigation(&request))
            }
            ShellEvent::CreateWindowRequested { hint_url } => {
                self.create_window_requested(hint_url.as_deref())
            }
            ShellEvent::FileChooserRequested { callback, params } => {
                EventOutcome::FileChooser(self.file_chooser_requested(callback, &params))
            }
            ShellEvent::FileChooserResult { result, data } => {
                self.file_chooser_result(result, data)
            }
            ShellEvent::TimerFired(token) => match self.timers.take(token) {
                Some(kind) => self.deferred_fired(kind),
                None => {
                    trace!(%token, "stale timer ignored");
                    EventOutcome::Ignored
                }
            },
            ShellEvent::BackRequested => EventOutcome::Back(self.on_back_requested()),
            ShellEvent::Pause => {
                self.on_pause();
                EventOutcome::Done
            }
            ShellEvent::Resume => {
                self.on_resume();
                EventOutcome::Done
            }
        }
    }

    fn deferred_fired(&mut self, kind: Deferred) -> EventOutcome {
        match kind {
            Deferred::PageTimeout => self.timeout_expired(),
            Deferred::Reveal => self.reveal(),
            Deferred::CacheRestore => self.restore_cache_policy(),
            Deferred::RetryNavigation => self.retry_navigation(),
        }
        EventOutcome::Done
    }

    fn record(&mut self, incident: Incident) {
        self.last_incident = Some(incident);
    }

    /// Wipe the HTTP cache and every cookie.
    fn clear_cache_and_cookies(&mut self) {
        self.host.renderer.clear_cache();
        self.host.cookies.remove_all_cookies();
    }

    fn arm(&mut self, kind: Deferred, delay: Duration) {
        self.timers.arm(self.host.scheduler.as_mut(), kind, delay);
    }

    fn disarm(&mut self, kind: Deferred) {
        self.timers.cancel(self.host.scheduler.as_mut(), kind);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    pub fn is_initial_load(&self) -> bool {
        self.is_initial_load
    }

    pub fn redirect_count(&self) -> u32 {
        self.redirect_count
    }

    pub fn is_timer_armed(&self, kind: Deferred) -> bool {
        self.timers.is_armed(kind)
    }

    pub fn pending_timer_count(&self) -> usize {
        self.timers.len()
    }

    pub fn has_pending_file_choice(&self) -> bool {
        self.pending_file_choice.is_some()
    }

    pub fn last_incident(&self) -> Option<Incident> {
        self.last_incident
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }
}

impl fmt::Debug for Supervisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Supervisor")
            .field("target_url", &self.target_url)
            .field("phase", &self.phase)
            .field("is_initial_load", &self.is_initial_load)
            .field("redirect_count", &self.redirect_count)
            .field("timers", &self.timers)
            .field("pending_file_choice", &self.pending_file_choice.is_some())
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}
