//! Recording fakes and a virtual clock for supervisor tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use webshell_common::{HostError, Notification, ShellError};
use webshell_config::ShellConfig;

use crate::events::{EventOutcome, ShellEvent};
use crate::host::{
    CookieStore, ExternalLauncher, FilePicker, HostCapabilities, Renderer, Scheduler, ShellUi,
    TimerToken,
};
use crate::settings::{CachePolicy, RendererSettings, TabTheme};
use crate::state::SavedState;

use super::Supervisor;

#[derive(Debug, Default)]
pub(crate) struct HostLog {
    pub settings: Option<RendererSettings>,
    pub loads: Vec<String>,
    pub current_url: Option<String>,
    pub history_depth: usize,
    pub stops: usize,
    pub reloads: usize,
    pub go_backs: usize,
    pub cache_clears: usize,
    pub history_clears: usize,
    pub cookie_clears: usize,
    pub accept_cookies: Option<bool>,
    pub accept_third_party: Option<bool>,
    pub cache_policies: Vec<CachePolicy>,
    pub surface_visible: Option<bool>,
    pub progress_visible: Option<bool>,
    pub scripts: Vec<String>,
    pub notifications: Vec<Notification>,
    pub tabs: Vec<(String, TabTheme)>,
    pub views: Vec<String>,
    pub picker_opens: Vec<String>,
    pub restored: Vec<SavedState>,
    pub pauses: usize,
    pub resumes: usize,
    pub destroyed: bool,

    pub tab_fails: bool,
    pub view_fails: bool,
    pub picker_fails: bool,
    pub restore_fails: bool,
    pub script_fails: bool,
}

pub(crate) type SharedLog = Rc<RefCell<HostLog>>;

struct FakeRenderer(SharedLog);

impl Renderer for FakeRenderer {
    fn apply_settings(&mut self, settings: &RendererSettings) {
        self.0.borrow_mut().settings = Some(settings.clone());
    }

    fn set_cache_policy(&mut self, policy: CachePolicy) {
        self.0.borrow_mut().cache_policies.push(policy);
    }

    fn load_url(&mut self, url: &str) {
        let mut log = self.0.borrow_mut();
        log.loads.push(url.to_string());
        if log.current_url.is_some() {
            log.history_depth += 1;
        }
        log.current_url = Some(url.to_string());
    }

    fn stop_loading(&mut self) {
        self.0.borrow_mut().stops += 1;
    }

    fn reload(&mut self) {
        self.0.borrow_mut().reloads += 1;
    }

    fn clear_cache(&mut self) {
        self.0.borrow_mut().cache_clears += 1;
    }

    fn clear_history(&mut self) {
        let mut log = self.0.borrow_mut();
        log.history_clears += 1;
        log.history_depth = 0;
    }

    fn can_go_back(&self) -> bool {
        self.0.borrow().history_depth > 0
    }

    fn go_back(&mut self) {
        let mut log = self.0.borrow_mut();
        log.go_backs += 1;
        log.history_depth = log.history_depth.saturating_sub(1);
    }

    fn save_state(&mut self) -> Option<SavedState> {
        let log = self.0.borrow();
        let url = log.current_url.as_ref()?;
        Some(SavedState(format!("{url}\n{}", log.history_depth).into_bytes()))
    }

    fn restore_state(&mut self, state: &SavedState) -> Result<(), HostError> {
        let mut log = self.0.borrow_mut();
        if log.restore_fails {
            return Err(HostError::Renderer("incompatible state".into()));
        }
        let text = String::from_utf8_lossy(&state.0).into_owned();
        let (url, depth) = text
            .split_once('\n')
            .ok_or_else(|| HostError::Renderer("malformed state".into()))?;
        log.current_url = Some(url.to_string());
        log.history_depth = depth.parse().unwrap_or(0);
        log.restored.push(state.clone());
        Ok(())
    }

    fn pause(&mut self) {
        self.0.borrow_mut().pauses += 1;
    }

    fn resume(&mut self) {
        self.0.borrow_mut().resumes += 1;
    }

    fn evaluate_script(&mut self, script: &str) -> Result<(), HostError> {
        let mut log = self.0.borrow_mut();
        if log.script_fails {
            return Err(HostError::Renderer("no document".into()));
        }
        log.scripts.push(script.to_string());
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) {
        self.0.borrow_mut().surface_visible = Some(visible);
    }

    fn destroy(&mut self) {
        self.0.borrow_mut().destroyed = true;
    }
}

struct FakeCookies(SharedLog);

impl CookieStore for FakeCookies {
    fn set_accept_cookies(&mut self, accept: bool) {
        self.0.borrow_mut().accept_cookies = Some(accept);
    }

    fn set_accept_third_party_cookies(&mut self, accept: bool) {
        self.0.borrow_mut().accept_third_party = Some(accept);
    }

    fn remove_all_cookies(&mut self) {
        self.0.borrow_mut().cookie_clears += 1;
    }
}

struct FakeLauncher(SharedLog);

impl ExternalLauncher for FakeLauncher {
    fn launch_in_app_tab(&mut self, url: &str, theme: &TabTheme) -> Result<(), HostError> {
        let mut log = self.0.borrow_mut();
        if log.tab_fails {
            return Err(HostError::NoHandler(url.to_string()));
        }
        log.tabs.push((url.to_string(), *theme));
        Ok(())
    }

    fn launch_view_intent(&mut self, url: &str) -> Result<(), HostError> {
        let mut log = self.0.borrow_mut();
        if log.view_fails {
            return Err(HostError::NoHandler(url.to_string()));
        }
        log.views.push(url.to_string());
        Ok(())
    }
}

struct FakePicker(SharedLog);

impl FilePicker for FakePicker {
    fn open_document(&mut self, mime_mask: &str) -> Result<(), HostError> {
        let mut log = self.0.borrow_mut();
        if log.picker_fails {
            return Err(HostError::Unavailable("document picker".into()));
        }
        log.picker_opens.push(mime_mask.to_string());
        Ok(())
    }
}

struct FakeUi(SharedLog);

impl ShellUi for FakeUi {
    fn set_progress_visible(&mut self, visible: bool) {
        self.0.borrow_mut().progress_visible = Some(visible);
    }

    fn notify(&mut self, notification: Notification) {
        self.0.borrow_mut().notifications.push(notification);
    }
}

/// Deterministic timer queue driven by [`Harness::advance`].
#[derive(Debug, Default)]
pub(crate) struct VirtualClock {
    pub now: Duration,
    next: u64,
    pending: BTreeMap<TimerToken, Duration>,
    pub cancelled: Vec<TimerToken>,
}

impl VirtualClock {
    /// Earliest timer due at or before `until`, removed from the queue.
    fn pop_due(&mut self, until: Duration) -> Option<TimerToken> {
        let (token, due) = self
            .pending
            .iter()
            .filter(|(_, due)| **due <= until)
            .min_by_key(|(token, due)| (**due, **token))
            .map(|(t, d)| (*t, *d))?;
        self.pending.remove(&token);
        self.now = due;
        Some(token)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

struct ManualScheduler(Rc<RefCell<VirtualClock>>);

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerToken {
        let mut clock = self.0.borrow_mut();
        clock.next += 1;
        let token = TimerToken(clock.next);
        let due = clock.now + delay;
        clock.pending.insert(token, due);
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        let mut clock = self.0.borrow_mut();
        if clock.pending.remove(&token).is_some() {
            clock.cancelled.push(token);
        }
    }
}

pub(crate) const OS_RELEASE: &str = "14";

/// Recording fakes for everything but the scheduler.
pub(crate) fn recording_host(scheduler: Box<dyn Scheduler>) -> (HostCapabilities, SharedLog) {
    let log: SharedLog = Rc::new(RefCell::new(HostLog::default()));
    let host = HostCapabilities {
        renderer: Box::new(FakeRenderer(Rc::clone(&log))),
        cookies: Box::new(FakeCookies(Rc::clone(&log))),
        launcher: Box::new(FakeLauncher(Rc::clone(&log))),
        picker: Box::new(FakePicker(Rc::clone(&log))),
        scheduler,
        ui: Box::new(FakeUi(Rc::clone(&log))),
    };
    (host, log)
}

pub(crate) struct Harness {
    pub sup: Supervisor,
    pub log: SharedLog,
    pub clock: Rc<RefCell<VirtualClock>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(&ShellConfig::default())
    }

    pub fn with_config(config: &ShellConfig) -> Self {
        Self::try_with_config(config).expect("config is valid")
    }

    pub fn try_with_config(config: &ShellConfig) -> Result<Self, ShellError> {
        let clock = Rc::new(RefCell::new(VirtualClock::default()));
        let (host, log) = recording_host(Box::new(ManualScheduler(Rc::clone(&clock))));
        let sup = Supervisor::new(config, host, OS_RELEASE)?;
        Ok(Self { sup, log, clock })
    }

    /// A supervisor that has issued its cold-start load.
    pub fn started() -> Self {
        let mut h = Self::new();
        h.sup.start(None);
        h
    }

    /// Cold start through page start and finish, past the reveal delay.
    pub fn visible() -> Self {
        let mut h = Self::started();
        let target = h.sup.target_url().to_string();
        h.send(ShellEvent::page_started(target.clone()));
        h.send(ShellEvent::page_finished(target));
        h.advance(500);
        h
    }

    pub fn send(&mut self, event: ShellEvent) -> EventOutcome {
        self.sup.handle(event)
    }

    /// Move virtual time forward `ms`, firing due timers in order.
    pub fn advance(&mut self, ms: u64) {
        let until = self.clock.borrow().now + Duration::from_millis(ms);
        loop {
            let due = self.clock.borrow_mut().pop_due(until);
            match due {
                Some(token) => {
                    self.sup.handle(ShellEvent::TimerFired(token));
                }
                None => break,
            }
        }
        self.clock.borrow_mut().now = until;
    }

    pub fn loads(&self) -> Vec<String> {
        self.log.borrow().loads.clone()
    }

    pub fn target(&self) -> String {
        self.sup.target_url().to_string()
    }

    pub fn set(&self, f: impl FnOnce(&mut HostLog)) {
        f(&mut self.log.borrow_mut());
    }
}
