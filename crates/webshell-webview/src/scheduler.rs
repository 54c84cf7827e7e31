//! Tokio-backed [`Scheduler`].
//!
//! Each deferred callback is a spawned sleep task that reports its token on
//! an unbounded channel when it wakes. [`ShellRuntime`] drains that channel
//! into [`ShellEvent::TimerFired`].
//!
//! [`ShellRuntime`]: crate::runtime::ShellRuntime
//! [`ShellEvent::TimerFired`]: crate::events::ShellEvent::TimerFired

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::host::{Scheduler, TimerToken};

/// Must be used from inside a tokio runtime.
#[derive(Debug)]
pub struct TokioScheduler {
    next: u64,
    fired: mpsc::UnboundedSender<TimerToken>,
    tasks: HashMap<TimerToken, JoinHandle<()>>,
}

impl TokioScheduler {
    /// Returns the scheduler and the receiver its timers report to.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerToken>) {
        let (fired, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            next: 0,
            fired,
            tasks: HashMap::new(),
        };
        (scheduler, rx)
    }

    /// Timers still sleeping.
    pub fn pending(&self) -> usize {
        self.tasks.values().filter(|h| !h.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerToken {
        self.tasks.retain(|_, h| !h.is_finished());

        self.next += 1;
        let token = TimerToken(self.next);
        let fired = self.fired.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the runtime stopped; nothing to wake.
            let _ = fired.send(token);
        });
        tracing::trace!(%token, delay_ms = delay.as_millis() as u64, "timer scheduled");
        self.tasks.insert(token, handle);
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some(handle) = self.tasks.remove(&token) {
            handle.abort();
            tracing::trace!(%token, "timer cancelled");
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}
