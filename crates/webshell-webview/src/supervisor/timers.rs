use std::collections::HashMap;
use std::time::Duration;

use tracing::trace;

use crate::host::{Scheduler, TimerToken};

/// Purpose of a deferred callback. At most one timer per purpose is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deferred {
    PageTimeout,
    /// Show the surface after the first successful load.
    Reveal,
    /// Switch cache policy back to cache-else-network after a timeout retry.
    CacheRestore,
    /// Re-navigate to the target after an error or redirect storm.
    RetryNavigation,
}

#[derive(Debug, Default)]
pub(crate) struct TimerSlots {
    live: HashMap<Deferred, TimerToken>,
}

impl TimerSlots {
    /// Schedule `kind`, cancelling any timer already holding that slot.
    pub(crate) fn arm(&mut self, scheduler: &mut dyn Scheduler, kind: Deferred, delay: Duration) {
        self.cancel(scheduler, kind);
        let token = scheduler.schedule(delay);
        trace!(?kind, %token, delay_ms = delay.as_millis() as u64, "timer armed");
        self.live.insert(kind, token);
    }

    pub(crate) fn cancel(&mut self, scheduler: &mut dyn Scheduler, kind: Deferred) {
        if let Some(token) = self.live.remove(&kind) {
            trace!(?kind, %token, "timer cancelled");
            scheduler.cancel(token);
        }
    }

    pub(crate) fn cancel_all(&mut self, scheduler: &mut dyn Scheduler) {
        for (_, token) in self.live.drain() {
            scheduler.cancel(token);
        }
    }

    /// Claim a fired token. `None` for cancelled or superseded timers.
    pub(crate) fn take(&mut self, token: TimerToken) -> Option<Deferred> {
        let kind = self
            .live
            .iter()
            .find_map(|(kind, t)| (*t == token).then_some(*kind))?;
        self.live.remove(&kind);
        Some(kind)
    }

    pub(crate) fn is_armed(&self, kind: Deferred) -> bool {
        self.live.contains_key(&kind)
    }

    pub(crate) fn len(&self) -> usize {
        self.live.len()
    }
}
