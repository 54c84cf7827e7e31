//! Load lifecycle timings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Millisecond delays driving timeout, reveal, and retry timers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub page_load_timeout_ms: u64,
    pub reveal_delay_initial_ms: u64,
    pub cache_restore_delay_ms: u64,
    pub error_retry_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            page_load_timeout_ms: defaults::PAGE_LOAD_TIMEOUT_MS,
            reveal_delay_initial_ms: defaults::REVEAL_DELAY_INITIAL_MS,
            cache_restore_delay_ms: defaults::CACHE_RESTORE_DELAY_MS,
            error_retry_delay_ms: defaults::ERROR_RETRY_DELAY_MS,
        }
    }
}

impl TimingConfig {
    pub fn page_load_timeout(&self) -> Duration {
        Duration::from_millis(self.page_load_timeout_ms)
    }

    pub fn reveal_delay_initial(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_initial_ms)
    }

    pub fn cache_restore_delay(&self) -> Duration {
        Duration::from_millis(self.cache_restore_delay_ms)
    }

    pub fn error_retry_delay(&self) -> Duration {
        Duration::from_millis(self.error_retry_delay_ms)
    }
}
