//! Persisted renderer state across configuration changes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key the renderer blob is stored under.
pub const SAVED_STATE_KEY: &str = "webview.state";

/// Opaque renderer-provided blob. Not stable across renderer upgrades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState(pub Vec<u8>);

impl SavedState {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The platform's save-state bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateBundle {
    entries: BTreeMap<String, SavedState>,
}

impl StateBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, state: SavedState) {
        self.entries.insert(key.into(), state);
    }

    pub fn get(&self, key: &str) -> Option<&SavedState> {
        self.entries.get(key)
    }

    /// The renderer blob, if one was saved and is non-empty.
    pub fn renderer_state(&self) -> Option<&SavedState> {
        self.get(SAVED_STATE_KEY).filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
