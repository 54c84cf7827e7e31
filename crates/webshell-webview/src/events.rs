//! Host callbacks as a single event enum, and what the supervisor answers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::host::TimerToken;

/// A pending file-chooser reply. Resolving consumes it.
pub struct FileChoiceCallback(Box<dyn FnOnce(Vec<String>)>);

impl FileChoiceCallback {
    pub fn new(f: impl FnOnce(Vec<String>) + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Deliver selected URIs. An empty list means cancelled.
    pub fn resolve(self, uris: Vec<String>) {
        (self.0)(uris)
    }

    pub fn cancel(self) {
        self.resolve(Vec::new())
    }
}

impl fmt::Debug for FileChoiceCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FileChoiceCallback")
    }
}

/// Hints the page passed with its file input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChooserParams {
    pub accept_types: Vec<String>,
    pub allow_multiple: bool,
}

/// Outcome code of the picker activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickerResult {
    Ok,
    Canceled,
}

/// A navigation or resource request as reported by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRequest {
    pub url: String,
    /// Top-level document load, as opposed to a subresource fetch.
    pub is_main_frame: bool,
}

impl ResourceRequest {
    pub fn main_frame(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            is_main_frame: true,
        }
    }

    pub fn subresource(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            is_main_frame: false,
        }
    }
}

/// Everything the host reports to the supervisor.
#[derive(Debug)]
pub enum ShellEvent {
    PageStarted { url: String },
    PageCommitVisible { url: String },
    PageFinished { url: String },
    ResourceLoading { url: String },
    LoadError {
        request: ResourceRequest,
        description: String,
    },
    /// Answered with [`EventOutcome::Navigation`].
    NavigationRequested(ResourceRequest),
    /// `target=_blank` or `window.open`. The URL is the hit-test hint, if any.
    CreateWindowRequested { hint_url: Option<String> },
    /// Answered with [`EventOutcome::FileChooser`].
    FileChooserRequested {
        callback: FileChoiceCallback,
        params: FileChooserParams,
    },
    FileChooserResult {
        result: PickerResult,
        data: Option<String>,
    },
    TimerFired(TimerToken),
    /// Answered with [`EventOutcome::Back`].
    BackRequested,
    Pause,
    Resume,
}

impl ShellEvent {
    pub fn page_started(url: impl Into<String>) -> Self {
        Self::PageStarted { url: url.into() }
    }

    pub fn page_finished(url: impl Into<String>) -> Self {
        Self::PageFinished { url: url.into() }
    }

    pub fn main_frame_error(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self::LoadError {
            request: ResourceRequest::main_frame(url),
            description: description.into(),
        }
    }

    pub fn navigation(url: impl Into<String>) -> Self {
        Self::NavigationRequested(ResourceRequest::main_frame(url))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PageStarted { .. } => "page_started",
            Self::PageCommitVisible { .. } => "page_commit_visible",
            Self::PageFinished { .. } => "page_finished",
            Self::ResourceLoading { .. } => "resource_loading",
            Self::LoadError { .. } => "load_error",
            Self::NavigationRequested(_) => "navigation_requested",
            Self::CreateWindowRequested { .. } => "create_window_requested",
            Self::FileChooserRequested { .. } => "file_chooser_requested",
            Self::FileChooserResult { .. } => "file_chooser_result",
            Self::TimerFired(_) => "timer_fired",
            Self::BackRequested => "back_requested",
            Self::Pause => "pause",
            Self::Resume => "resume",
        }
    }
}

/// Whether the renderer should proceed with a navigation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationDecision {
    Allow,
    /// The supervisor took over; the renderer must not navigate.
    Intercept,
}

impl NavigationDecision {
    /// The platform's `shouldOverrideUrlLoading` return value.
    pub fn intercepted(self) -> bool {
        matches!(self, Self::Intercept)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackOutcome {
    Handled,
    /// Run the platform's default back action (usually: leave the app).
    DeferToSystem,
}

/// Step-function result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Done,
    /// The supervisor is destroyed or the event was stale.
    Ignored,
    Navigation(NavigationDecision),
    Back(BackOutcome),
    /// Whether the picker was launched.
    FileChooser(bool),
}

/// Failure taxonomy. Every incident stays inside the supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Incident {
    TransientNetwork,
    SlowLoad,
    RedirectStorm,
    ExternalNavigation,
    LauncherMissing,
    PickerMissing,
    SubresourceError,
}

impl fmt::Display for Incident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::TransientNetwork => "transient-network",
            Self::SlowLoad => "slow-load",
            Self::RedirectStorm => "redirect-storm",
            Self::ExternalNavigation => "external-navigation",
            Self::LauncherMissing => "launcher-missing",
            Self::PickerMissing => "picker-missing",
            Self::SubresourceError => "subresource-error",
        };
        f.write_str(s)
    }
}
