//! Supervisor for an embedded web renderer hosting one remote app.
//!
//! Provides:
//! - Capability traits the host implements (renderer, cookies, launcher,
//!   file picker, scheduler, shell UI)
//! - A tagged [`ShellEvent`] enum fed to [`Supervisor::handle`]
//! - Page-load timeout/retry, redirect-storm containment, external-link
//!   handoff, and the file-chooser bridge
//! - A tokio timer backend and an async [`ShellRuntime`] driver

pub mod events;
pub mod host;
pub mod inject;
pub mod runtime;
pub mod scheduler;
pub mod settings;
pub mod state;
pub mod supervisor;
pub mod trust;

pub use events::{
    BackOutcome, EventOutcome, FileChoiceCallback, FileChooserParams, Incident,
    NavigationDecision, PickerResult, ResourceRequest, ShellEvent,
};
pub use host::{
    CookieStore, ExternalLauncher, FilePicker, HostCapabilities, Renderer, Scheduler, ShellUi,
    TimerToken,
};
pub use inject::VisibilityFix;
pub use runtime::{ShellHandle, ShellRuntime};
pub use scheduler::TokioScheduler;
pub use settings::{CachePolicy, MixedContentMode, RendererSettings, TabTheme};
pub use state::{SavedState, StateBundle, SAVED_STATE_KEY};
pub use supervisor::{Deferred, Phase, Supervisor};
pub use trust::TrustedHosts;
