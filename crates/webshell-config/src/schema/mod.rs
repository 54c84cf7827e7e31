//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial documents work correctly.
//! Missing fields are filled from [`crate::defaults`].

mod external;
mod logging;
mod navigation;
mod renderer;
mod target;
mod timing;
mod visibility;

pub use external::*;
pub use logging::*;
pub use navigation::*;
pub use renderer::*;
pub use target::*;
pub use timing::*;
pub use visibility::*;

use serde::{Deserialize, Serialize};

/// Root configuration for the shell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub target: TargetConfig,
    pub timing: TimingConfig,
    pub navigation: NavigationConfig,
    pub renderer: RendererConfig,
    pub external: ExternalLinkConfig,
    pub visibility_fix: VisibilityFixConfig,
    pub logging: LoggingConfig,
}
