//! Webshell configuration.
//!
//! Every value has a compiled-in default in [`defaults`], so
//! `ShellConfig::default()` is the shipping configuration. Hosts that bundle
//! an override document can parse it with [`load_from_str`]; partial
//! documents only replace the keys they name.
//!
//! ```rust
//! use webshell_config::load_from_str;
//!
//! let config = load_from_str("[timing]\npage_load_timeout_ms = 20000\n").unwrap();
//! assert_eq!(config.timing.page_load_timeout_ms, 20_000);
//! assert_eq!(config.navigation.max_redirects, 30);
//! ```

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_from_str, parse_str};
pub use schema::ShellConfig;

use webshell_common::ShellError;

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ShellConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

/// Install the global subscriber with the config's `logging.directive`.
pub fn init_logging(config: &ShellConfig) -> Result<(), ShellError> {
    webshell_common::logging::init(&config.logging.directive)
}
