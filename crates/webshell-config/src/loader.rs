//! TOML parsing for host-bundled config documents.

use tracing::{debug, warn};
use webshell_common::ConfigError;

use crate::schema::ShellConfig;
use crate::validation;

/// Deserialize a TOML document, filling missing keys with defaults.
pub fn parse_str(content: &str) -> Result<ShellConfig, ConfigError> {
    toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Parse and validate. Invalid values are rejected, not patched.
pub fn load_from_str(content: &str) -> Result<ShellConfig, ConfigError> {
    let config = parse_str(content)?;
    if let Err(e) = validation::validate(&config) {
        warn!("bundled config rejected: {e}");
        return Err(e);
    }
    debug!(target_url = %config.target.url, "config loaded");
    Ok(config)
}
