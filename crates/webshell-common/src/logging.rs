//! Tracing subscriber bootstrap for embedding hosts.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::errors::ShellError;

/// Build the filter: `RUST_LOG` first, then `directive` layered on top.
pub fn env_filter(directive: &str) -> Result<EnvFilter, ShellError> {
    let directive: Directive = directive
        .parse()
        .map_err(|e| ShellError::Logging(format!("invalid log directive {directive:?}: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Install a global fmt subscriber.
///
/// Fails on a bad directive, or if the host (or an earlier call) already
/// installed a subscriber.
pub fn init(directive: &str) -> Result<(), ShellError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directive)?)
        .try_init()
        .map_err(|e| ShellError::Logging(e.to_string()))?;
    tracing::info!("webshell v{} logging ready", env!("CARGO_PKG_VERSION"));
    Ok(())
}
