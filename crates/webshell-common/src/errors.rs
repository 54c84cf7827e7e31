#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reported by an injected host capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// No installed handler can service the request (no browser, no picker).
    #[error("no handler for {0}")]
    NoHandler(String),

    #[error("capability unavailable: {0}")]
    Unavailable(String),

    #[error("renderer error: {0}")]
    Renderer(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error("logging init error: {0}")]
    Logging(String),

    #[error("shell runtime is no longer running")]
    RuntimeClosed,
}
