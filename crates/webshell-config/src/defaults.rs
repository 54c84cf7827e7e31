//! Compiled-in shell constants.

/// Remote entry point hosted by the shell.
pub const TARGET_URL: &str = "https://smart-resume-analyzer-4iddq9m3k6hbjvkmsfus8a.streamlit.app/";

/// Host suffixes whose navigations stay inside the renderer.
pub const TRUSTED_HOSTS: &[&str] = &["streamlit.app", "streamlit.io"];

pub const PAGE_LOAD_TIMEOUT_MS: u64 = 15_000;
pub const MAX_REDIRECTS: u32 = 30;
pub const REVEAL_DELAY_INITIAL_MS: u64 = 500;
pub const CACHE_RESTORE_DELAY_MS: u64 = 5_000;
pub const ERROR_RETRY_DELAY_MS: u64 = 1_000;

/// `{release}` is replaced with the host OS release.
pub const USER_AGENT_TEMPLATE: &str = "Mozilla/5.0 (Linux; Android {release}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36";

pub const TOOLBAR_COLOR: &str = "#2196F3";

/// App containers the remote page keeps hidden until hydration.
pub const VISIBILITY_FIX_CONTAINERS: &[&str] = &[".stApp", ".main"];
pub const VISIBILITY_FIX_BACKGROUND: &str = "#ffffff";

pub const LOG_DIRECTIVE: &str = "webshell=info";
