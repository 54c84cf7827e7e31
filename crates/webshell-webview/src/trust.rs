//! Which navigations stay inside the renderer.

use webshell_config::schema::{HostMatch, NavigationConfig};

/// Trusted host set with its matching rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedHosts {
    hosts: Vec<String>,
    rule: HostMatch,
}

impl TrustedHosts {
    pub fn new(hosts: Vec<String>, rule: HostMatch) -> Self {
        Self { hosts, rule }
    }

    pub fn from_config(config: &NavigationConfig) -> Self {
        Self::new(config.trusted_hosts.clone(), config.host_match)
    }

    /// Check whether `url` may load inside the renderer.
    pub fn is_trusted(&self, url: &str) -> bool {
        self.rule.matches(url, &self.hosts)
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }
}

impl Default for TrustedHosts {
    fn default() -> Self {
        Self::from_config(&NavigationConfig::default())
    }
}
