//! Redirect bound and trusted-host policy.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::defaults;

/// How a navigation URL is compared against `trusted_hosts`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HostMatch {
    /// Parsed host equals an entry or ends with `.entry`.
    #[default]
    Suffix,
    /// Raw URL string contains an entry anywhere. Loose; kept for parity
    /// with the first shell release.
    Substring,
}

impl HostMatch {
    /// Whether `url` belongs to one of `hosts` under this rule.
    pub fn matches(self, url: &str, hosts: &[String]) -> bool {
        match self {
            Self::Substring => hosts.iter().any(|h| !h.is_empty() && url.contains(h.as_str())),
            Self::Suffix => {
                let Some(host) = Url::parse(url)
                    .ok()
                    .and_then(|u| u.host_str().map(|h| h.to_ascii_lowercase()))
                else {
                    return false;
                };
                let host = host.trim_end_matches('.');
                hosts.iter().any(|entry| {
                    let entry = entry.trim_start_matches('.').to_ascii_lowercase();
                    !entry.is_empty()
                        && (host == entry
                            || host
                                .strip_suffix(entry.as_str())
                                .is_some_and(|rest| rest.ends_with('.')))
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Main-frame navigations allowed between two successful page finishes.
    pub max_redirects: u32,
    pub trusted_hosts: Vec<String>,
    pub host_match: HostMatch,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            max_redirects: defaults::MAX_REDIRECTS,
            trusted_hosts: defaults::TRUSTED_HOSTS
                .iter()
                .map(|h| h.to_string())
                .collect(),
            host_match: HostMatch::Suffix,
        }
    }
}

impl NavigationConfig {
    pub fn is_trusted(&self, url: &str) -> bool {
        self.host_match.matches(url, &self.trusted_hosts)
    }
}
