//! Target URL and trusted-host validation.

use url::Url;

use crate::schema::ShellConfig;

use super::helpers::validate_range;

/// The target must be an https URL that the trust policy keeps in-app;
/// otherwise every load would be handed to the external launcher.
pub(crate) fn validate_target(errors: &mut Vec<String>, config: &ShellConfig) {
    let url = &config.target.url;
    match Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() != "https" {
                errors.push(format!("target.url = {url} must use https"));
            }
            if parsed.host_str().is_none() {
                errors.push(format!("target.url = {url} has no host"));
            } else if !config.navigation.is_trusted(url) {
                errors.push(format!(
                    "target.url = {url} is not covered by navigation.trusted_hosts"
                ));
            }
        }
        Err(e) => errors.push(format!("target.url = {url} is not a valid URL: {e}")),
    }
}

pub(crate) fn validate_navigation(errors: &mut Vec<String>, config: &ShellConfig) {
    let nav = &config.navigation;
    validate_range(errors, "navigation.max_redirects", nav.max_redirects, 1, 100);

    if nav.trusted_hosts.is_empty() {
        errors.push("navigation.trusted_hosts must not be empty".to_string());
    }
    for host in &nav.trusted_hosts {
        if host.trim().is_empty() {
            errors.push("navigation.trusted_hosts contains an empty entry".to_string());
        } else if host.contains('/') || host.contains(char::is_whitespace) {
            errors.push(format!(
                "navigation.trusted_hosts entry {host:?} must be a bare host name"
            ));
        }
    }
}
