//! Validation for the external tab theme, visibility fix, and logging.

use webshell_common::Color;

use crate::schema::ShellConfig;

pub(crate) fn validate_external(errors: &mut Vec<String>, config: &ShellConfig) {
    let color = &config.external.toolbar_color;
    if Color::from_hex(color).is_none() || !color.starts_with('#') {
        errors.push(format!(
            "external.toolbar_color = {color} is not a #RRGGBB or #RRGGBBAA colour"
        ));
    }
}

pub(crate) fn validate_visibility_fix(errors: &mut Vec<String>, config: &ShellConfig) {
    let fix = &config.visibility_fix;
    if !fix.enabled {
        return;
    }
    if fix.containers.iter().any(|c| c.trim().is_empty()) {
        errors.push("visibility_fix.containers contains an empty selector".to_string());
    }
    // Selectors and colour are spliced into a stylesheet.
    let unsafe_chars = ['{', '}', ';', '<', '>'];
    for selector in &fix.containers {
        if selector.contains(unsafe_chars) {
            errors.push(format!(
                "visibility_fix.containers entry {selector:?} contains a reserved character"
            ));
        }
    }
    if Color::from_hex(&fix.background).is_none() || !fix.background.starts_with('#') {
        errors.push(format!(
            "visibility_fix.background = {} is not a #RRGGBB or #RRGGBBAA colour",
            fix.background
        ));
    }
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &ShellConfig) {
    if config.logging.directive.trim().is_empty() {
        errors.push("logging.directive must not be empty".to_string());
    }
}
