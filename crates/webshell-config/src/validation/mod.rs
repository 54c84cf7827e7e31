//! Full configuration validation.
//!
//! Each section has its own check; `validate` runs them all and collects
//! every problem into a single `ConfigError`.

mod helpers;
mod navigation;
mod timing;
mod ui;


use crate::schema::ShellConfig;
use webshell_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShellConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    timing::validate_timing(&mut errors, config);
    navigation::validate_target(&mut errors, config);
    navigation::validate_navigation(&mut errors, config);
    ui::validate_external(&mut errors, config);
    ui::validate_visibility_fix(&mut errors, config);
    ui::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
