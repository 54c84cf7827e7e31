use crate::schema::ShellConfig;

use super::helpers::validate_range_u64;

/// Validate lifecycle delays.
pub(crate) fn validate_timing(errors: &mut Vec<String>, config: &ShellConfig) {
    let t = &config.timing;
    validate_range_u64(
        errors,
        "timing.page_load_timeout_ms",
        t.page_load_timeout_ms,
        1_000,
        120_000,
    );
    validate_range_u64(
        errors,
        "timing.reveal_delay_initial_ms",
        t.reveal_delay_initial_ms,
        0,
        5_000,
    );
    validate_range_u64(
        errors,
        "timing.cache_restore_delay_ms",
        t.cache_restore_delay_ms,
        0,
        60_000,
    );
    validate_range_u64(
        errors,
        "timing.error_retry_delay_ms",
        t.error_retry_delay_ms,
        0,
        30_000,
    );
}
