//! Configuration validation.
//!
//! Collects every violation into a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::{TouchRelayConfig, LOG_LEVELS};
use touchrelay_common::ConfigError;

use helpers::{validate_non_empty, validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TouchRelayConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_non_empty(&mut errors, "host.overlay_id", &config.host.overlay_id);

    validate_range(
        &mut errors,
        "zone.marker_delay_ms",
        config.zone.marker_delay_ms,
        50,
        60_000,
    );
    validate_range_f64(
        &mut errors,
        "zone.marker_size",
        config.zone.marker_size,
        1.0,
        200.0,
    );
    validate_non_empty(&mut errors, "zone.marker_class", &config.zone.marker_class);
    if config.zone.marker_class.contains(char::is_whitespace) {
        errors.push(format!(
            "zone.marker_class = {:?} must be a single class name",
            config.zone.marker_class
        ));
    }

    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} is not one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
