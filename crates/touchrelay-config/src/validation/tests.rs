use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate(&TouchRelayConfig::default()).is_ok());
}

#[test]
fn marker_delay_bounds() {
    let mut config = TouchRelayConfig::default();
    config.zone.marker_delay_ms = 49;
    assert!(validate(&config).is_err());
    config.zone.marker_delay_ms = 50;
    assert!(validate(&config).is_ok());
    config.zone.marker_delay_ms = 60_001;
    assert!(validate(&config).is_err());
}

#[test]
fn marker_size_rejects_nan() {
    let mut config = TouchRelayConfig::default();
    config.zone.marker_size = f64::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn marker_class_must_be_one_token() {
    let mut config = TouchRelayConfig::default();
    config.zone.marker_class = "debug point".into();
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("zone.marker_class"));
}

#[test]
fn empty_overlay_id_is_rejected() {
    let mut config = TouchRelayConfig::default();
    config.host.overlay_id = "  ".into();
    let err = validate(&config).unwrap_err();
    assert!(err.to_string().contains("host.overlay_id must not be empty"));
}

#[test]
fn unknown_log_level_is_rejected() {
    let mut config = TouchRelayConfig::default();
    config.logging.level = "verbose".into();
    assert!(validate(&config).is_err());
}

#[test]
fn collects_all_errors() {
    let mut config = TouchRelayConfig::default();
    config.zone.marker_delay_ms = 0;
    config.zone.marker_size = 0.0;
    config.logging.level = "loud".into();
    match validate(&config) {
        Err(ConfigError::ValidationError(msg)) => {
            assert_eq!(msg.split("; ").count(), 3);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
