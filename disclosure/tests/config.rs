//! Tests for disclosure configuration.

use std::time::Duration;

use disclosure::{ConfigError, DEFAULT_HOVER_DELAY, DisclosureConfig};

#[test]
fn test_default_delay_is_500ms() {
    let config = DisclosureConfig::default();
    assert_eq!(config.hover_delay, Duration::from_millis(500));
    assert_eq!(config.hover_delay, DEFAULT_HOVER_DELAY);
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_json_reads_millis() {
    let config = DisclosureConfig::from_json(r#"{ "hover_delay_ms": 250 }"#).unwrap();
    assert_eq!(config.hover_delay, Duration::from_millis(250));
}

#[test]
fn test_from_json_missing_fields_use_defaults() {
    let config = DisclosureConfig::from_json("{}").unwrap();
    assert_eq!(config, DisclosureConfig::default());
}

#[test]
fn test_from_json_rejects_zero_delay() {
    let err = DisclosureConfig::from_json(r#"{ "hover_delay_ms": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroDelay));
    assert_eq!(err.to_string(), "hover delay must be greater than zero");
}

#[test]
fn test_from_json_rejects_bad_input() {
    let err = DisclosureConfig::from_json(r#"{ "hover_delay_ms": "soon" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid disclosure config"));
}

#[test]
fn test_serializes_as_millis() {
    let config = DisclosureConfig::new().hover_delay(Duration::from_millis(750));
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"hover_delay_ms":750}"#);
}
