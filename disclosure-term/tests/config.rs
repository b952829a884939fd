use std::path::Path;
use std::time::Duration;

use disclosure::ConfigError;
use disclosure_term::{TermConfig, TermError};
use log::LevelFilter;

#[test]
fn test_load_without_path_uses_defaults() {
    let config = TermConfig::load(None).unwrap();
    assert_eq!(config.header, "Details");
    assert_eq!(config.hint, "Hover to view");
    assert_eq!(config.disclosure.hover_delay, Duration::from_millis(500));
}

#[test]
fn test_from_json_overrides_fields() {
    let config = TermConfig::from_json(
        r#"{
            "header": "Changelog",
            "body": ["one"],
            "log_level": "info",
            "disclosure": { "hover_delay_ms": 300 }
        }"#,
    )
    .unwrap();

    assert_eq!(config.header, "Changelog");
    assert_eq!(config.body, vec!["one".to_string()]);
    assert_eq!(config.log_level, LevelFilter::Info);
    assert_eq!(config.disclosure.hover_delay, Duration::from_millis(300));
    // Untouched fields keep defaults
    assert_eq!(config.hint, "Hover to view");
}

#[test]
fn test_indicator_follows_visibility() {
    let config = TermConfig::default();
    assert_eq!(config.indicator(true), '▼');
    assert_eq!(config.indicator(false), '▶');
}

#[test]
fn test_zero_delay_is_rejected() {
    let err = TermConfig::from_json(r#"{ "disclosure": { "hover_delay_ms": 0 } }"#).unwrap_err();
    assert!(matches!(err, TermError::Config(ConfigError::ZeroDelay)));
}

#[test]
fn test_malformed_json_is_a_config_error() {
    let err = TermConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, TermError::Config(ConfigError::Parse(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = TermConfig::load(Some(Path::new("/nonexistent/disclosure.json"))).unwrap_err();
    assert!(matches!(err, TermError::Io(_)));
}
