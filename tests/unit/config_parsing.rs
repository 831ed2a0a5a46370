//! Unit tests for TOML configuration parsing.

use std::io::Write;

use dcs_conformance::config::{load_config, parse_config, Direction, SessionConfig};
use dcs_conformance::error::{ConfigError, Error};
use dcs_conformance::StepMode;

/// Test parsing a complete session configuration.
#[test]
fn test_parse_session_config() {
    let toml_str = r#"
[defaults]
address = 1200
long_address = true
step_mode = 14
direction = "reverse"

[operator]
poll_interval_us = 250

[address_range]
first = 2
mid = 50
last = 99
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.defaults.address, 1200);
    assert!(config.defaults.address_is_long);
    assert_eq!(config.defaults.step_mode, StepMode::Fourteen);
    assert_eq!(config.defaults.direction, Direction::Reverse);
    assert_eq!(config.operator.poll_interval_us, 250);
    assert_eq!(config.address_range.as_array(), [2, 50, 99]);
}

/// Test that omitted sections fall back to defaults.
#[test]
fn test_parse_partial_config() {
    let toml_str = r#"
[defaults]
step_mode = 128
"#;

    let config: SessionConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.defaults.address, 3);
    assert!(!config.defaults.address_is_long);
    assert_eq!(config.defaults.step_mode, StepMode::OneTwentyEight);
    assert_eq!(config.defaults.direction, Direction::Forward);
    assert_eq!(config.address_range.as_array(), [1, 63, 127]);
}

/// Test that an unsupported step mode is a parse error.
#[test]
fn test_parse_rejects_unknown_step_mode() {
    let toml_str = r#"
[defaults]
step_mode = 27
"#;

    let result = parse_config(toml_str);
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test that an unknown direction is a parse error.
#[test]
fn test_parse_rejects_unknown_direction() {
    let toml_str = r#"
[defaults]
direction = "sideways"
"#;

    assert!(parse_config(toml_str).is_err());
}

/// Test loading from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("dcs-conformance-{}.toml", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).expect("create temp file");
        writeln!(file, "[operator]\npoll_interval_us = 500").expect("write temp file");
    }

    let config = load_config(&path).expect("load config");
    let _ = std::fs::remove_file(&path);

    assert_eq!(config.operator.poll_interval_us, 500);
}

/// Test that a missing file is an I/O error.
#[test]
fn test_load_config_missing_file() {
    let result = load_config("/nonexistent/dcs-conformance/session.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
}
