//! Unit tests for configuration validation.

use dcs_conformance::config::{parse_config, validate_config, SessionConfig};
use dcs_conformance::error::{ConfigError, Error};

/// Test validation of the default configuration.
#[test]
fn test_default_config_passes_validation() {
    assert!(validate_config(&SessionConfig::default()).is_ok());
}

/// Test that a short default address above 127 is rejected.
#[test]
fn test_short_address_out_of_range() {
    let toml_str = r#"
[defaults]
address = 128
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidAddress {
            address: 128,
            long: false
        }))
    ));
}

/// Test that the same address is fine as a long address.
#[test]
fn test_long_address_in_range() {
    let toml_str = r#"
[defaults]
address = 128
long_address = true
"#;

    assert!(parse_config(toml_str).is_ok());
}

/// Test that a long address above 10239 is rejected.
#[test]
fn test_long_address_out_of_range() {
    let mut config = SessionConfig::default();
    config.defaults.long_address(10240);

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidAddress { long: true, .. }))
    ));
}

/// Test that the address range prompt defaults must be short addresses.
#[test]
fn test_address_range_must_be_short() {
    let toml_str = r#"
[address_range]
last = 200
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::InvalidAddress { address: 200, .. }))
    ));
}

/// Test that a zero poll interval is rejected.
#[test]
fn test_zero_poll_interval() {
    let mut config = SessionConfig::default();
    config.operator.poll_interval_us = 0;

    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidPollInterval(0)))
    );
}
