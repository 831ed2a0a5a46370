//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::test_config::{address_in_range, TestConfiguration};
use super::{AddressRange, OperatorConfig, SessionConfig};

/// Validate a session configuration.
///
/// Checks:
/// - Default address is in range for its length
/// - Address range prompt defaults are valid short addresses
/// - Poll interval is non-zero
pub fn validate_config(config: &SessionConfig) -> Result<()> {
    validate_defaults(&config.defaults)?;
    validate_operator(&config.operator)?;
    validate_address_range(&config.address_range)?;
    Ok(())
}

fn validate_defaults(defaults: &TestConfiguration) -> Result<()> {
    if !address_in_range(defaults.address, defaults.address_is_long) {
        return Err(Error::Config(ConfigError::InvalidAddress {
            address: defaults.address,
            long: defaults.address_is_long,
        }));
    }
    Ok(())
}

fn validate_operator(operator: &OperatorConfig) -> Result<()> {
    if operator.poll_interval_us == 0 {
        return Err(Error::Config(ConfigError::InvalidPollInterval(
            operator.poll_interval_us,
        )));
    }
    Ok(())
}

fn validate_address_range(range: &AddressRange) -> Result<()> {
    for address in range.as_array() {
        if !address_in_range(address, false) {
            return Err(Error::Config(ConfigError::InvalidAddress {
                address,
                long: false,
            }));
        }
    }
    Ok(())
}
