//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SessionConfig;

/// Load a session configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use dcs_conformance::load_config;
///
/// let config = load_config("session.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SessionConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse a session configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SessionConfig> {
    let config: SessionConfig = toml::from_str(content).map_err(|e| {
        let mut msg = heapless::String::<128>::new();
        for c in e.message().chars() {
            if msg.push(c).is_err() {
                break;
            }
        }
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}
