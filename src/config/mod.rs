//! Configuration module for dcs-conformance.
//!
//! Provides the per-run throttle configuration and the session configuration
//! loaded from TOML files (with `std` feature) or built in code.

#[cfg(feature = "std")]
mod loader;
mod session;
mod test_config;
mod validation;

pub use session::{AddressRange, OperatorConfig, SessionConfig, DEFAULT_POLL_INTERVAL_US};
pub use test_config::{
    address_in_range, Direction, TestConfiguration, MAX_LONG_ADDRESS, MAX_SHORT_ADDRESS,
};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
