//! Session configuration - root configuration structure.

use serde::Deserialize;

use super::test_config::TestConfiguration;

/// Default sleep between operator flag checks, in microseconds.
pub const DEFAULT_POLL_INTERVAL_US: u32 = 1000;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    /// Configuration every run starts from.
    #[serde(default)]
    pub defaults: TestConfiguration,

    /// Operator input settings.
    #[serde(default)]
    pub operator: OperatorConfig,

    /// Default addresses offered by the address range prompt.
    #[serde(default)]
    pub address_range: AddressRange,
}

/// Operator input settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OperatorConfig {
    /// Sleep between flag checks when polling an `OperatorSignal`.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_us: u32,
}

fn default_poll_interval() -> u32 {
    DEFAULT_POLL_INTERVAL_US
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            poll_interval_us: DEFAULT_POLL_INTERVAL_US,
        }
    }
}

/// First, mid and last documented decoder addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AddressRange {
    /// First documented address.
    pub first: u16,
    /// Mid documented address.
    pub mid: u16,
    /// Last documented address.
    pub last: u16,
}

impl Default for AddressRange {
    fn default() -> Self {
        Self {
            first: 1,
            mid: 63,
            last: 127,
        }
    }
}

impl AddressRange {
    /// Addresses in prompt order.
    #[inline]
    pub fn as_array(&self) -> [u16; 3] {
        [self.first, self.mid, self.last]
    }
}
