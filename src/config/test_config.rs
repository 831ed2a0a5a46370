//! Per-run throttle configuration.

use serde::Deserialize;

use crate::speed::StepMode;

/// Highest short (primary) address.
pub const MAX_SHORT_ADDRESS: u16 = 127;

/// Highest long (extended) address.
pub const MAX_LONG_ADDRESS: u16 = 10239;

/// Check an address against the range for its length.
#[inline]
pub fn address_in_range(address: u16, long: bool) -> bool {
    if long {
        address <= MAX_LONG_ADDRESS
    } else {
        address <= MAX_SHORT_ADDRESS
    }
}

/// Direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Forward.
    #[default]
    Forward,
    /// Reverse.
    Reverse,
}

impl Direction {
    /// Whether this is forward.
    #[inline]
    pub fn is_forward(self) -> bool {
        self == Direction::Forward
    }

    /// Status line token ("FWD" / "REV").
    #[inline]
    pub fn token(self) -> &'static str {
        match self {
            Direction::Forward => "FWD",
            Direction::Reverse => "REV",
        }
    }
}

impl From<bool> for Direction {
    fn from(forward: bool) -> Self {
        if forward {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }
}

/// Throttle settings a procedure runs with.
///
/// Every run starts from a fresh copy of the runner's defaults; procedures set
/// each field they depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TestConfiguration {
    /// Decoder address.
    pub address: u16,

    /// Whether `address` is a long (extended) address.
    #[serde(rename = "long_address")]
    pub address_is_long: bool,

    /// Speed step mode.
    pub step_mode: StepMode,

    /// Direction of travel.
    pub direction: Direction,
}

impl Default for TestConfiguration {
    fn default() -> Self {
        Self {
            address: 3,
            address_is_long: false,
            step_mode: StepMode::TwentyEight,
            direction: Direction::Forward,
        }
    }
}

impl TestConfiguration {
    /// Set a short address.
    pub fn short_address(&mut self, address: u16) -> &mut Self {
        self.address = address;
        self.address_is_long = false;
        self
    }

    /// Set a long address.
    pub fn long_address(&mut self, address: u16) -> &mut Self {
        self.address = address;
        self.address_is_long = true;
        self
    }

    /// Set the step mode.
    pub fn step_mode(&mut self, mode: StepMode) -> &mut Self {
        self.step_mode = mode;
        self
    }

    /// Set the direction.
    pub fn direction(&mut self, direction: Direction) -> &mut Self {
        self.direction = direction;
        self
    }
}
