//! Speed step mode (quantization resolution).

use serde::Deserialize;

use crate::error::ConfigError;

/// Discretization resolution used to quantize the throttle range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepMode {
    /// 14 speed steps.
    Fourteen,
    /// 28 speed steps.
    #[default]
    TwentyEight,
    /// 128 speed steps (126 proportional steps plus stop and ESTOP).
    OneTwentyEight,
}

impl StepMode {
    /// Valid step mode values.
    const VALID_VALUES: [u16; 3] = [14, 28, 128];

    /// Create a step mode from its step count.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidStepMode` for anything but 14, 28 or 128.
    pub fn new(value: u16) -> Result<Self, ConfigError> {
        match value {
            14 => Ok(StepMode::Fourteen),
            28 => Ok(StepMode::TwentyEight),
            128 => Ok(StepMode::OneTwentyEight),
            other => Err(ConfigError::InvalidStepMode(other)),
        }
    }

    /// Number of speed steps in this mode.
    #[inline]
    pub const fn steps(self) -> u16 {
        match self {
            StepMode::Fourteen => 14,
            StepMode::TwentyEight => 28,
            StepMode::OneTwentyEight => 128,
        }
    }

    /// Check if a value names a supported step mode.
    #[inline]
    pub fn is_valid(value: u16) -> bool {
        Self::VALID_VALUES.contains(&value)
    }
}

impl TryFrom<u16> for StepMode {
    type Error = ConfigError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for StepMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = u16::deserialize(deserializer)?;
        StepMode::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}
