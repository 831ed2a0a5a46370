//! Normalized throttle setpoint.

use crate::error::SetpointError;

/// Proportional throttle setpoint in `[0.0, 1.0]`, or the ESTOP sentinel `-1.0`.
///
/// Construction validates the domain, so a `Setpoint` can always be handed to
/// an actuator as is.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Setpoint(f32);

impl Setpoint {
    /// Stop.
    pub const STOP: Self = Self(0.0);
    /// Full proportional speed.
    pub const FULL: Self = Self(1.0);
    /// Emergency stop sentinel.
    pub const ESTOP: Self = Self(-1.0);

    /// Create a setpoint, rejecting values outside `[0.0, 1.0] ∪ {-1.0}`.
    ///
    /// # Errors
    ///
    /// Returns `SetpointError::OutOfRange` for any other value, including NaN.
    pub fn new(value: f32) -> Result<Self, SetpointError> {
        if Self::is_valid(value) {
            Ok(Self(value))
        } else {
            Err(SetpointError::OutOfRange(value))
        }
    }

    /// Check whether a raw value is an acceptable setpoint.
    #[inline]
    pub fn is_valid(value: f32) -> bool {
        value == -1.0 || (0.0..=1.0).contains(&value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Whether this is the emergency stop sentinel.
    #[inline]
    pub fn is_estop(self) -> bool {
        self.0 == -1.0
    }
}

impl TryFrom<f32> for Setpoint {
    type Error = SetpointError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
