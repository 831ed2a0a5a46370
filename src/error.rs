//! Error types for dcs-conformance.
//!
//! Provides unified error handling across configuration, the test registry and
//! the test runner. Actuator acquisition failures and rejected setpoints have
//! their own types because they are recovered inside a running procedure.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all caller-visible dcs-conformance operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Test registry population or lookup error
    Registry(RegistryError),
    /// Test runner error
    Runner(RunnerError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Step mode is not one of 14, 28 or 128
    InvalidStepMode(u16),
    /// Address outside the range allowed for its length
    InvalidAddress {
        /// Requested address
        address: u16,
        /// Whether the address is a long (extended) address
        long: bool,
    },
    /// Operator poll interval must be greater than zero
    InvalidPollInterval(u32),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Test registry errors.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// No test is registered under this display name
    NotFound(heapless::String<64>),
    /// Two identifiers produce the same display name
    DuplicateName(heapless::String<64>),
    /// Identifier does not start with the `test_` prefix
    InvalidIdentifier(heapless::String<64>),
    /// Identifier or display name does not fit the name buffer
    NameTooLong,
    /// Registry capacity exhausted
    Full,
}

/// Test runner errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerError {
    /// A test is already running on this runner
    AlreadyRunning,
}

/// The actuator could not be bound to an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcquisitionError {
    /// Address that was requested
    pub address: u16,
    /// Whether a long address was requested
    pub long: bool,
}

/// Setpoint outside `[0.0, 1.0]` and not the ESTOP sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetpointError {
    /// Value is outside the accepted domain
    OutOfRange(f32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Registry(e) => write!(f, "Registry error: {}", e),
            Error::Runner(e) => write!(f, "Runner error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidStepMode(v) => {
                write!(f, "Invalid step mode: {}. Valid values: 14, 28, 128", v)
            }
            ConfigError::InvalidAddress { address, long } => {
                let (kind, max) = if *long { ("long", 10239) } else { ("short", 127) };
                write!(f, "Invalid {} address: {}. Must be 0-{}", kind, address, max)
            }
            ConfigError::InvalidPollInterval(v) => {
                write!(f, "Invalid poll interval: {} us. Must be > 0", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::NotFound(name) => write!(f, "Test '{}' not found", name),
            RegistryError::DuplicateName(name) => write!(f, "Duplicate test name: '{}'", name),
            RegistryError::InvalidIdentifier(id) => {
                write!(f, "Invalid test identifier '{}': must start with 'test_'", id)
            }
            RegistryError::NameTooLong => write!(f, "Test name too long"),
            RegistryError::Full => write!(f, "Test registry full"),
        }
    }
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerError::AlreadyRunning => write!(f, "A test is already running"),
        }
    }
}

impl fmt::Display for AcquisitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.long { "long" } else { "short" };
        write!(f, "Couldn't assign throttle to {} address {}", kind, self.address)
    }
}

impl fmt::Display for SetpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetpointError::OutOfRange(v) => {
                write!(f, "Setpoint {} outside [0.0, 1.0] and not ESTOP (-1.0)", v)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<RegistryError> for Error {
    fn from(e: RegistryError) -> Self {
        Error::Registry(e)
    }
}

impl From<RunnerError> for Error {
    fn from(e: RunnerError) -> Self {
        Error::Runner(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for RegistryError {}

#[cfg(feature = "std")]
impl std::error::Error for RunnerError {}

#[cfg(feature = "std")]
impl std::error::Error for AcquisitionError {}

#[cfg(feature = "std")]
impl std::error::Error for SetpointError {}
