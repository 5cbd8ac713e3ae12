//! Error types for trapezoid-motion library.
//!
//! Provides unified error handling across configuration, profile solving, and rendering.

use core::fmt;

use crate::motion::Parameter;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all trapezoid-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motion profile computation error
    Motion(MotionError),
    /// Renderer rejected a draw request
    Render(heapless::String<128>),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Control range is empty or inverted (min must be < max)
    InvalidRange {
        /// Control the range belongs to
        parameter: Parameter,
        /// Minimum value
        min: f64,
        /// Maximum value
        max: f64,
    },
    /// Control minimum must be > 0 so the solver can never see a zero limit
    NonPositiveMinimum {
        /// Control the minimum belongs to
        parameter: Parameter,
        /// Configured minimum
        min: f64,
    },
    /// Initial control value lies outside its range
    InitialOutOfRange {
        /// Control the value belongs to
        parameter: Parameter,
        /// Configured initial value
        initial: f64,
    },
    /// Control value rejected by the `reject` bound policy
    ValueOutOfRange {
        /// Control being set
        parameter: Parameter,
        /// Requested value
        value: f64,
        /// Minimum allowed value
        min: f64,
        /// Maximum allowed value
        max: f64,
    },
    /// Axis range is empty or inverted
    InvalidAxisRange {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
    /// Samples per phase must be between 2 and the buffer capacity
    InvalidSampleCount(usize),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motion profile errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Input parameter is zero, negative, or not finite
    InvalidParameter {
        /// Offending parameter
        parameter: Parameter,
        /// Supplied value
        value: f64,
    },
    /// Clamped max velocity collapsed to zero (every phase duration divides by it)
    InvalidEffectiveVelocity(f64),
}

impl Error {
    /// Check whether this error reports an unusable solver input.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Error::Motion(MotionError::InvalidParameter { .. })
                | Error::Motion(MotionError::InvalidEffectiveVelocity(_))
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
            Error::Render(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidRange { parameter, min, max } => {
                write!(f, "Invalid range for {}: min ({}) must be < max ({})", parameter, min, max)
            }
            ConfigError::NonPositiveMinimum { parameter, min } => {
                write!(f, "Invalid minimum for {}: {}. Must be > 0", parameter, min)
            }
            ConfigError::InitialOutOfRange { parameter, initial } => {
                write!(f, "Initial value {} for {} is outside its range", initial, parameter)
            }
            ConfigError::ValueOutOfRange { parameter, value, min, max } => {
                write!(f, "Value {} for {} outside [{}, {}]", value, parameter, min, max)
            }
            ConfigError::InvalidAxisRange { min, max } => {
                write!(f, "Invalid axis range: min ({}) must be < max ({})", min, max)
            }
            ConfigError::InvalidSampleCount(n) => {
                write!(f, "Invalid samples per phase: {}. Must be 2-{}", n, crate::explorer::MAX_SAMPLES_PER_PHASE)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::InvalidParameter { parameter, value } => {
                write!(f, "Invalid {}: {}. Must be a finite value > 0", parameter, value)
            }
            MotionError::InvalidEffectiveVelocity(v) => {
                write!(f, "Effective max velocity {} is not > 0", v)
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

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}
