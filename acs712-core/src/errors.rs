//! Error Types for Current Measurement Failures
//!
//! ## Design Philosophy
//!
//! The sensor runs inside tight polling loops on small microcontrollers, so
//! errors follow the same rules as the rest of the crate:
//!
//! 1. **Small Size**: Variants carry at most two integers or one static string.
//!    Errors are returned from the measurement hot path.
//!
//! 2. **No Heap Allocation**: Messages are `&'static str`, never `String`.
//!
//! 3. **Copy Semantics**: Errors implement `Copy` so they can be returned and
//!    stored without ownership juggling.
//!
//! ## Error Categories
//!
//! ### Configuration Problems
//! - `InvalidConfiguration`: the electrical constants would lead to a division
//!   by zero or a meaningless step size (zero mV/A, zero ADC range, 0 V supply)
//!
//! ### Sampling Problems
//! - `InsufficientSamples`: a sampling window closed before a single sample was
//!   taken, usually a clock that jumps or a window far shorter than one read
//!
//! ### Hardware Problems
//! - `ReadFailed`: the analog source could not produce a conversion
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use acs712_core::{SensorError, SensorResult};
//!
//! fn report(result: SensorResult<i32>) {
//!     match result {
//!         Ok(milliamps) => {
//!             // publish(milliamps);
//!         }
//!         Err(SensorError::InvalidConfiguration { .. }) => {
//!             // Fix the constants passed at construction time
//!         }
//!         Err(SensorError::InsufficientSamples { .. }) => {
//!             // Retry, or check the clock source
//!         }
//!         Err(SensorError::ReadFailed) => {
//!             // ADC peripheral problem
//!         }
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for sensor operations
pub type SensorResult<T> = Result<T, SensorError>;

/// Sensor errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Electrical constants cannot produce a meaningful conversion
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Which constant was rejected
        reason: &'static str,
    },

    /// A sampling window produced fewer samples than the computation needs
    #[error("Insufficient samples: need {required}, have {available}")]
    InsufficientSamples {
        /// Minimum number of samples needed
        required: u32,
        /// Samples actually collected in the window
        available: u32,
    },

    /// The analog source reported a conversion failure
    #[error("Analog read failed")]
    ReadFailed,
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidConfiguration { reason } =>
                defmt::write!(fmt, "Invalid configuration: {}", reason),
            Self::InsufficientSamples { required, available } =>
                defmt::write!(fmt, "Need {} samples, have {}", required, available),
            Self::ReadFailed =>
                defmt::write!(fmt, "Analog read failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_stay_small() {
        assert!(core::mem::size_of::<SensorError>() <= 24);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_includes_context() {
        let err = SensorError::InsufficientSamples { required: 1, available: 0 };
        assert_eq!(err.to_string(), "Insufficient samples: need 1, have 0");

        let err = SensorError::InvalidConfiguration { reason: "mV/A must be non-zero" };
        assert_eq!(err.to_string(), "Invalid configuration: mV/A must be non-zero");
    }
}
