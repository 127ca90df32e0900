//! Constants for the ACS712 driver
//!
//! Centralized, documented constants. Every numeric value the measurement
//! code relies on lives here with its unit in the name.
//!
//! ## Organization
//!
//! - **Sensors**: datasheet sensitivities, noise floor, waveform heuristics
//! - **Time**: sampling windows and calibration bounds

/// Sensor specifications and waveform heuristic thresholds.
pub mod sensors;

/// Sampling periods, calibration limits and unit conversions.
pub mod time;

// Re-export commonly used constants for convenience
pub use sensors::{
    MV_PER_AMPERE_5A, MV_PER_AMPERE_20A, MV_PER_AMPERE_30A,
    NOISE_MV, SINE_FORM_FACTOR, ZERO_FRACTION_THRESHOLD,
    ADC_MAX_10_BIT, ADC_MAX_12_BIT,
};

pub use time::{
    PERIOD_50HZ_US, PERIOD_60HZ_US,
    CALIBRATION_MIN_MS, CALIBRATION_MAX_MS, CALIBRATION_DEFAULT_MS,
    CALIBRATION_TOTAL_LIMIT,
};
