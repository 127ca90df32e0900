//! Time-Related Constants
//!
//! Sampling windows and calibration bounds used by the measurement loops.

// ===== TIME UNIT CONVERSIONS =====

/// Microseconds per millisecond.
pub const US_PER_MS: u32 = 1000;

// ===== AC SAMPLING WINDOWS =====

/// One full 60 Hz mains period (microseconds).
///
/// Rounded up from 16 666.7 µs so the window never closes before the cycle
/// does.
pub const PERIOD_60HZ_US: u32 = 16_670;

/// One full 50 Hz mains period (microseconds).
///
/// Used for every line frequency other than 60 Hz.
pub const PERIOD_50HZ_US: u32 = 20_000;

// ===== CALIBRATION =====

/// Shortest midpoint calibration window (milliseconds).
///
/// Two 50 Hz cycles, so ripple on the zero-current output averages out.
pub const CALIBRATION_MIN_MS: u32 = 40;

/// Longest midpoint calibration window (milliseconds).
///
/// Bounded to the 16-bit range of the original millisecond argument.
pub const CALIBRATION_MAX_MS: u32 = 0xFFFF;

/// Calibration window used when the caller has no preference (milliseconds).
pub const CALIBRATION_DEFAULT_MS: u32 = 100;

/// Running-sum ceiling for the calibration accumulator.
///
/// Sampling stops as soon as the total reaches this value. One more 16-bit
/// reading on top of it still fits in a `u32`.
pub const CALIBRATION_TOTAL_LIMIT: u32 = 0xFFFF_0000;
