//! Midpoint calibration helpers
//!
//! The zero-current output of a Hall sensor biased from a single rail sits
//! near half supply, but rarely exactly there. Averaging the output for a
//! few mains cycles with no load attached gives the real baseline.

use crate::constants::time::{CALIBRATION_MAX_MS, CALIBRATION_MIN_MS, CALIBRATION_TOTAL_LIMIT};

/// Clamp a requested calibration window into `[40, 65535]` ms
#[inline]
pub fn clamp_calibration_ms(duration_ms: u32) -> u32 {
    duration_ms.clamp(CALIBRATION_MIN_MS, CALIBRATION_MAX_MS)
}

/// Sum and count of raw readings taken with no current flowing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MidpointAccumulator {
    total: u32,
    samples: u32,
}

impl MidpointAccumulator {
    /// Empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the running sum reached the overflow guard
    ///
    /// Once saturated no further readings should be pushed.
    pub fn is_saturated(&self) -> bool {
        self.total >= CALIBRATION_TOTAL_LIMIT
    }

    /// Add one raw reading
    pub fn push(&mut self, reading: u16) {
        self.total += reading as u32;
        self.samples += 1;
    }

    /// Sum of all readings pushed so far
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Number of readings pushed so far
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Integer mean of the readings, `None` when empty
    pub fn mean(&self) -> Option<u16> {
        if self.samples == 0 {
            return None;
        }
        // Mean of u16 values always fits
        Some((self.total / self.samples) as u16)
    }
}
