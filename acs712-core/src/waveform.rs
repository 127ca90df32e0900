//! AC waveform statistics and the adaptive form factor
//!
//! ## Form Factor Heuristic
//!
//! RMS current is estimated from the peak-to-peak swing of one mains period:
//!
//! ```text
//! I_rms = ½ · p2p · form_factor
//! ```
//!
//! For a clean sinusoid the form factor is 1/√2. Phase-cut or rectified
//! loads (dimmers, chargers) sit at zero for part of each cycle, so the
//! window also counts samples inside the noise band around the midpoint:
//!
//! ```text
//! zero_fraction = zeros / samples
//!
//! zero_fraction > 0.025:  form_factor = √(1 − zero_fraction) · 1/√2
//! otherwise:              form_factor = 1/√2
//! ```
//!
//! This assumes the non-zero part of the wave is itself sinusoidal. It is a
//! heuristic, not an exact RMS estimator, and it is known to be off for
//! heavily clipped or distorted waveforms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use fugit::MicrosDurationU32;

use crate::constants::{
    sensors::{SINE_FORM_FACTOR, ZERO_FRACTION_THRESHOLD},
    time::{PERIOD_50HZ_US, PERIOD_60HZ_US},
};

/// Mains frequency the AC window is sized for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineFrequency {
    /// 50 Hz mains (also the fallback)
    #[default]
    Hz50,
    /// 60 Hz mains
    Hz60,
}

impl LineFrequency {
    /// Length of one full cycle
    pub fn period(self) -> MicrosDurationU32 {
        match self {
            Self::Hz50 => MicrosDurationU32::micros(PERIOD_50HZ_US),
            Self::Hz60 => MicrosDurationU32::micros(PERIOD_60HZ_US),
        }
    }

    /// Nominal frequency in hertz
    pub fn hz(self) -> u16 {
        match self {
            Self::Hz50 => 50,
            Self::Hz60 => 60,
        }
    }
}

/// 60 selects 60 Hz; every other value selects 50 Hz
impl From<u16> for LineFrequency {
    fn from(hz: u16) -> Self {
        if hz == 60 {
            Self::Hz60
        } else {
            Self::Hz50
        }
    }
}

/// Noise floor expressed in raw ADC steps
#[inline]
pub fn noise_band_steps(noise_mv: u16, mv_per_step: f32) -> f32 {
    noise_mv as f32 / mv_per_step
}

/// Form factor for a window with the given fraction of near-zero samples
pub fn form_factor(zero_fraction: f32) -> f32 {
    if zero_fraction > ZERO_FRACTION_THRESHOLD {
        let duty = 1.0 - zero_fraction;
        libm::sqrtf(duty) * SINE_FORM_FACTOR
    } else {
        SINE_FORM_FACTOR
    }
}

/// Running statistics for one AC sampling window
///
/// Seeded with a first reading that sets min and max but is not counted as a
/// sample and is never tested against the noise band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveformStats {
    min: u16,
    max: u16,
    zeros: u32,
    samples: u32,
}

impl WaveformStats {
    /// Start a window with its seed reading
    pub fn seeded(first: u16) -> Self {
        Self {
            min: first,
            max: first,
            zeros: 0,
            samples: 0,
        }
    }

    /// Fold one reading in
    ///
    /// `noise_band` is in raw steps; a reading within it of `midpoint`
    /// (inclusive) counts as a zero.
    pub fn record(&mut self, value: u16, midpoint: u16, noise_band: f32) {
        self.samples += 1;
        self.min = self.min.min(value);
        self.max = self.max.max(value);

        let deviation = (value as i32 - midpoint as i32).unsigned_abs();
        if deviation as f32 <= noise_band {
            self.zeros += 1;
        }
    }

    /// Raw swing `max - min`
    pub fn peak_to_peak(&self) -> u16 {
        self.max - self.min
    }

    /// `None` until at least one sample was recorded
    pub fn zero_fraction(&self) -> Option<f32> {
        if self.samples == 0 {
            return None;
        }
        Some(self.zeros as f32 / self.samples as f32)
    }

    /// Lowest reading, seed included
    pub fn min(&self) -> u16 {
        self.min
    }

    /// Highest reading, seed included
    pub fn max(&self) -> u16 {
        self.max
    }

    /// Samples inside the noise band
    pub fn zeros(&self) -> u32 {
        self.zeros
    }

    /// Samples recorded, seed excluded
    pub fn samples(&self) -> u32 {
        self.samples
    }
}
