//! Sensor electrical configuration
//!
//! Everything the conversions need that is fixed at construction time: the
//! ADC reference and resolution, the sensor variant's sensitivity, and the
//! noise floor used to spot zero crossings.
//!
//! Nothing here is validated on construction. [`SensorConfig::validate`] is
//! run by each measurement instead, so a bad configuration surfaces as
//! [`SensorError::InvalidConfiguration`] the first time it is used.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::sensors::{
        MV_PER_AMPERE_20A, MV_PER_AMPERE_30A, MV_PER_AMPERE_5A, MV_PER_VOLT, NOISE_MV,
    },
    errors::{SensorError, SensorResult},
};

/// ACS712 part variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Acs712Variant {
    /// ACS712ELCTR-05B, ±5 A
    Amps5,
    /// ACS712ELCTR-20A, ±20 A
    Amps20,
    /// ACS712ELCTR-30A, ±30 A
    Amps30,
}

impl Acs712Variant {
    /// Datasheet sensitivity in mV per ampere
    pub fn mv_per_ampere(self) -> u16 {
        match self {
            Self::Amps5 => MV_PER_AMPERE_5A,
            Self::Amps20 => MV_PER_AMPERE_20A,
            Self::Amps30 => MV_PER_AMPERE_30A,
        }
    }

    /// Rated full-scale current in amperes
    pub fn max_amps(self) -> u8 {
        match self {
            Self::Amps5 => 5,
            Self::Amps20 => 20,
            Self::Amps30 => 30,
        }
    }
}

/// Construction-time constants for one sensor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorConfig {
    /// ADC reference / sensor supply voltage in volts
    pub supply_volts: f32,

    /// Largest raw value the ADC returns (1023 for 10 bits)
    pub max_adc: u16,

    /// Sensor sensitivity in mV per ampere
    pub mv_per_ampere: u16,

    /// Noise floor in mV; readings this close to the midpoint count as zero
    pub noise_mv: u16,
}

impl SensorConfig {
    /// Configuration with the datasheet noise floor
    pub fn new(supply_volts: f32, max_adc: u16, mv_per_ampere: u16) -> Self {
        Self {
            supply_volts,
            max_adc,
            mv_per_ampere,
            noise_mv: NOISE_MV,
        }
    }

    /// Configuration using the sensitivity of a known part
    pub fn for_variant(variant: Acs712Variant, supply_volts: f32, max_adc: u16) -> Self {
        Self::new(supply_volts, max_adc, variant.mv_per_ampere())
    }

    /// Millivolts represented by one raw ADC step
    ///
    /// Infinite when `max_adc` is 0; [`validate`](Self::validate) rejects that.
    pub fn mv_per_step(&self) -> f32 {
        MV_PER_VOLT * self.supply_volts / self.max_adc as f32
    }

    /// Raw reading at the centre of the ADC range
    pub fn center(&self) -> u16 {
        self.max_adc / 2
    }

    /// Check the constants the conversions divide by
    pub fn validate(&self) -> SensorResult<()> {
        if self.mv_per_ampere == 0 {
            return Err(SensorError::InvalidConfiguration {
                reason: "sensitivity (mV/A) must be non-zero",
            });
        }

        if self.max_adc == 0 {
            return Err(SensorError::InvalidConfiguration {
                reason: "ADC range must be non-zero",
            });
        }

        // Also catches NaN
        if !(self.supply_volts.is_finite() && self.supply_volts > 0.0) {
            return Err(SensorError::InvalidConfiguration {
                reason: "supply voltage must be positive",
            });
        }

        Ok(())
    }
}
