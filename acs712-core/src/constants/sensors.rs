//! ACS712 Specifications and Waveform Heuristics
//!
//! Values taken from the Allegro ACS712 datasheet plus the constants used by
//! the AC form-factor heuristic.

use core::f32::consts::FRAC_1_SQRT_2;

// ===== SENSITIVITY =====

/// Sensitivity of the ±5 A variant (mV per ampere).
///
/// Source: ACS712ELCTR-05B-T datasheet
pub const MV_PER_AMPERE_5A: u16 = 185;

/// Sensitivity of the ±20 A variant (mV per ampere).
///
/// Source: ACS712ELCTR-20A-T datasheet
pub const MV_PER_AMPERE_20A: u16 = 100;

/// Sensitivity of the ±30 A variant (mV per ampere).
///
/// Source: ACS712ELCTR-30A-T datasheet
pub const MV_PER_AMPERE_30A: u16 = 66;

// ===== NOISE =====

/// Output noise floor of the sensor (mV).
///
/// Samples closer than this to the midpoint are counted as "zero" by the
/// AC measurement.
///
/// Source: ACS712 datasheet, typical output noise
pub const NOISE_MV: u16 = 21;

// ===== WAVEFORM =====

/// Form factor of an ideal sinusoid, 1/√2.
///
/// Scales half the peak-to-peak swing to an RMS value.
pub const SINE_FORM_FACTOR: f32 = FRAC_1_SQRT_2;

/// Fraction of near-zero samples above which the waveform is treated as
/// having a flat region.
///
/// At or below 2.5% the signal is assumed to be a clean sinusoid.
pub const ZERO_FRACTION_THRESHOLD: f32 = 0.025;

// ===== ADC =====

/// Full-scale raw value of a 10-bit converter (AVR, ESP8266).
pub const ADC_MAX_10_BIT: u16 = 1023;

/// Full-scale raw value of a 12-bit converter (ESP32, STM32, RP2040).
pub const ADC_MAX_12_BIT: u16 = 4095;

/// Millivolts per volt.
pub const MV_PER_VOLT: f32 = 1000.0;

/// Milliamps per ampere.
pub const MA_PER_AMPERE: f32 = 1000.0;
