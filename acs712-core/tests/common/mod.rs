//! Common test utilities for integration tests
//!
//! This module provides:
//! - A reference configuration (5 V, 10-bit ADC, 20 A part)
//! - Sensor builders over scripted sources and step clocks
//! - Waveform script generators
//! - Expected-value helpers mirroring the conversion formulas

#![allow(dead_code)]

use acs712_core::{
    source::ScriptedSource, time::StepClock, CurrentSensor, SensorConfig,
};

/// Arduino Uno style setup
pub const SUPPLY_VOLTS: f32 = 5.0;
pub const MAX_ADC: u16 = 1023;
pub const MV_PER_AMPERE: u16 = 100;

/// `MAX_ADC / 2`
pub const MIDPOINT: u16 = 511;

/// 100 µs per clock query gives 199 samples in a 50 Hz window
pub const STEP_US: u64 = 100;

pub type TestSensor<'a> = CurrentSensor<ScriptedSource<'a>, StepClock>;

pub fn uno_config() -> SensorConfig {
    SensorConfig::new(SUPPLY_VOLTS, MAX_ADC, MV_PER_AMPERE)
}

pub fn sensor_with(script: &[u16], step_us: u64) -> TestSensor<'_> {
    sensor_with_config(script, step_us, uno_config())
}

pub fn sensor_with_config(script: &[u16], step_us: u64, config: SensorConfig) -> TestSensor<'_> {
    CurrentSensor::new(ScriptedSource::new(script), 0, StepClock::new(0, step_us), config)
}

/// DC milliamps for `steps` away from the midpoint, same operation order as
/// the driver
pub fn expected_dc(steps: i32, sensor: &TestSensor<'_>) -> i32 {
    (1000.0 * steps as f32 * sensor.mv_per_step() / sensor.mv_per_ampere() as f32) as i32
}

/// AC milliamps before truncation
pub fn expected_ac(peak_to_peak: u16, form_factor: f32, sensor: &TestSensor<'_>) -> f32 {
    1000.0 * 0.5 * peak_to_peak as f32 * sensor.mv_per_step() * form_factor
        / sensor.mv_per_ampere() as f32
}

/// Alternates `mid + amplitude`, `mid - amplitude`; never near zero
pub fn square_wave(mid: u16, amplitude: u16) -> Vec<u16> {
    vec![mid + amplitude, mid - amplitude]
}

/// One sampled sine cycle around `mid`
pub fn sine_cycle(mid: u16, amplitude: u16, samples_per_cycle: usize) -> Vec<u16> {
    (0..samples_per_cycle)
        .map(|k| {
            let angle = 2.0 * core::f32::consts::PI * k as f32 / samples_per_cycle as f32;
            let offset = libm::roundf(amplitude as f32 * libm::sinf(angle));
            (mid as f32 + offset) as u16
        })
        .collect()
}

/// Sine cycle with the negative half clipped to the midpoint, like a
/// half-wave rectified load
pub fn half_wave_cycle(mid: u16, amplitude: u16, samples_per_cycle: usize) -> Vec<u16> {
    sine_cycle(mid, amplitude, samples_per_cycle)
        .into_iter()
        .map(|v| v.max(mid))
        .collect()
}

#[macro_export]
macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let diff = ($actual - $expected).abs();
        if diff > $tolerance {
            panic!(
                "Value {} not within tolerance {} of expected {} (diff: {})",
                $actual, $tolerance, $expected, diff
            );
        }
    };
}
