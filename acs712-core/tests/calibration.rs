//! Integration tests for midpoint auto-calibration
//!
//! Tests averaging, duration clamping, the accumulator overflow guard,
//! millisecond wraparound and empty windows.

mod common;

use acs712_core::{
    source::ScriptedSource, time::StepClock, CurrentSensor, SensorConfig, SensorError,
};

use common::*;

/// 1 ms per clock query: a window of N ms yields N - 1 readings
const STEP_1MS: u64 = 1_000;

#[test]
fn test_midpoint_is_mean_of_readings() {
    let script = [510, 512, 514];
    let mut sensor = sensor_with(&script, STEP_1MS);

    assert_eq!(sensor.calibrate_midpoint(40), Ok(512));
    // 39 readings, 13 of each value
    assert_eq!(sensor.source().reads(), 39);
    assert_eq!(sensor.midpoint(), 512);
}

#[test]
fn test_mean_uses_integer_division() {
    // 20 × 500 + 19 × 501 = 19_519; / 39 = 500.49
    let script = [500, 501];
    let mut sensor = sensor_with(&script, STEP_1MS);

    assert_eq!(sensor.calibrate_midpoint(40), Ok(500));
}

#[test]
fn test_short_duration_clamped_to_forty_ms() {
    let script = [505];
    let mut short = sensor_with(&script, STEP_1MS);
    let mut minimum = sensor_with(&script, STEP_1MS);

    short.calibrate_midpoint(5).unwrap();
    minimum.calibrate_midpoint(40).unwrap();

    assert_eq!(short.source().reads(), 39);
    assert_eq!(short.source().reads(), minimum.source().reads());
}

#[test]
fn test_long_duration_clamped_to_u16_range() {
    let script = [505];
    let mut long = sensor_with(&script, STEP_1MS);
    let mut maximum = sensor_with(&script, STEP_1MS);

    long.calibrate_midpoint(100_000).unwrap();
    maximum.calibrate_midpoint(65_535).unwrap();

    assert_eq!(long.source().reads(), 65_534);
    assert_eq!(long.source().reads(), maximum.source().reads());
    assert_eq!(long.midpoint(), 505);
}

#[test]
fn test_overflow_guard_stops_sampling() {
    // Full-scale 16-bit readings hit 0xFFFF_0000 after exactly 65_536 samples,
    // well before the 65 535 ms window closes at 0.5 ms per query
    let script = [u16::MAX];
    let mut sensor = sensor_with(&script, 500);

    assert_eq!(sensor.calibrate_midpoint(65_535), Ok(u16::MAX));
    assert_eq!(sensor.source().reads(), 65_536);
}

#[test]
fn test_empty_window_keeps_previous_midpoint() {
    let script = [600];
    let mut sensor = sensor_with(&script, 40_000);

    let result = sensor.calibrate_midpoint(40);

    assert_eq!(
        result,
        Err(SensorError::InsufficientSamples { required: 1, available: 0 })
    );
    assert_eq!(sensor.midpoint(), MIDPOINT);
    assert_eq!(sensor.source().reads(), 0);
}

#[test]
fn test_window_across_millis_wraparound() {
    let script = [498];
    let start_us = (u32::MAX as u64 - 10) * 1_000;
    let mut sensor = CurrentSensor::new(
        ScriptedSource::new(&script),
        0,
        StepClock::new(start_us, STEP_1MS),
        uno_config(),
    );

    assert_eq!(sensor.calibrate_midpoint(40), Ok(498));
    assert_eq!(sensor.source().reads(), 39);
}

#[test]
fn test_calibration_is_repeatable() {
    let script = [507, 509];
    let mut sensor = sensor_with(&script, STEP_1MS);

    // 40 readings per run, 20 of each value
    let first = sensor.calibrate_midpoint(41).unwrap();
    let second = sensor.calibrate_midpoint(41).unwrap();

    assert_eq!(first, 508);
    assert_eq!(second, 508);
}

#[test]
fn test_dc_zero_after_calibration() {
    let script = [523];
    let mut sensor = sensor_with(&script, STEP_1MS);

    sensor.calibrate_midpoint(40).unwrap();

    assert_eq!(sensor.midpoint(), 523);
    assert_eq!(sensor.measure_dc_milliamps(), Ok(0));
}

#[test]
fn test_calibration_ignores_sensitivity() {
    // Calibration never divides by mV/A, so a bad sensitivity only fails
    // the measurements
    let script = [515];
    let config = SensorConfig::new(SUPPLY_VOLTS, MAX_ADC, 0);
    let mut sensor = sensor_with_config(&script, STEP_1MS, config);

    assert_eq!(sensor.calibrate_midpoint(40), Ok(515));
    assert!(sensor.measure_dc_milliamps().is_err());
}
