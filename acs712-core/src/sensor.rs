//! ACS712 current sensor
//!
//! Converts raw ADC readings of the sensor's output into milliamps.
//!
//! ## Conversions
//!
//! ```text
//! mV per step = 1000 · V_supply / max_adc
//!
//! DC:  mA = 1000 · (reading − midpoint) · mV_per_step / mV_per_A
//! AC:  mA = 1000 · ½ · (max − min) · mV_per_step · form_factor / mV_per_A
//! ```
//!
//! Results are computed in `f32` and truncated toward zero.
//!
//! ## Blocking
//!
//! Every operation busy-polls the analog source on the calling thread:
//! one mains period for AC, the requested window for calibration, two
//! conversions for DC. There is no cancellation. The sensor is not meant to
//! be shared between threads.

use crate::{
    calibration::{clamp_calibration_ms, MidpointAccumulator},
    config::SensorConfig,
    constants::sensors::{MA_PER_AMPERE, SINE_FORM_FACTOR},
    errors::{SensorError, SensorResult},
    sampling::PollWindow,
    traits::{AnalogSource, Clock},
    waveform::{form_factor, noise_band_steps, LineFrequency, WaveformStats},
};

const EMPTY_WINDOW: SensorError = SensorError::InsufficientSamples {
    required: 1,
    available: 0,
};

/// One ACS712 on one analog channel
///
/// `midpoint` starts at the centre of the ADC range and is replaced by
/// [`calibrate_midpoint`](Self::calibrate_midpoint). `form_factor` is
/// rewritten by every AC measurement.
///
/// ```rust
/// use acs712_core::{CurrentSensor, SensorConfig};
/// use acs712_core::source::ScriptedSource;
/// use acs712_core::time::StepClock;
///
/// // 10 steps above the 5 V / 10-bit centre on a 20 A part
/// let adc = ScriptedSource::new(&[521]);
/// let config = SensorConfig::new(5.0, 1023, 100);
/// let mut sensor = CurrentSensor::new(adc, 0, StepClock::new(0, 100), config);
///
/// assert_eq!(sensor.measure_dc_milliamps(), Ok(488));
/// ```
#[derive(Debug)]
pub struct CurrentSensor<S: AnalogSource, C: Clock> {
    source: S,
    channel: S::Channel,
    clock: C,
    config: SensorConfig,
    mv_per_step: f32,
    form_factor: f32,
    midpoint: u16,
}

impl<S: AnalogSource, C: Clock> CurrentSensor<S, C> {
    /// Bind a sensor to `channel` on `source`
    ///
    /// Never fails. The configuration is checked when a measurement runs.
    pub fn new(source: S, channel: S::Channel, clock: C, config: SensorConfig) -> Self {
        Self {
            source,
            channel,
            clock,
            mv_per_step: config.mv_per_step(),
            form_factor: SINE_FORM_FACTOR,
            midpoint: config.center(),
            config,
        }
    }

    /// RMS current of one mains cycle, in milliamps
    ///
    /// Samples for one full `line` period, then picks a form factor from
    /// the share of samples within the noise floor of the midpoint. The
    /// chosen factor is kept and can be read back with
    /// [`form_factor`](Self::form_factor).
    ///
    /// # Errors
    ///
    /// - [`SensorError::InvalidConfiguration`] before any sampling
    /// - [`SensorError::InsufficientSamples`] if the window closed before a
    ///   single sample; `form_factor` is left unchanged
    /// - any error from the analog source
    pub fn measure_ac_milliamps(&mut self, line: LineFrequency) -> SensorResult<i32> {
        self.checked_config()?;

        let noise_band = noise_band_steps(self.config.noise_mv, self.mv_per_step);
        let window = PollWindow::micros(&self.clock, line.period().ticks());

        let mut stats = WaveformStats::seeded(self.source.read(self.channel)?);
        while window.is_open() {
            let value = self.source.read(self.channel)?;
            stats.record(value, self.midpoint, noise_band);
        }

        let Some(zero_fraction) = stats.zero_fraction() else {
            log_warn!("AC window of {} us produced no samples", window.length());
            return Err(EMPTY_WINDOW);
        };
        self.form_factor = form_factor(zero_fraction);

        log_debug!(
            "AC {} Hz: p2p={} samples={} zeros={} ff={}",
            line.hz(),
            stats.peak_to_peak(),
            stats.samples(),
            stats.zeros(),
            self.form_factor
        );

        let peak_to_peak = stats.peak_to_peak() as f32;
        let sensitivity = self.config.mv_per_ampere as f32;
        let milliamps =
            MA_PER_AMPERE * 0.5 * peak_to_peak * self.mv_per_step * self.form_factor / sensitivity;
        Ok(milliamps as i32)
    }

    /// Instantaneous DC current, in milliamps
    ///
    /// Negative when current flows opposite to the calibrated direction.
    /// The first conversion is thrown away to let a multiplexed input
    /// settle.
    pub fn measure_dc_milliamps(&mut self) -> SensorResult<i32> {
        self.checked_config()?;

        let _ = self.source.read(self.channel)?;
        let reading = self.source.read(self.channel)?;

        let steps = reading as i32 - self.midpoint as i32;
        let milliamps =
            MA_PER_AMPERE * steps as f32 * self.mv_per_step / self.config.mv_per_ampere as f32;
        Ok(milliamps as i32)
    }

    /// Average the output with no current flowing and use it as the new
    /// midpoint
    ///
    /// `duration_ms` is clamped to `[40, 65535]`. Sampling also stops early
    /// once the running sum reaches the accumulator guard. Returns the new
    /// midpoint.
    ///
    /// # Errors
    ///
    /// [`SensorError::InsufficientSamples`] when no reading was taken; the
    /// previous midpoint is kept.
    pub fn calibrate_midpoint(&mut self, duration_ms: u32) -> SensorResult<u16> {
        let duration_ms = clamp_calibration_ms(duration_ms);
        let window = PollWindow::millis(&self.clock, duration_ms);

        let mut acc = MidpointAccumulator::new();
        while window.is_open() && !acc.is_saturated() {
            acc.push(self.source.read(self.channel)?);
        }

        if acc.is_saturated() {
            log_warn!(
                "Calibration stopped after {} samples to avoid overflow",
                acc.samples()
            );
        }

        let Some(midpoint) = acc.mean() else {
            log_warn!("Calibration window of {} ms produced no samples", duration_ms);
            return Err(EMPTY_WINDOW);
        };

        log_debug!(
            "Midpoint {} -> {} from {} samples",
            self.midpoint,
            midpoint,
            acc.samples()
        );
        self.midpoint = midpoint;
        Ok(midpoint)
    }

    fn checked_config(&self) -> SensorResult<()> {
        self.config.validate().map_err(|err| {
            log_warn!("Measurement rejected: {:?}", err);
            err
        })
    }

    /// Raw reading that corresponds to zero current
    pub fn midpoint(&self) -> u16 {
        self.midpoint
    }

    /// Override the midpoint, e.g. with a value restored from flash
    pub fn set_midpoint(&mut self, midpoint: u16) {
        self.midpoint = midpoint;
    }

    /// Nudge the midpoint up one step for manual trimming
    pub fn increment_midpoint(&mut self) {
        self.midpoint = self.midpoint.saturating_add(1);
    }

    /// Nudge the midpoint down one step
    pub fn decrement_midpoint(&mut self) {
        self.midpoint = self.midpoint.saturating_sub(1);
    }

    /// Form factor chosen by the last AC measurement (1/√2 before any)
    pub fn form_factor(&self) -> f32 {
        self.form_factor
    }

    /// Noise floor in mV
    pub fn noise_mv(&self) -> u16 {
        self.config.noise_mv
    }

    /// Sensitivity in mV per ampere
    pub fn mv_per_ampere(&self) -> u16 {
        self.config.mv_per_ampere
    }

    /// Millivolts per raw ADC step
    pub fn mv_per_step(&self) -> f32 {
        self.mv_per_step
    }

    /// Channel every read is taken on
    pub fn channel(&self) -> S::Channel {
        self.channel
    }

    /// Construction-time configuration
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// The injected analog source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the analog source, e.g. to reconfigure a mux
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The injected clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Give back the analog source and clock
    pub fn release(self) -> (S, C) {
        (self.source, self.clock)
    }
}
