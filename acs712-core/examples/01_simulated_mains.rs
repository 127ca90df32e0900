//! Simulated Mains Load
//!
//! Drives the driver on the host with a software "ADC" that synthesises the
//! ACS712 output for a 50 Hz load in real time. Shows:
//! - Midpoint calibration with the load switched off
//! - AC measurement for a resistive and a phase-cut (dimmer) load
//! - DC measurement
//!
//! Run: `cargo run --example 01_simulated_mains`

use core::f32::consts::PI;
use std::time::Instant;

use acs712_core::{
    constants::time::CALIBRATION_DEFAULT_MS, time::StdClock, Acs712Variant, AnalogSource,
    CurrentSensor, LineFrequency, SensorConfig, SensorResult,
};

/// What the simulated load is doing
#[derive(Clone, Copy, Debug)]
enum Load {
    Off,
    /// Steady current in amps
    Dc(f32),
    /// Sinusoidal current, RMS amps
    Resistive(f32),
    /// Sinusoid conducting only after `firing_angle` radians each half cycle
    PhaseCut { rms_full: f32, firing_angle: f32 },
}

/// 10-bit ADC watching an ACS712 output
struct SimulatedAdc {
    origin: Instant,
    load: Load,
    config: SensorConfig,
    /// Real sensors never sit exactly at half supply
    offset_steps: f32,
}

impl SimulatedAdc {
    fn amps_now(&self) -> f32 {
        let t = self.origin.elapsed().as_secs_f32();
        let phase = (2.0 * PI * 50.0 * t) % (2.0 * PI);

        match self.load {
            Load::Off => 0.0,
            Load::Dc(amps) => amps,
            Load::Resistive(rms) => rms * core::f32::consts::SQRT_2 * libm::sinf(phase),
            Load::PhaseCut { rms_full, firing_angle } => {
                let half_phase = phase % PI;
                if half_phase < firing_angle {
                    0.0
                } else {
                    rms_full * core::f32::consts::SQRT_2 * libm::sinf(phase)
                }
            }
        }
    }
}

impl AnalogSource for SimulatedAdc {
    type Channel = u8;

    fn read(&mut self, _channel: u8) -> SensorResult<u16> {
        let mv = self.amps_now() * self.config.mv_per_ampere as f32;
        let steps = self.config.center() as f32 + self.offset_steps + mv / self.config.mv_per_step();
        Ok(steps.clamp(0.0, self.config.max_adc as f32) as u16)
    }
}

fn main() -> SensorResult<()> {
    println!("ACS712 Simulated Mains Example");
    println!("==============================\n");

    let config = SensorConfig::for_variant(Acs712Variant::Amps20, 5.0, 1023);
    let adc = SimulatedAdc {
        origin: Instant::now(),
        load: Load::Off,
        config,
        offset_steps: 3.0,
    };
    let mut sensor = CurrentSensor::new(adc, 0, StdClock::new(), config);

    println!("1. Calibration (load off)");
    println!("-------------------------");
    println!("   Nominal midpoint: {}", sensor.midpoint());
    let midpoint = sensor.calibrate_midpoint(CALIBRATION_DEFAULT_MS)?;
    println!("   Calibrated midpoint: {}\n", midpoint);

    println!("2. AC loads");
    println!("-----------");
    let loads = [
        ("resistive 2 A", Load::Resistive(2.0)),
        ("resistive 8 A", Load::Resistive(8.0)),
        ("dimmer at 90°", Load::PhaseCut { rms_full: 8.0, firing_angle: PI / 2.0 }),
    ];

    for (name, load) in loads {
        sensor.source_mut().load = load;
        let ma = sensor.measure_ac_milliamps(LineFrequency::Hz50)?;
        println!(
            "   {:<14} {:>6} mA  (form factor {:.3})",
            name,
            ma,
            sensor.form_factor()
        );
    }

    println!("\n3. DC load");
    println!("----------");
    sensor.source_mut().load = Load::Dc(-1.5);
    println!("   -1.5 A load reads {} mA", sensor.measure_dc_milliamps()?);

    Ok(())
}
