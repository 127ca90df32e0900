//! Driver for the ACS712 Hall-effect current sensor
//!
//! Turns raw ADC readings of the sensor output into AC (RMS) and DC current
//! in milliamps, and calibrates the zero-current midpoint.
//! Designed for microcontrollers; no heap allocation anywhere.
//!
//! Key constraints:
//! - Single sensor, single channel, single thread
//! - Measurements busy-poll for a bounded time (one mains period for AC)
//! - Hardware access only through [`AnalogSource`] and [`Clock`]
//!
//! ```rust
//! use acs712_core::{Acs712Variant, CurrentSensor, LineFrequency, SensorConfig};
//! use acs712_core::source::ScriptedSource;
//! use acs712_core::time::StepClock;
//!
//! let config = SensorConfig::for_variant(Acs712Variant::Amps20, 5.0, 1023);
//! let adc = ScriptedSource::new(&[512, 600, 512, 424]);
//! let mut sensor = CurrentSensor::new(adc, 0, StepClock::new(0, 50), config);
//!
//! // With no load connected
//! sensor.calibrate_midpoint(100)?;
//!
//! match sensor.measure_ac_milliamps(LineFrequency::Hz50) {
//!     Ok(_milliamps) => {}, // Report it
//!     Err(_e) => {},        // Handle failed measurement
//! }
//! # Ok::<(), acs712_core::SensorError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod calibration;
pub mod config;
pub mod constants;
pub mod errors;
#[cfg(feature = "embedded-hal")]
pub mod hal;
pub mod sampling;
pub mod sensor;
pub mod source;
pub mod time;
pub mod traits;
pub mod waveform;

// Public API
pub use config::{Acs712Variant, SensorConfig};
pub use errors::{SensorError, SensorResult};
pub use sensor::CurrentSensor;
pub use traits::{AnalogSource, Clock};
pub use waveform::LineFrequency;

#[cfg(feature = "embedded-hal")]
pub use hal::OneShotSource;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
