//! Host Platform Abstractions
//!
//! The driver depends on exactly two primitives from the platform it runs on.
//! Both are traits so the measurement logic runs unchanged on a
//! microcontroller and in a host-side unit test.
//!
//! ## Module Organization
//!
//! - [`analog`] - Raw ADC conversions for a channel
//! - [`time`] - Wrapping millisecond and microsecond counters
//!
//! ## Usage Example
//!
//! ```rust
//! use acs712_core::traits::{AnalogSource, Clock};
//! use acs712_core::time::StepClock;
//! use acs712_core::source::ScriptedSource;
//!
//! let mut adc = ScriptedSource::new(&[510, 512, 514]);
//! let clock = StepClock::new(0, 10);
//!
//! assert_eq!(adc.read(0).unwrap(), 510);
//! assert_eq!(clock.micros(), 10);
//! ```

pub mod analog;
pub mod time;

pub use analog::AnalogSource;
pub use time::Clock;
