//! Bounded busy-polling windows
//!
//! Both timed measurements sample "as fast as the CPU allows" for a fixed
//! wall-clock span. The sample count is whatever the platform achieves; more
//! samples per cycle give a tighter peak-to-peak estimate.
//!
//! ```rust
//! use acs712_core::sampling::PollWindow;
//! use acs712_core::time::StepClock;
//!
//! let clock = StepClock::new(0, 1_000);
//! let window = PollWindow::micros(&clock, 5_000);
//!
//! let mut polls = 0;
//! while window.is_open() {
//!     polls += 1;
//! }
//! assert_eq!(polls, 4);
//! ```

use crate::time::{elapsed, Clock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Millis,
    Micros,
}

/// A span of time started on creation, measured on one of the clock's
/// counters
#[derive(Debug)]
pub struct PollWindow<'c, C: Clock> {
    clock: &'c C,
    resolution: Resolution,
    start: u32,
    length: u32,
}

impl<'c, C: Clock> PollWindow<'c, C> {
    /// Open a window of `length_us` microseconds
    pub fn micros(clock: &'c C, length_us: u32) -> Self {
        Self::open(clock, Resolution::Micros, length_us)
    }

    /// Open a window of `length_ms` milliseconds
    pub fn millis(clock: &'c C, length_ms: u32) -> Self {
        Self::open(clock, Resolution::Millis, length_ms)
    }

    fn open(clock: &'c C, resolution: Resolution, length: u32) -> Self {
        let mut window = Self {
            clock,
            resolution,
            start: 0,
            length,
        };
        window.start = window.now();
        window
    }

    fn now(&self) -> u32 {
        match self.resolution {
            Resolution::Millis => self.clock.millis(),
            Resolution::Micros => self.clock.micros(),
        }
    }

    /// Time since the window opened, in the window's unit
    pub fn elapsed(&self) -> u32 {
        elapsed(self.start, self.now())
    }

    /// Whether sampling may continue; reads the clock once
    pub fn is_open(&self) -> bool {
        self.elapsed() < self.length
    }

    /// Window length in the window's unit
    pub fn length(&self) -> u32 {
        self.length
    }
}
