//! Time management for the sampling loops
//!
//! Provides clock implementations and the wrapping elapsed-time helper:
//! - Step clock (deterministic, for tests and simulations)
//! - Std clock (when available)

use core::cell::Cell;

use crate::constants::time::US_PER_MS;
pub use crate::traits::Clock;

/// Time elapsed from `start` to `now` on a wrapping `u32` counter
///
/// Correct across a single wraparound, which is all a bounded sampling
/// window can span.
#[inline]
pub fn elapsed(start: u32, now: u32) -> u32 {
    now.wrapping_sub(start)
}

/// Clock that moves forward a fixed step every time it is read
///
/// Each call to [`Clock::millis`] or [`Clock::micros`] first advances the
/// internal 64-bit microsecond counter by `step_us`, then reports it
/// truncated to `u32`. Sampling loops query the clock once per iteration,
/// so the step acts as the simulated time per sample.
#[derive(Debug, Clone)]
pub struct StepClock {
    now_us: Cell<u64>,
    step_us: Cell<u64>,
}

impl StepClock {
    /// Clock at `start_us` advancing `step_us` per query
    pub fn new(start_us: u64, step_us: u64) -> Self {
        Self {
            now_us: Cell::new(start_us),
            step_us: Cell::new(step_us),
        }
    }

    /// Start `lead_us` microseconds before the microsecond counter wraps
    pub fn near_wrap(lead_us: u64, step_us: u64) -> Self {
        Self::new(u32::MAX as u64 + 1 - lead_us, step_us)
    }

    /// Current time without advancing
    pub fn peek_us(&self) -> u64 {
        self.now_us.get()
    }

    /// Change the per-query step; takes `&self` so it works on a clock
    /// already owned by a sensor
    pub fn set_step(&self, step_us: u64) {
        self.step_us.set(step_us);
    }

    /// Move forward without a query
    pub fn advance(&self, us: u64) {
        self.now_us.set(self.now_us.get() + us);
    }

    fn tick(&self) -> u64 {
        self.advance(self.step_us.get());
        self.now_us.get()
    }
}

impl Clock for StepClock {
    fn millis(&self) -> u32 {
        (self.tick() / US_PER_MS as u64) as u32
    }

    fn micros(&self) -> u32 {
        self.tick() as u32
    }
}

/// Host clock backed by `std::time::Instant`
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Clock whose epoch is now
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn millis(&self) -> u32 {
        // Truncation reproduces the wrap of a 32-bit counter
        self.origin.elapsed().as_millis() as u32
    }

    fn micros(&self) -> u32 {
        self.origin.elapsed().as_micros() as u32
    }
}
