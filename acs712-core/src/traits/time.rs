//! Clock Abstraction for Embedded Systems
//!
//! This module provides the `Clock` trait which abstracts the elapsed-time
//! counters the sampling loops are bounded by.
//!
//! ## Design Goals
//!
//! - **Platform Independence**: Works on bare metal, RTOS, and Linux
//! - **Testability**: Easy to replace with a deterministic clock
//! - **Efficiency**: Zero allocation, called once per sample
//!
//! ## Common Implementations
//!
//! - `StepClock`: Advances a fixed step per query, for tests
//! - `StdClock`: `std::time::Instant` based, for hosts

/// Monotonic elapsed-time counters
///
/// Both counters are free-running and wrap at `u32::MAX`, like `millis()` and
/// `micros()` on Arduino-class targets or a 32-bit hardware timer. Callers
/// must measure intervals with wrapping subtraction; see
/// [`crate::time::elapsed`].
///
/// ## Example Implementation
///
/// ```rust
/// use acs712_core::traits::Clock;
///
/// struct Timer0 {
///     // ... timer peripheral
/// }
///
/// impl Clock for Timer0 {
///     fn millis(&self) -> u32 {
///         self.micros() / 1000
///     }
///
///     fn micros(&self) -> u32 {
///         // Read the free-running counter
///         0 // placeholder
///     }
/// }
/// ```
///
/// ## Platform-Specific Considerations
///
/// ### Bare Metal (no_std)
/// - Use a free-running timer peripheral
/// - A 32-bit microsecond counter wraps every ~71 minutes, which is fine
///
/// ### RTOS
/// - Tick counters are often too coarse for `micros()`; prefer a hardware
///   timer for the AC window
pub trait Clock {
    /// Milliseconds since an arbitrary epoch, wrapping
    fn millis(&self) -> u32;

    /// Microseconds since an arbitrary epoch, wrapping
    ///
    /// Resolution directly limits how accurately the AC window matches one
    /// mains period.
    fn micros(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn millis(&self) -> u32 {
        (**self).millis()
    }

    fn micros(&self) -> u32 {
        (**self).micros()
    }
}
