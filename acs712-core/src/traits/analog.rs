//! Analog Input Abstraction
//!
//! The sensor never touches an ADC register itself. Whatever converts the
//! ACS712 output voltage into a number is handed in as an [`AnalogSource`].

use crate::errors::SensorResult;

/// Source of raw analog-to-digital conversions
///
/// `read` returns the instantaneous raw value of one channel, expected in
/// `[0, max_adc]`. The sensor forwards whatever comes back without range
/// checking; channel validity is the implementation's concern.
///
/// Reads happen inside busy loops, so implementations should block only for
/// the conversion itself.
///
/// ```rust
/// use acs712_core::traits::AnalogSource;
/// use acs712_core::SensorResult;
///
/// struct Adc1;
///
/// impl AnalogSource for Adc1 {
///     type Channel = u8;
///
///     fn read(&mut self, channel: u8) -> SensorResult<u16> {
///         // Start conversion on `channel`, wait, return the result
///         let _ = channel;
///         Ok(512) // placeholder
///     }
/// }
/// ```
pub trait AnalogSource {
    /// Identifier of an analog input (pin number, mux index, `()` when the
    /// source is already bound to one pin)
    type Channel: Copy;

    /// Take one conversion on `channel`
    fn read(&mut self, channel: Self::Channel) -> SensorResult<u16>;
}

impl<S: AnalogSource + ?Sized> AnalogSource for &mut S {
    type Channel = S::Channel;

    fn read(&mut self, channel: Self::Channel) -> SensorResult<u16> {
        (**self).read(channel)
    }
}
