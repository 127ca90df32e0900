//! `embedded-hal` 0.2 adapter
//!
//! Wraps any HAL ADC implementing [`OneShot`] together with the pin it
//! samples, so STM32, RP2040, ESP32 and AVR HALs plug straight into
//! [`CurrentSensor`](crate::CurrentSensor).
//!
//! ```rust,ignore
//! let adc = Adc::adc1(dp.ADC1, &mut rcc.apb2, &clocks, 12, false);
//! let pin = gpioa.pa0.into_analog();
//! let source = OneShotSource::new(adc, pin);
//! let sensor = CurrentSensor::new(source, (), timer, config);
//! ```

use core::marker::PhantomData;

use embedded_hal::adc::{Channel, OneShot};

use crate::{
    errors::{SensorError, SensorResult},
    traits::AnalogSource,
};

/// Analog source bound to a single HAL pin
///
/// The channel is carried by the pin type, so `Channel = ()`.
pub struct OneShotSource<ADC, PIN, OS> {
    adc: OS,
    pin: PIN,
    _adc: PhantomData<ADC>,
}

impl<ADC, PIN, OS> OneShotSource<ADC, PIN, OS>
where
    PIN: Channel<ADC>,
    OS: OneShot<ADC, u16, PIN>,
{
    /// Bind `adc` to the pin the sensor output is wired to
    pub fn new(adc: OS, pin: PIN) -> Self {
        Self {
            adc,
            pin,
            _adc: PhantomData,
        }
    }

    /// Give back the ADC driver and pin
    pub fn release(self) -> (OS, PIN) {
        (self.adc, self.pin)
    }
}

impl<ADC, PIN, OS> AnalogSource for OneShotSource<ADC, PIN, OS>
where
    PIN: Channel<ADC>,
    OS: OneShot<ADC, u16, PIN>,
{
    type Channel = ();

    fn read(&mut self, _channel: ()) -> SensorResult<u16> {
        nb::block!(self.adc.read(&mut self.pin)).map_err(|_| SensorError::ReadFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeAdc;

    struct FakePin {
        busy_polls: u8,
        value: u16,
        fail: bool,
    }

    impl Channel<FakeAdc> for FakePin {
        type ID = u8;

        fn channel() -> u8 {
            3
        }
    }

    struct FakeConverter;

    impl OneShot<FakeAdc, u16, FakePin> for FakeConverter {
        type Error = ();

        fn read(&mut self, pin: &mut FakePin) -> nb::Result<u16, ()> {
            if pin.busy_polls > 0 {
                pin.busy_polls -= 1;
                return Err(nb::Error::WouldBlock);
            }
            if pin.fail {
                return Err(nb::Error::Other(()));
            }
            Ok(pin.value)
        }
    }

    #[test]
    fn blocks_until_conversion_ready() {
        let pin = FakePin {
            busy_polls: 3,
            value: 777,
            fail: false,
        };
        let mut source = OneShotSource::new(FakeConverter, pin);

        assert_eq!(source.read(()), Ok(777));

        let (_, pin) = source.release();
        assert_eq!(pin.busy_polls, 0);
    }

    #[test]
    fn adapter_drives_pin_through_hal_traits() {
        let pin = FakePin {
            busy_polls: 0,
            value: 512,
            fail: false,
        };
        let mut source = OneShotSource::new(FakeConverter, pin);

        assert_eq!(<FakePin as Channel<FakeAdc>>::channel(), 3);
        assert_eq!(AnalogSource::read(&mut source, ()), Ok(512));
    }

    #[test]
    fn conversion_error_maps_to_read_failed() {
        let pin = FakePin {
            busy_polls: 0,
            value: 0,
            fail: true,
        };
        let mut source = OneShotSource::new(FakeConverter, pin);

        assert_eq!(source.read(()), Err(SensorError::ReadFailed));
    }
}
