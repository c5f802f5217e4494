//! Analog joystick
//!
//! The five-way stick on the LCD4884 shield is a resistor ladder on one
//! ADC pin. This adapter samples the pin and brings the reading onto the
//! 10-bit scale the core decoder expects, whatever the converter width.

use joymenu_core::traits::InputSource;
use joymenu_hal::AnalogInput;

/// Resolution of the decoder scale
const DECODER_BITS: u8 = 10;

/// Reported for a failed conversion; decodes as released
const RELEASED: u16 = (1 << DECODER_BITS) - 1;

/// Joystick on an analog input
pub struct AnalogJoystick<A> {
    adc: A,
    /// Last raw reading in converter units
    last_raw: Option<u16>,
    /// Conversions that failed
    errors: u32,
}

impl<A: AnalogInput> AnalogJoystick<A> {
    /// Create a new joystick on an analog input
    pub fn new(adc: A) -> Self {
        Self {
            adc,
            last_raw: None,
            errors: 0,
        }
    }

    /// Last successful reading in converter units
    pub fn last_raw(&self) -> Option<u16> {
        self.last_raw
    }

    /// Number of failed conversions since creation
    pub fn errors(&self) -> u32 {
        self.errors
    }

    /// Give the analog input back
    pub fn release(self) -> A {
        self.adc
    }
}

/// Rescale a reading of `bits` resolution to the 10-bit decoder scale
///
/// Shifts rather than multiplies so the bottom code of a wider converter
/// still reads as exactly 0.
pub fn rescale(raw: u16, bits: u8) -> u16 {
    let scaled = if bits >= DECODER_BITS {
        raw >> (bits - DECODER_BITS)
    } else {
        raw << (DECODER_BITS - bits)
    };
    scaled.min(RELEASED)
}

impl<A: AnalogInput> InputSource for AnalogJoystick<A> {
    fn sample(&mut self) -> u16 {
        match self.adc.read() {
            Ok(raw) => {
                self.last_raw = Some(raw);
                rescale(raw, A::RESOLUTION_BITS)
            }
            Err(_) => {
                self.errors = self.errors.saturating_add(1);
                RELEASED
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joymenu_core::input::{decode, Direction};
    use joymenu_hal::AdcError;
    use proptest::prelude::*;

    struct Ladder12 {
        next: Result<u16, AdcError>,
    }

    impl AnalogInput for Ladder12 {
        const RESOLUTION_BITS: u8 = 12;

        fn read(&mut self) -> Result<u16, AdcError> {
            self.next
        }
    }

    struct Ladder10(u16);

    impl AnalogInput for Ladder10 {
        const RESOLUTION_BITS: u8 = 10;

        fn read(&mut self) -> Result<u16, AdcError> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_twelve_bit_rescale() {
        let mut stick = AnalogJoystick::new(Ladder12 { next: Ok(4095) });
        assert_eq!(stick.sample(), 1023);
        assert_eq!(stick.last_raw(), Some(4095));

        stick.adc.next = Ok(3);
        assert_eq!(stick.sample(), 0);

        // Middle of the "up" band on a 12-bit converter
        stick.adc.next = Ok(2500);
        assert_eq!(decode(stick.sample()), Direction::Up);
    }

    #[test]
    fn test_ten_bit_passthrough() {
        let mut stick = AnalogJoystick::new(Ladder10(149));
        assert_eq!(stick.sample(), 149);
    }

    #[test]
    fn test_narrow_converter_widened() {
        assert_eq!(rescale(255, 8), 1020);
        assert_eq!(rescale(0, 8), 0);
    }

    #[test]
    fn test_failed_read_is_released() {
        let mut stick = AnalogJoystick::new(Ladder12 {
            next: Err(AdcError::Conversion),
        });
        assert_eq!(decode(stick.sample()), Direction::Off);
        assert_eq!(stick.errors(), 1);
        assert_eq!(stick.last_raw(), None);
    }

    proptest! {
        #[test]
        fn prop_rescale_stays_on_scale(raw in 0u16..4096) {
            let scaled = rescale(raw, 12);
            prop_assert!(scaled <= 1023);
            prop_assert_eq!(scaled, raw / 4);
        }
    }
}
