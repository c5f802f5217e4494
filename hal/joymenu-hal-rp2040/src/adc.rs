//! ADC channel management
//!
//! RP2040 has a single 12-bit ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor

use embassy_rp::adc::{Adc, Blocking, Channel};
use joymenu_hal::{AdcError, AnalogInput};

/// ADC channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// ADC0 on GPIO26
    Adc0,
    /// ADC1 on GPIO27
    Adc1,
    /// ADC2 on GPIO28
    Adc2,
    /// ADC3 on GPIO29
    Adc3,
    /// Internal temperature sensor
    Temperature,
}

impl AdcChannel {
    /// Get the GPIO pin for this ADC channel
    pub fn gpio(&self) -> Option<u8> {
        match self {
            AdcChannel::Adc0 => Some(26),
            AdcChannel::Adc1 => Some(27),
            AdcChannel::Adc2 => Some(28),
            AdcChannel::Adc3 => Some(29),
            AdcChannel::Temperature => None,
        }
    }
}

/// One ADC channel sampled with blocking conversions
///
/// A conversion takes about 2 µs, short enough to run from the polling
/// loop without an interrupt.
pub struct AdcInput<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
    id: AdcChannel,
}

impl<'d> AdcInput<'d> {
    /// Pair the converter with the channel it should sample
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>, id: AdcChannel) -> Self {
        Self { adc, channel, id }
    }

    /// Channel being sampled
    pub fn id(&self) -> AdcChannel {
        self.id
    }
}

impl AnalogInput for AdcInput<'_> {
    const RESOLUTION_BITS: u8 = 12;

    fn read(&mut self) -> Result<u16, AdcError> {
        self.adc
            .blocking_read(&mut self.channel)
            .map_err(|_| AdcError::Conversion)
    }
}
