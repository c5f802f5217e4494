//! Analog input abstraction
//!
//! A single ADC channel sampled on demand. Readings are returned in the
//! converter's native resolution; callers rescale as needed.

/// ADC errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion did not complete or reported an error
    Conversion,
}

/// Blocking single-channel analog input
pub trait AnalogInput {
    /// Converter resolution in bits (e.g. 10 for AVR, 12 for RP2040)
    const RESOLUTION_BITS: u8;

    /// Take one raw sample
    fn read(&mut self) -> Result<u16, AdcError>;

    /// Largest value `read` can return
    fn full_scale(&self) -> u16 {
        ((1u32 << Self::RESOLUTION_BITS) - 1) as u16
    }
}
