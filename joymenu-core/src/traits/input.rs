//! Input source trait

/// Raw joystick reading
///
/// The joystick is a resistor ladder on one analog pin; each direction
/// pulls the pin to a different voltage. Samples are on a 10-bit scale
/// (0..=1023) regardless of the converter behind them.
pub trait InputSource {
    /// Take one sample
    fn sample(&mut self) -> u16;
}
