//! GPIO output
//!
//! Adapts an embassy-rp output to the `joymenu_hal::OutputPin` trait.

use embassy_rp::gpio::{Level, Output};
use joymenu_hal::OutputPin;

/// Push-pull output driving the backlight
pub struct BacklightOutput<'d> {
    pin: Output<'d>,
}

impl<'d> BacklightOutput<'d> {
    /// Wrap an already configured output
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }

    /// Give the output back
    pub fn release(self) -> Output<'d> {
        self.pin
    }
}

impl OutputPin for BacklightOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }

    fn set_state(&mut self, high: bool) {
        self.pin.set_level(if high { Level::High } else { Level::Low });
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
