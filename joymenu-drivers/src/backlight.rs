//! GPIO backlight
//!
//! Backlight LED driven from a GPIO pin (directly or through a transistor).

use embedded_hal::delay::DelayNs;
use joymenu_core::traits::Backlight;
use joymenu_hal::OutputPin;

/// Backlight on a GPIO pin
///
/// The pin can be configured as active-high (default) or active-low.
/// Blinking blocks for two ticks per flash.
pub struct PinBacklight<P, D> {
    pin: P,
    delay: D,
    /// If true, light ON = pin LOW
    inverted: bool,
    /// Current logical state (true = light on)
    on: bool,
    /// Half-period of a blink in milliseconds
    tick_ms: u32,
}

impl<P: OutputPin, D: DelayNs> PinBacklight<P, D> {
    /// Create a new backlight, initially off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `delay`: Delay provider used while blinking
    /// - `tick_ms`: Blink half-period
    /// - `inverted`: If true, the light is ON when the pin is LOW
    pub fn new(pin: P, delay: D, tick_ms: u32, inverted: bool) -> Self {
        let mut backlight = Self {
            pin,
            delay,
            inverted,
            on: false,
            tick_ms,
        };
        backlight.set_on(false);
        backlight
    }

    /// Create a backlight with active-high output
    pub fn new_active_high(pin: P, delay: D, tick_ms: u32) -> Self {
        Self::new(pin, delay, tick_ms, false)
    }

    /// Create a backlight with active-low output
    pub fn new_active_low(pin: P, delay: D, tick_ms: u32) -> Self {
        Self::new(pin, delay, tick_ms, true)
    }

    /// Give the pin and delay back
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    fn set_on(&mut self, on: bool) {
        self.on = on;
        // on XOR inverted gives the pin level
        self.pin.set_state(on != self.inverted);
    }
}

impl<P: OutputPin, D: DelayNs> Backlight for PinBacklight<P, D> {
    fn on(&mut self) {
        self.set_on(true);
    }

    fn off(&mut self) {
        self.set_on(false);
    }

    fn toggle(&mut self) {
        self.set_on(!self.on);
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn blink(&mut self, count: u8) {
        let restore = self.on;
        self.set_on(true);

        for _ in 0..count {
            self.toggle();
            self.delay.delay_ms(self.tick_ms);
            self.toggle();
            self.delay.delay_ms(self.tick_ms);
        }

        self.set_on(restore);
    }
}
