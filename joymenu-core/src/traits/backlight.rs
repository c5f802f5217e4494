//! Backlight trait

/// Display backlight, also used as the feedback channel
///
/// A single blink tells the user an input was refused (value at its
/// limit, nothing to activate).
pub trait Backlight {
    /// Turn the light on
    fn on(&mut self);

    /// Turn the light off
    fn off(&mut self);

    /// Flip the light
    fn toggle(&mut self);

    /// Current state
    fn is_on(&self) -> bool;

    /// Flash `count` times, then return to the state before the call
    fn blink(&mut self, count: u8);
}
