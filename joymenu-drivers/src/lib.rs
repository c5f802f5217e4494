//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in joymenu-core and joymenu-display:
//!
//! - Backlight on a GPIO pin, doubling as the blink feedback channel
//! - Analog joystick on a single ADC channel
//! - PCD8544 (Nokia 5110 / LCD4884 shield) character LCD

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backlight;
pub mod joystick;
pub mod lcd;

pub use backlight::PinBacklight;
pub use joystick::AnalogJoystick;
pub use lcd::{LcdError, Pcd8544};
