//! RP2040-specific HAL for the joystick menu firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `joymenu-hal` traits:
//!
//! - GPIO output for the backlight (implements `joymenu_hal::OutputPin`)
//! - ADC channel sampling for the joystick (implements `joymenu_hal::AnalogInput`)

#![no_std]

pub mod adc;
pub mod gpio;

pub use adc::{AdcChannel, AdcInput};
pub use gpio::BacklightOutput;

// Re-export shared traits from joymenu-hal for convenience
pub use joymenu_hal::{AnalogInput, OutputPin};
