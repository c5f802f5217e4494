//! Joymenu Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the menu firmware
//! needs from a chip: a digital output for the backlight and an analog
//! input for the joystick. Chip-specific HALs implement them so the
//! drivers above stay board-agnostic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Drivers (joymenu-drivers)              │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  joymenu-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ joymenu-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (backlight)
//! - [`adc::AnalogInput`] - Single-channel analog sampling (joystick)

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;

pub use adc::{AdcError, AnalogInput};
pub use gpio::OutputPin;
