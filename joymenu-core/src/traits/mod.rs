//! Capability traits
//!
//! These traits define the interface between the navigation engine and
//! the hardware (or test doubles) it drives.

pub mod action;
pub mod backlight;
pub mod display;
pub mod input;

pub use action::ActionHandler;
pub use backlight::Backlight;
pub use display::{DisplayError, DisplaySink, DisplaySinkExt, Style};
pub use input::InputSource;
