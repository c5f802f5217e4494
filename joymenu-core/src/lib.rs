//! Board-agnostic core logic for the joystick menu firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits (display sink, backlight, input source, actions)
//! - Input decoding of the analog joystick
//! - Menu model (flat entry table split into groups)
//! - Navigation engine (cursor, group bounds, edit mode)
//! - Viewport computation and rendering
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod input;
pub mod menu;
pub mod nav;
pub mod traits;
pub mod viewport;

pub use config::MenuConfig;
pub use input::{decode, Direction, InputPoller};
pub use menu::{ActionId, EntryKind, Menu, MenuEntry, Parameter};
pub use nav::{MenuSystem, Mode, NavigationState, Outcome};
pub use viewport::Viewport;
