//! Build-time configuration
//!
//! `build.rs` validates `menu.toml` and writes it out as a constant, so a
//! bad configuration fails the build instead of the device.

use joymenu_core::MenuConfig;

include!(concat!(env!("OUT_DIR"), "/menu_config.rs"));
