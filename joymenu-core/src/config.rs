//! Configuration type definitions
//!
//! Display geometry and timing for the menu. The firmware fills this in at
//! build time from `menu.toml`; everything has a sensible default so a
//! config file only needs to mention what it changes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Most text rows any supported display offers
pub const MAX_VISIBLE_ROWS: u8 = 8;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `visible_rows` is zero
    NoVisibleRows,
    /// `visible_rows` exceeds [`MAX_VISIBLE_ROWS`]
    TooManyRows,
    /// `tick_ms` is zero
    ZeroTick,
}

/// Menu configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuConfig {
    /// Text rows available for menu entries
    pub visible_rows: u8,
    /// Polling interval (ms); also the unit for every pause and blink
    pub tick_ms: u32,
    /// Pause around an action callback (ticks)
    pub action_pause_ticks: u8,
    /// Pause before clearing the screen on entering a sub-menu (ticks)
    pub submenu_pause_ticks: u8,
    /// How long the welcome banner stays up (ticks)
    pub welcome_pause_ticks: u8,
    /// Backlight state at power-up
    pub backlight_on_start: bool,
}

impl MenuConfig {
    /// Defaults matching the 84x48 LCD4884 shield
    pub const fn new() -> Self {
        Self {
            visible_rows: 6,
            tick_ms: 100,
            action_pause_ticks: 5,
            submenu_pause_ticks: 1,
            welcome_pause_ticks: 5,
            backlight_on_start: true,
        }
    }

    /// Check the configuration for values the engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.visible_rows == 0 {
            return Err(ConfigError::NoVisibleRows);
        }
        if self.visible_rows > MAX_VISIBLE_ROWS {
            return Err(ConfigError::TooManyRows);
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }

    /// Convert a pause in ticks to milliseconds
    pub fn pause_ms(&self, ticks: u8) -> u32 {
        self.tick_ms.saturating_mul(ticks as u32)
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self::new()
    }
}
