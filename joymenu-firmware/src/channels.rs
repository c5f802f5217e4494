//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use joymenu_core::Direction;

/// Channel capacity for joystick input
const INPUT_CHANNEL_SIZE: usize = 4;

/// Debounced joystick directions, one per deflection
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, Direction, INPUT_CHANNEL_SIZE> =
    Channel::new();
