//! Navigation engine
//!
//! Turns decoded joystick directions into cursor moves, value edits,
//! sub-menu jumps and action calls.

pub mod engine;
pub mod outcome;
pub mod state;

pub use engine::{MenuSystem, PROCESSING_MESSAGE, WELCOME_MESSAGE};
pub use outcome::Outcome;
pub use state::{Mode, NavigationState};
