//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod input;

pub use input::{input_task, Joystick};
