//! Character display support for Joymenu
//!
//! This crate provides:
//! - `DisplayBackend` trait for panels that draw text in character cells
//! - `Screen` buffer holding the text and highlight state of every row
//! - `TextDisplay`, which implements the core `DisplaySink` on top of any
//!   backend and only pushes changed rows to the hardware
//!
//! # Architecture
//!
//! The navigation engine writes into a `TextDisplay`. Nothing reaches the
//! panel until `flush()`, at which point every row touched since the last
//! flush is redrawn in full (text first, then the highlight span).

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod screen;
pub mod text_display;

// Re-export key types
pub use backend::DisplayBackend;
pub use joymenu_core::traits::DisplayError;
pub use screen::Screen;
pub use text_display::TextDisplay;
