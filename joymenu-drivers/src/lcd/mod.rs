//! Character LCD drivers

pub mod framebuffer;
pub mod pcd8544;

pub use framebuffer::FrameBuffer;
pub use pcd8544::Pcd8544;

use joymenu_core::traits::DisplayError;

/// LCD driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError {
    /// SPI transfer failed
    Spi,
    /// Control pin (D/C or reset) could not be driven
    Pin,
    /// Drawing requested before `init`
    NotInitialized,
}

impl From<LcdError> for DisplayError {
    fn from(err: LcdError) -> Self {
        match err {
            LcdError::Spi | LcdError::Pin => DisplayError::Communication,
            LcdError::NotInitialized => DisplayError::NotInitialized,
        }
    }
}
