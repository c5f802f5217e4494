//! PCD8544 LCD Driver
//!
//! Driver for the 84x48 PCD8544 controller (Nokia 5110 module, LCD4884
//! joystick shield) over SPI. Drawn as a 14x6 character display.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;
use joymenu_core::traits::DisplayError;
use joymenu_display::DisplayBackend;

use super::framebuffer::{FrameBuffer, BANKS, TEXT_COLS, TEXT_ROWS};
use super::LcdError;

/// PCD8544 commands
#[allow(dead_code)]
mod cmd {
    /// Function set; OR with the flags below
    pub const FUNCTION_SET: u8 = 0x20;
    pub const POWER_DOWN: u8 = 0x04;
    pub const VERTICAL_ADDRESSING: u8 = 0x02;
    pub const EXTENDED: u8 = 0x01;

    // Basic instruction set
    pub const DISPLAY_BLANK: u8 = 0x08;
    pub const DISPLAY_NORMAL: u8 = 0x0C;
    pub const DISPLAY_ALL_ON: u8 = 0x09;
    pub const SET_Y: u8 = 0x40;
    pub const SET_X: u8 = 0x80;

    // Extended instruction set
    pub const SET_TEMP_COEFF: u8 = 0x04;
    pub const SET_BIAS: u8 = 0x10;
    pub const SET_VOP: u8 = 0x80;
}

/// Contrast used by the LCD4884 shield
pub const DEFAULT_CONTRAST: u8 = 0x40;

/// Reset pulse width
const RESET_PULSE_US: u32 = 10;

/// PCD8544 LCD driver
pub struct Pcd8544<SPI, DC, RST> {
    spi: SPI,
    /// Data/command select: low = command, high = data
    dc: DC,
    rst: RST,
    frame: FrameBuffer,
    contrast: u8,
    initialized: bool,
}

impl<SPI, DC, RST> Pcd8544<SPI, DC, RST>
where
    SPI: SpiDevice<u8>,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new PCD8544 driver
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self {
            spi,
            dc,
            rst,
            frame: FrameBuffer::new(),
            contrast: DEFAULT_CONTRAST,
            initialized: false,
        }
    }

    /// Pulse reset and program the controller
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), LcdError> {
        self.rst.set_low().map_err(|_| LcdError::Pin)?;
        delay.delay_us(RESET_PULSE_US);
        self.rst.set_high().map_err(|_| LcdError::Pin)?;

        // Initialization sequence for PCD8544
        let init_cmds: [u8; 6] = [
            cmd::FUNCTION_SET | cmd::EXTENDED,
            cmd::SET_VOP | (self.contrast & 0x7F),
            cmd::SET_TEMP_COEFF,
            cmd::SET_BIAS | 0x03, // 1:48
            cmd::FUNCTION_SET,
            cmd::DISPLAY_NORMAL,
        ];
        self.commands(&init_cmds)?;

        self.initialized = true;
        self.frame.clear();
        self.flush_frame()
    }

    /// Set display contrast (0-127)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), LcdError> {
        self.contrast = contrast & 0x7F;
        if self.initialized {
            self.commands(&[
                cmd::FUNCTION_SET | cmd::EXTENDED,
                cmd::SET_VOP | self.contrast,
                cmd::FUNCTION_SET,
            ])?;
        }
        Ok(())
    }

    /// Get the frame buffer, e.g. for embedded-graphics drawing
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    /// Releases owned bus and pins
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }

    /// Send a command sequence
    fn commands(&mut self, cmds: &[u8]) -> Result<(), LcdError> {
        self.dc.set_low().map_err(|_| LcdError::Pin)?;
        self.spi.write(cmds).map_err(|_| LcdError::Spi)
    }

    /// Send display data at the current address
    fn data(&mut self, data: &[u8]) -> Result<(), LcdError> {
        self.dc.set_high().map_err(|_| LcdError::Pin)?;
        self.spi.write(data).map_err(|_| LcdError::Spi)
    }

    /// Send every bank that changed since the last flush
    fn flush_frame(&mut self) -> Result<(), LcdError> {
        if !self.initialized {
            return Err(LcdError::NotInitialized);
        }

        let dirty = self.frame.take_dirty();
        for bank in (0..BANKS).filter(|&bank| dirty[bank]) {
            self.commands(&[cmd::SET_Y | bank as u8, cmd::SET_X])?;

            let bytes = match self.frame.bank(bank) {
                Some(bytes) => *bytes,
                None => continue,
            };
            self.data(&bytes)?;
        }

        Ok(())
    }
}

impl<SPI, DC, RST> DisplayBackend for Pcd8544<SPI, DC, RST>
where
    SPI: SpiDevice<u8>,
    DC: OutputPin,
    RST: OutputPin,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.frame.clear();
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if row as usize >= TEXT_ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.frame.draw_text(row as usize, col as usize, text);
        Ok(())
    }

    fn invert_region(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError> {
        if row as usize >= TEXT_ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.frame
            .invert_cells(row as usize, start_col as usize, end_col as usize);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.flush_frame().map_err(DisplayError::from)
    }

    fn dimensions(&self) -> (u8, u8) {
        (TEXT_COLS as u8, TEXT_ROWS as u8)
    }

    fn is_ready(&self) -> bool {
        self.initialized
    }
}
