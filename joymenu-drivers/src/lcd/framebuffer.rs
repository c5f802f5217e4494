//! Monochrome frame buffer in PCD8544 bank layout
//!
//! Pixels are stored the way the controller wants them: six banks of 84
//! column bytes, bit 0 of each byte at the top of the bank. Text is drawn
//! in 6x8 cells (5x8 glyph plus one column of spacing), so one text row is
//! exactly one bank.

use core::convert::Infallible;

use embedded_graphics::{
    mono_font::{ascii::FONT_5X8, MonoFont, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
    Pixel,
};

/// Panel width in pixels
pub const WIDTH: usize = 84;
/// Panel height in pixels
pub const HEIGHT: usize = 48;
/// 8-pixel banks
pub const BANKS: usize = HEIGHT / 8;

/// Width of one character cell in pixels
pub const CELL_WIDTH: usize = 6;
/// Text columns per row
pub const TEXT_COLS: usize = WIDTH / CELL_WIDTH;
/// Text rows
pub const TEXT_ROWS: usize = BANKS;

/// 5x8 glyphs on a 6-pixel pitch
const CELL_FONT: MonoFont<'static> = MonoFont {
    character_spacing: 1,
    ..FONT_5X8
};

/// Frame buffer (1 bit per pixel, organized as banks)
pub struct FrameBuffer {
    banks: [[u8; WIDTH]; BANKS],
    /// Banks changed since the last `take_dirty`
    dirty: [bool; BANKS],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank buffer
    pub const fn new() -> Self {
        Self {
            banks: [[0; WIDTH]; BANKS],
            dirty: [true; BANKS],
        }
    }

    /// Blank every pixel
    pub fn clear(&mut self) {
        for bank in self.banks.iter_mut() {
            bank.fill(0);
        }
        self.dirty = [true; BANKS];
    }

    /// Get the raw bytes of a bank
    pub fn bank(&self, bank: usize) -> Option<&[u8; WIDTH]> {
        self.banks.get(bank)
    }

    /// Read one pixel
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < WIDTH && y < HEIGHT && self.banks[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Set or clear one pixel; out-of-range coordinates are ignored
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }

        let bank = y / 8;
        let mask = 1 << (y % 8);
        if on {
            self.banks[bank][x] |= mask;
        } else {
            self.banks[bank][x] &= !mask;
        }
        self.dirty[bank] = true;
    }

    /// Draw text into a text row, blanking the cells it covers first
    pub fn draw_text(&mut self, row: usize, col: usize, text: &str) {
        if row >= TEXT_ROWS || col >= TEXT_COLS {
            return;
        }

        let cells = text.chars().count().min(TEXT_COLS - col);
        let origin = Point::new((col * CELL_WIDTH) as i32, (row * 8) as i32);

        // Infallible target: results carry no information
        Rectangle::new(origin, Size::new((cells * CELL_WIDTH) as u32, 8))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
            .draw(self)
            .ok();

        let style = MonoTextStyle::new(&CELL_FONT, BinaryColor::On);
        Text::with_baseline(text, origin, style, Baseline::Top)
            .draw(self)
            .ok();
    }

    /// Invert text cells `[start_col, end_col)` of a text row
    pub fn invert_cells(&mut self, row: usize, start_col: usize, end_col: usize) {
        if row >= TEXT_ROWS {
            return;
        }

        let start_x = (start_col * CELL_WIDTH).min(WIDTH);
        let end_x = (end_col * CELL_WIDTH).min(WIDTH);
        for x in start_x..end_x {
            self.banks[row][x] ^= 0xFF;
        }
        self.dirty[row] = true;
    }

    /// Banks changed since the previous call, then mark all clean
    pub fn take_dirty(&mut self) -> [bool; BANKS] {
        core::mem::replace(&mut self.dirty, [false; BANKS])
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            self.set_pixel(point.x as usize, point.y as usize, color.is_on());
        }

        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_columns(fb: &FrameBuffer, row: usize) -> std::vec::Vec<usize> {
        (0..WIDTH)
            .filter(|&x| fb.bank(row).map(|bank| bank[x] != 0).unwrap_or(false))
            .collect()
    }

    #[test]
    fn test_grid_geometry() {
        assert_eq!(TEXT_COLS, 14);
        assert_eq!(TEXT_ROWS, 6);
    }

    #[test]
    fn test_text_stays_in_its_cells() {
        let mut fb = FrameBuffer::new();
        fb.draw_text(2, 1, "A");

        let lit = lit_columns(&fb, 2);
        assert!(!lit.is_empty());
        assert!(lit.iter().all(|&x| (6..12).contains(&x)));
        // Spacing column stays dark
        assert!(!lit.contains(&11));
        assert!(lit_columns(&fb, 1).is_empty());
        assert!(lit_columns(&fb, 3).is_empty());
    }

    #[test]
    fn test_space_blanks_previous_text() {
        let mut fb = FrameBuffer::new();
        fb.draw_text(0, 0, "XY");
        fb.draw_text(0, 0, "  ");
        assert!(lit_columns(&fb, 0).is_empty());
    }

    #[test]
    fn test_text_clipped_at_right_edge() {
        let mut fb = FrameBuffer::new();
        fb.draw_text(0, 13, "WW");
        assert!(lit_columns(&fb, 0).iter().all(|&x| x >= 78 && x < WIDTH));

        // Whole text past the edge is dropped
        let mut fb = FrameBuffer::new();
        fb.draw_text(0, 14, "W");
        fb.draw_text(6, 0, "W");
        assert!((0..BANKS).all(|row| lit_columns(&fb, row).is_empty()));
    }

    #[test]
    fn test_invert_cells() {
        let mut fb = FrameBuffer::new();
        fb.invert_cells(1, 2, 4);

        assert_eq!(fb.bank(1).map(|b| b[11]), Some(0));
        assert_eq!(fb.bank(1).map(|b| b[12]), Some(0xFF));
        assert_eq!(fb.bank(1).map(|b| b[23]), Some(0xFF));
        assert_eq!(fb.bank(1).map(|b| b[24]), Some(0));
        assert!(fb.pixel(12, 8));
        assert!(fb.pixel(12, 15));
        assert!(!fb.pixel(12, 16));
    }

    #[test]
    fn test_dirty_banks() {
        let mut fb = FrameBuffer::new();
        assert_eq!(fb.take_dirty(), [true; BANKS]);
        assert_eq!(fb.take_dirty(), [false; BANKS]);

        fb.set_pixel(0, 17, true);
        let dirty = fb.take_dirty();
        assert!(dirty[2]);
        assert_eq!(dirty.iter().filter(|&&d| d).count(), 1);
    }
}
