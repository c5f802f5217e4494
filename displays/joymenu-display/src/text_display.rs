//! Buffered character display
//!
//! Implements the engine's `DisplaySink` on top of any [`DisplayBackend`].
//! Writes land in a [`Screen`]; `flush` redraws only the rows touched since
//! the previous flush and then pushes the backend's frame to the panel.

use joymenu_core::traits::{DisplayError, DisplaySink, Style};

use crate::backend::DisplayBackend;
use crate::screen::Screen;

/// Text display over a backend with `ROWS` x `COLS` character cells
pub struct TextDisplay<B, const ROWS: usize, const COLS: usize> {
    backend: B,
    screen: Screen<ROWS, COLS>,
}

impl<B, const ROWS: usize, const COLS: usize> TextDisplay<B, ROWS, COLS>
where
    B: DisplayBackend,
{
    /// Wrap a backend
    ///
    /// Fails with `InvalidCoordinates` if the panel is smaller than the
    /// requested grid.
    pub fn new(backend: B) -> Result<Self, DisplayError> {
        let (cols, rows) = backend.dimensions();
        if (cols as usize) < COLS || (rows as usize) < ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }

        Ok(Self {
            backend,
            screen: Screen::new(),
        })
    }

    /// Blank the panel and the buffer
    pub fn reset(&mut self) -> Result<(), DisplayError> {
        self.screen.clear();
        self.backend.clear()?;
        self.backend.flush()?;
        self.screen.mark_clean();
        Ok(())
    }

    /// Get the screen buffer
    pub fn screen(&self) -> &Screen<ROWS, COLS> {
        &self.screen
    }

    /// Get the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get the backend mutably
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Give the backend back
    pub fn release(self) -> B {
        self.backend
    }

    fn check_row(row: u8) -> Result<usize, DisplayError> {
        let row = row as usize;
        if row < ROWS {
            Ok(row)
        } else {
            Err(DisplayError::InvalidCoordinates)
        }
    }
}

impl<B, const ROWS: usize, const COLS: usize> DisplaySink for TextDisplay<B, ROWS, COLS>
where
    B: DisplayBackend,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.screen.clear();
        Ok(())
    }

    fn clear_line(&mut self, row: u8) -> Result<(), DisplayError> {
        let row = Self::check_row(row)?;
        self.screen.clear_row(row);
        Ok(())
    }

    fn write_text(
        &mut self,
        col: u8,
        row: u8,
        text: &str,
        style: Style,
    ) -> Result<(), DisplayError> {
        let row = Self::check_row(row)?;
        let end = self.screen.put_text(row, col as usize, text);

        if style == Style::Highlight && end > col as usize {
            self.screen.add_highlight(row, col, end as u8);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.backend.is_ready() {
            return Err(DisplayError::NotInitialized);
        }

        for row in 0..ROWS {
            if !self.screen.is_row_dirty(row) {
                continue;
            }

            // Padded so the whole row is overwritten
            let line = self
                .screen
                .get_padded_line(row)
                .ok_or(DisplayError::BufferOverflow)?;
            self.backend.draw_text(row as u8, 0, line)?;

            if let Some((start, end)) = self.screen.get_highlight(row) {
                self.backend.invert_region(row as u8, start, end)?;
            }
        }

        self.backend.flush()?;
        self.screen.mark_clean();
        Ok(())
    }
}
