//! Screen buffer types
//!
//! Provides a character-cell screen buffer for text-mode displays.

/// Fill character for unused cells
const BLANK: u8 = b' ';

/// Shown in place of characters the panel font cannot draw
const REPLACEMENT: u8 = b'?';

/// Screen buffer for text-mode displays
///
/// Holds `ROWS` rows of `COLS` ASCII cells, one highlight span per row and
/// a dirty flag per row, so a renderer only has to redraw rows that
/// changed since it last looked.
#[derive(Clone)]
pub struct Screen<const ROWS: usize, const COLS: usize> {
    /// Current display content
    cells: [[u8; COLS]; ROWS],
    /// Highlight span per row (start_col, end_col exclusive)
    highlights: [Option<(u8, u8)>; ROWS],
    /// Rows changed since the last `mark_clean`
    dirty: [bool; ROWS],
}

impl<const ROWS: usize, const COLS: usize> Default for Screen<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROWS: usize, const COLS: usize> Screen<ROWS, COLS> {
    /// Create a new empty screen; every row starts dirty
    pub const fn new() -> Self {
        Self {
            cells: [[BLANK; COLS]; ROWS],
            highlights: [None; ROWS],
            dirty: [true; ROWS],
        }
    }

    /// Clear the entire screen
    pub fn clear(&mut self) {
        for row in 0..ROWS {
            self.clear_row(row);
        }
    }

    /// Blank one row and drop its highlight
    pub fn clear_row(&mut self, row: usize) {
        if row < ROWS {
            self.cells[row] = [BLANK; COLS];
            self.highlights[row] = None;
            self.dirty[row] = true;
        }
    }

    /// Write text into a row starting at `col`
    ///
    /// Overwrites the cells it covers and leaves the rest of the row alone.
    /// Text past the right edge is dropped; non-ASCII characters are shown
    /// as `?`. Returns the column one past the last cell written.
    pub fn put_text(&mut self, row: usize, col: usize, text: &str) -> usize {
        if row >= ROWS {
            return col;
        }

        let mut x = col;
        for ch in text.chars() {
            if x >= COLS {
                break;
            }
            self.cells[row][x] = if ch.is_ascii() && !ch.is_ascii_control() {
                ch as u8
            } else {
                REPLACEMENT
            };
            x += 1;
        }

        self.dirty[row] = true;
        x
    }

    /// Get the content of a row, trailing blanks removed
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.cells
            .get(row)
            .and_then(|cells| core::str::from_utf8(cells).ok())
            .map(str::trim_end)
    }

    /// Get the full-width content of a row, blanks included
    pub fn get_padded_line(&self, row: usize) -> Option<&str> {
        self.cells
            .get(row)
            .and_then(|cells| core::str::from_utf8(cells).ok())
    }

    /// Extend the highlight span of a row to cover `[start_col, end_col)`
    ///
    /// A row keeps a single span; highlighting two runs on the same row
    /// covers everything between them too.
    pub fn add_highlight(&mut self, row: usize, start_col: u8, end_col: u8) {
        if row >= ROWS || start_col >= end_col {
            return;
        }

        self.highlights[row] = Some(match self.highlights[row] {
            Some((start, end)) => (start.min(start_col), end.max(end_col)),
            None => (start_col, end_col),
        });
        self.dirty[row] = true;
    }

    /// Clear highlight for a row
    pub fn clear_highlight(&mut self, row: usize) {
        if row < ROWS {
            self.highlights[row] = None;
            self.dirty[row] = true;
        }
    }

    /// Get highlight region for a row
    pub fn get_highlight(&self, row: usize) -> Option<(u8, u8)> {
        self.highlights.get(row).copied().flatten()
    }

    /// Check if any row needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty.iter().any(|&dirty| dirty)
    }

    /// Check if a row needs redrawing
    pub fn is_row_dirty(&self, row: usize) -> bool {
        self.dirty.get(row).copied().unwrap_or(false)
    }

    /// Iterate over the rows that need redrawing
    pub fn dirty_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.dirty
            .iter()
            .enumerate()
            .filter(|(_, dirty)| **dirty)
            .map(|(row, _)| row)
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = [false; ROWS];
    }
}

#[cfg(feature = "defmt")]
impl<const ROWS: usize, const COLS: usize> defmt::Format for Screen<ROWS, COLS> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for row in 0..ROWS {
            if row > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", self.get_line(row).unwrap_or(""));
        }
        defmt::write!(f, "]");
    }
}
