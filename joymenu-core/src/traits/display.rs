//! Display sink trait for character displays

use core::fmt::Write;

use heapless::String;

/// Errors that can occur when drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Buffer overflow
    BufferOverflow,
}

/// Visual style of a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Style {
    /// Dark text on light background
    Normal,
    /// Inverted (selection)
    Highlight,
}

impl Style {
    /// Highlight when `selected`, normal otherwise
    pub const fn selected_if(selected: bool) -> Self {
        if selected {
            Style::Highlight
        } else {
            Style::Normal
        }
    }
}

/// Trait for character-cell displays
///
/// Coordinates are in character cells: `col` counts characters from the
/// left edge, `row` counts text lines from the top.
pub trait DisplaySink {
    /// Clear the entire screen
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Blank one text row
    fn clear_line(&mut self, row: u8) -> Result<(), DisplayError>;

    /// Draw text at a position
    fn write_text(&mut self, col: u8, row: u8, text: &str, style: Style)
        -> Result<(), DisplayError>;

    /// Push pending changes to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;
}

/// Helper trait for drawing menu rows
pub trait DisplaySinkExt: DisplaySink {
    /// Replace a row with a message
    fn say(&mut self, col: u8, row: u8, text: &str, style: Style) -> Result<(), DisplayError> {
        self.clear_line(row)?;
        self.write_text(col, row, text, style)
    }

    /// Replace a row with a label followed directly by a decimal value
    ///
    /// Format: "Label42" - the value starts in the cell right after the
    /// last label character.
    fn say_value(
        &mut self,
        col: u8,
        row: u8,
        label: &str,
        value: i16,
        label_style: Style,
        value_style: Style,
    ) -> Result<(), DisplayError> {
        let mut digits: String<8> = String::new();
        write!(digits, "{}", value).map_err(|_| DisplayError::BufferOverflow)?;

        self.clear_line(row)?;
        self.write_text(col, row, label, label_style)?;

        let value_col = col.saturating_add(label.chars().count().min(u8::MAX as usize) as u8);
        self.write_text(value_col, row, &digits, value_style)
    }
}

// Blanket implementation for all DisplaySink types
impl<T: DisplaySink + ?Sized> DisplaySinkExt for T {}
