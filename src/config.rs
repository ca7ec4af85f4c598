//! Display geometry and font configuration

use crate::command::{DOTS_5X8, DOTS_5X10, FOUR_BIT_MODE, FUNCTION_SET, ONE_LINE, TWO_LINE};
pub use crate::error::{BuilderError, MAX_COLS, MAX_ROWS};

/// Number of entries in the row offset table
///
/// Fixed regardless of the configured row count.
pub const ROW_OFFSET_COUNT: usize = 4;

/// Display dimensions in character cells
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Number of columns (characters per line)
    pub cols: u8,
    /// Number of rows (lines)
    pub rows: u8,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - rows == 0 or rows > MAX_ROWS
    /// - cols == 0 or cols > MAX_COLS
    pub fn new(cols: u8, rows: u8) -> Result<Self, BuilderError> {
        if rows == 0 || rows > MAX_ROWS {
            return Err(BuilderError::InvalidDimensions { cols, rows });
        }
        if cols == 0 || cols > MAX_COLS {
            return Err(BuilderError::InvalidDimensions { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    /// DDRAM start address of each row
    ///
    /// Rows 2 and 3 continue lines 0 and 1 past the visible width, which is
    /// how 4-line panels are wired.
    pub fn row_offsets(&self) -> [u8; ROW_OFFSET_COUNT] {
        [0x00, 0x40, self.cols, 0x40u8.wrapping_add(self.cols)]
    }

    /// Clamp a row index to the last valid row
    pub fn clamp_row(&self, row: u8) -> u8 {
        let last_table_row = (ROW_OFFSET_COUNT - 1) as u8;
        row.min(last_table_row).min(self.rows.saturating_sub(1))
    }

    /// DDRAM address of a cell, with the row clamped
    pub fn ddram_address(&self, col: u8, row: u8) -> u8 {
        let offset = self.row_offsets()[self.clamp_row(row) as usize];
        offset.wrapping_add(col)
    }

    /// Function set instruction for this geometry and font
    ///
    /// The 5x10 font is only honored on single-line panels.
    pub fn function_set(&self, font: FontSize) -> u8 {
        let lines = if self.rows > 1 { TWO_LINE } else { ONE_LINE };
        let dots = match font {
            FontSize::Dots5x10 if self.rows == 1 => DOTS_5X10,
            _ => DOTS_5X8,
        };
        FUNCTION_SET | FOUR_BIT_MODE | lines | dots
    }
}

/// Character font
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FontSize {
    /// 5x8 dots
    #[default]
    Dots5x8,
    /// 5x10 dots (single-line panels only)
    Dots5x10,
}
