//! # Regions
//!
//! Screen rectangles in terminal cells. A requested region may use
//! non-positive `width` / `page_rows` to mean "relative to the terminal":
//! `0` fills to the edge, `-n` stops `n` cells short of it.

use ratatui::layout::Size;

/// A rectangle of terminal cells, anchored at `(row, col)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region {
    pub col: i32,
    pub row: i32,
    pub width: i32,
    pub page_rows: i32,
}

impl Region {
    pub const fn new(col: i32, row: i32, width: i32, page_rows: i32) -> Self {
        Self {
            col,
            row,
            width,
            page_rows,
        }
    }

    /// Resolve relative dimensions against the current screen size.
    pub fn resolve(mut self, screen: Size) -> Self {
        if self.width <= 0 {
            self.width += i32::from(screen.width) - self.col;
        }
        if self.page_rows <= 0 {
            self.page_rows += i32::from(screen.height) - self.row;
        }
        self
    }

    /// True if both dimensions are positive.
    pub fn is_usable(&self) -> bool {
        self.width > 0 && self.page_rows > 0
    }

    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= self.row
            && row < self.row + self.page_rows
            && col >= self.col
            && col < self.col + self.width
    }
}

/// Clamp a signed cell coordinate into the range a terminal can address.
pub(crate) fn cell(value: i32) -> u16 {
    value.clamp(0, i32::from(u16::MAX)) as u16
}

/// One row's drawing span, handed to row renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSlot {
    pub row: u16,
    pub col: u16,
    pub width: u16,
}

impl RowSlot {
    pub fn new(row: i32, col: i32, width: i32) -> Self {
        Self {
            row: cell(row),
            col: cell(col),
            width: cell(width),
        }
    }

    /// Slot left over after reserving `cols` cells on the left.
    pub fn shifted(self, cols: u16) -> Self {
        Self {
            row: self.row,
            col: self.col.saturating_add(cols),
            width: self.width.saturating_sub(cols),
        }
    }
}
