//! # Surface
//!
//! The terminal as the menu engine sees it. Implementations live in
//! [`crate::tui`]; the engine only ever talks to this trait.

use std::io;

use ratatui::layout::Size;
use ratatui::style::{Color, Style};

use crate::core::event::InputEvent;

pub trait Surface {
    /// Write `text` at `(row, col)`, clipped to `width` cells.
    fn put_str(&mut self, row: u16, col: u16, width: u16, style: Style, text: &str);

    /// Blank `width` cells starting at `(row, col)`.
    fn erase(&mut self, row: u16, col: u16, width: u16);

    fn size(&self) -> Size;

    /// Park the terminal caret.
    fn set_caret(&mut self, row: u16, col: u16);

    /// Block until the next input event.
    fn next_event(&mut self) -> io::Result<InputEvent>;
}

/// Color pair for a row: `known` rows are drawn bright, the rest dimmed;
/// the cursor row gets the blue variant.
pub fn cursor_style(known: bool, is_cursor: bool) -> Style {
    let color = match (known, is_cursor) {
        (false, false) => Color::Gray,
        (false, true) => Color::Blue,
        (true, false) => Color::White,
        (true, true) => Color::LightBlue,
    };
    Style::default().fg(color)
}
