//! # Headless Surface
//!
//! An in-memory [`Surface`] backed by a ratatui [`Buffer`] and a scripted
//! queue of input events. Used by the tests, and handy for driving a menu
//! without a terminal.
//!
//! Running out of scripted input is reported as an `UnexpectedEof` I/O
//! error, so a test that forgets its final key fails instead of hanging.

use std::collections::VecDeque;
use std::io;

use ratatui::buffer::Buffer;
use ratatui::layout::{Rect, Size};
use ratatui::style::Style;

use crate::core::event::{InputEvent, Key};
use crate::core::surface::Surface;

#[derive(Debug)]
pub struct HeadlessSurface {
    buffer: Buffer,
    caret: Option<(u16, u16)>,
    /// Pending input; a resize carries the size it switches to.
    events: VecDeque<(InputEvent, Option<Size>)>,
}

impl HeadlessSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::empty(Rect::new(0, 0, width, height)),
            caret: None,
            events: VecDeque::new(),
        }
    }

    /// Queue one event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back((event, None));
    }

    pub fn with_events(mut self, events: impl IntoIterator<Item = InputEvent>) -> Self {
        for event in events {
            self.push(event);
        }
        self
    }

    /// Queue a key press for every character of `keys`.
    pub fn keys(self, keys: &str) -> Self {
        self.with_events(keys.chars().map(|c| InputEvent::Key(Key::Char(c))))
    }

    /// Queue a resize to `width` x `height`. The surface changes size when
    /// the event is read.
    pub fn resized_to(mut self, width: u16, height: u16) -> Self {
        self.events
            .push_back((InputEvent::Resize, Some(Size::new(width, height))));
        self
    }

    /// Text of one screen line, blank cells included.
    pub fn line(&self, row: u16) -> String {
        let area = self.buffer.area;
        (0..area.width)
            .filter_map(|col| self.buffer.cell((col, row)))
            .map(|cell| cell.symbol())
            .collect()
    }

    pub fn style_at(&self, row: u16, col: u16) -> Style {
        self.buffer
            .cell((col, row))
            .map(|cell| cell.style())
            .unwrap_or_default()
    }

    /// Last caret position as `(row, col)`.
    pub fn caret(&self) -> Option<(u16, u16)> {
        self.caret
    }
}

impl Surface for HeadlessSurface {
    fn put_str(&mut self, row: u16, col: u16, width: u16, style: Style, text: &str) {
        let area = self.buffer.area;
        if row >= area.height || col >= area.width {
            return;
        }
        let width = width.min(area.width - col);
        self.buffer
            .set_stringn(col, row, text, usize::from(width), style);
    }

    fn erase(&mut self, row: u16, col: u16, width: u16) {
        let end = col.saturating_add(width);
        for x in col..end {
            if let Some(cell) = self.buffer.cell_mut((x, row)) {
                cell.reset();
            }
        }
    }

    fn size(&self) -> Size {
        self.buffer.area.as_size()
    }

    fn set_caret(&mut self, row: u16, col: u16) {
        self.caret = Some((row, col));
    }

    fn next_event(&mut self) -> io::Result<InputEvent> {
        let (event, size) = self
            .events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more scripted input"))?;
        if let Some(size) = size {
            self.buffer
                .resize(Rect::new(0, 0, size.width, size.height));
        }
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_put_str_clips_to_width_and_screen() {
        let mut surface = HeadlessSurface::new(8, 2);
        surface.put_str(0, 2, 3, Style::default(), "abcdef");
        surface.put_str(1, 5, 10, Style::default(), "abcdef");
        surface.put_str(4, 0, 10, Style::default(), "offscreen");

        assert_eq!(surface.line(0), "  abc   ");
        assert_eq!(surface.line(1), "     abc");
    }

    #[test]
    fn test_erase_resets_style() {
        let mut surface = HeadlessSurface::new(6, 1);
        surface.put_str(0, 0, 6, Style::default().fg(Color::Blue), "xxxxxx");
        surface.erase(0, 1, 3);
        assert_eq!(surface.line(0), "x   xx");
        assert_eq!(surface.style_at(0, 1).fg, Some(Color::Reset));
        assert_eq!(surface.style_at(0, 4).fg, Some(Color::Blue));
    }

    #[test]
    fn test_scripted_events_then_eof() {
        let mut surface = HeadlessSurface::new(4, 4)
            .keys("ab")
            .resized_to(10, 3);
        assert_eq!(surface.next_event().unwrap(), InputEvent::Key(Key::Char('a')));
        assert_eq!(surface.next_event().unwrap(), InputEvent::Key(Key::Char('b')));
        assert_eq!(surface.size(), Size::new(4, 4));
        assert_eq!(surface.next_event().unwrap(), InputEvent::Resize);
        assert_eq!(surface.size(), Size::new(10, 3));

        let err = surface.next_event().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
