//! # Terminal Surface
//!
//! The real-terminal [`Surface`]. Menus draw into a back buffer; the buffer
//! is flushed through ratatui right before each blocking read, so a menu
//! refresh costs one terminal write no matter how many cells it touched.

use std::io::{self, stdout};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use log::{debug, info};
use ratatui::DefaultTerminal;
use ratatui::buffer::Buffer;
use ratatui::layout::{Rect, Size};
use ratatui::style::Style;

use crate::core::event::InputEvent;
use crate::core::surface::Surface;
use crate::tui::event::translate;

struct MouseCaptureGuard;

impl MouseCaptureGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for MouseCaptureGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
        info!("Terminal modes disabled");
    }
}

pub struct TerminalSurface {
    terminal: DefaultTerminal,
    back: Buffer,
    caret: Option<(u16, u16)>,
    _modes: MouseCaptureGuard,
}

impl TerminalSurface {
    /// Switch the terminal to raw mode on the alternate screen. The
    /// terminal is restored when the surface is dropped.
    pub fn new() -> io::Result<Self> {
        let terminal = ratatui::try_init()?;
        let modes = match MouseCaptureGuard::new() {
            Ok(modes) => modes,
            Err(err) => {
                ratatui::restore();
                return Err(err);
            }
        };
        let size = terminal.size()?;
        info!("Terminal surface {}x{}", size.width, size.height);

        Ok(Self {
            terminal,
            back: Buffer::empty(Rect::new(0, 0, size.width, size.height)),
            caret: None,
            _modes: modes,
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        let back = &self.back;
        let caret = self.caret;
        self.terminal.draw(|frame| {
            let area = frame.area().intersection(back.area);
            let buf = frame.buffer_mut();
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    if let (Some(src), Some(dst)) = (back.cell((x, y)), buf.cell_mut((x, y))) {
                        *dst = src.clone();
                    }
                }
            }
            if let Some((row, col)) = caret {
                frame.set_cursor_position((col, row));
            }
        })?;
        Ok(())
    }
}

impl Surface for TerminalSurface {
    fn put_str(&mut self, row: u16, col: u16, width: u16, style: Style, text: &str) {
        let area = self.back.area;
        if row >= area.height || col >= area.width {
            return;
        }
        let width = width.min(area.width - col);
        self.back.set_stringn(col, row, text, usize::from(width), style);
    }

    fn erase(&mut self, row: u16, col: u16, width: u16) {
        for x in col..col.saturating_add(width) {
            if let Some(cell) = self.back.cell_mut((x, row)) {
                cell.reset();
            }
        }
    }

    fn size(&self) -> Size {
        self.back.area.as_size()
    }

    fn set_caret(&mut self, row: u16, col: u16) {
        self.caret = Some((row, col));
    }

    fn next_event(&mut self) -> io::Result<InputEvent> {
        loop {
            self.flush()?;
            let raw = event::read()?;
            if let Event::Resize(width, height) = raw {
                debug!("Terminal resized to {}x{}", width, height);
                self.back.resize(Rect::new(0, 0, width, height));
            }
            if let Some(input) = translate(raw) {
                return Ok(input);
            }
        }
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
