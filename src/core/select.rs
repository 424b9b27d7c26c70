//! # Menu Event Loop
//!
//! [`Menu::run`] reads one raw event per iteration, resolves it against the
//! row source and the layout, and keeps going until it has something the
//! caller asked for.
//!
//! ```text
//!            ┌──────────── refresh() ◀──────────────┐
//!            ▼                                       │
//!      next_event() ── command key consumed? ── yes ─┤
//!            │ no                                    │
//!            ▼                                       │
//!   mouse / keypress / resize ──▶ candidate          │
//!            │                                       │
//!   select consumed by row? ─────────────── yes ─────┤
//!            │ no                                    │
//!   kind in notify mask? ── no ──────────────────────┘
//!            │ yes
//!            ▼
//!         return
//! ```
//!
//! Keyboard resolution order: tags, Escape, empty-menu swallow, space
//! paging, Enter, then directions.

use log::{debug, info};

use crate::core::error::MenuError;
use crate::core::event::{EventMask, InputEvent, Key, MenuEvent, RowEvent};
use crate::core::menu::{Menu, MenuFlags, TagMode};
use crate::core::rows::{RowSource, Validity};
use crate::core::surface::Surface;

impl<'a, R: RowSource> Menu<'a, R> {
    /// Run the menu until it produces an event in `notify`.
    ///
    /// `Select` and `Escape` are always returned. Add `MOVE` to hear about
    /// cursor movement, and `KEYBOARD`, `MOUSE` or `RESIZE` to get raw
    /// events the menu did not handle back as [`MenuEvent::Pass`].
    pub fn run(&mut self, surface: &mut dyn Surface, notify: EventMask) -> Result<MenuEvent, MenuError> {
        let notify = notify | EventMask::SELECT | EventMask::ESCAPE;

        loop {
            if !self.active.is_usable() {
                return Err(MenuError::NotLaidOut {
                    width: self.active.width,
                    page_rows: self.active.page_rows,
                });
            }

            self.refresh(surface);
            let input = surface.next_event()?;

            let candidate = match input {
                InputEvent::Mouse { row, col } => self.handle_mouse(i32::from(row), i32::from(col)),
                InputEvent::Key(key) => {
                    if self.is_command_key(key) && self.activate(surface, key_command(key)) {
                        debug!("command key {:?} consumed by row", key);
                        self.settle_cursor();
                        continue;
                    }
                    self.handle_keypress(key)
                }
                InputEvent::Resize => {
                    let usable = self.calc_size(surface.size());
                    info!("menu resized (usable: {})", usable);
                    self.source.on_resize();
                    None
                }
            };

            if let Some(MenuEvent::Select { .. }) = candidate
                && self.activate(surface, RowEvent::Select)
            {
                self.settle_cursor();
                continue;
            }

            // A handler may have hidden rows; never yield with the cursor on one.
            match candidate {
                Some(event) if notify.intersects(event.kind()) => {
                    self.settle_cursor();
                    debug!("menu yields {:?}", event);
                    return Ok(event);
                }
                None if notify.intersects(input.kind()) => {
                    self.settle_cursor();
                    return Ok(MenuEvent::Pass(input));
                }
                _ => {}
            }
        }
    }

    fn is_command_key(&self, key: Key) -> bool {
        match key {
            Key::Char(c) => self.cmd_keys.is_some_and(|keys| keys.contains(c)),
            _ => false,
        }
    }

    /// Offer `event` to the row under the cursor.
    fn activate(&mut self, surface: &mut dyn Surface, event: RowEvent) -> bool {
        let Some(cursor) = self.cursor else {
            return false;
        };
        let Some(oid) = self.row_id(cursor) else {
            return false;
        };
        let Some(row) = self.rows.get_mut(oid) else {
            return false;
        };
        self.source.handle(row, event, cursor, surface)
    }

    /// Land on `pos`: select if it was already current (or double tap is
    /// off), otherwise just move there.
    fn pick(&mut self, pos: usize) -> MenuEvent {
        let again = self.cursor == Some(pos);
        self.cursor = Some(pos);
        if again || !self.flags.contains(MenuFlags::DOUBLE_TAP) {
            MenuEvent::Select { cursor: pos }
        } else {
            MenuEvent::Move { cursor: pos }
        }
    }

    pub(crate) fn handle_mouse(&mut self, row: i32, col: i32) -> Option<MenuEvent> {
        if !self.active.contains(row, col) {
            // A click left of the list backs out.
            return (col < self.active.col).then_some(MenuEvent::Escape);
        }

        let pos = self
            .skin
            .hit_test(row, col, self.filter_count, self.top, &self.active)?;
        if !self.is_valid_row(pos) {
            return None;
        }
        Some(self.pick(pos))
    }

    pub(crate) fn handle_keypress(&mut self, key: Key) -> Option<MenuEvent> {
        if let Key::Char(c) = key
            && let Some(pos) = self.cursor_for_tag(c)
            && self.is_valid_row(pos)
        {
            return Some(self.pick(pos));
        }

        if key == Key::Escape {
            return Some(MenuEvent::Escape);
        }

        // Nothing to navigate: swallow everything else.
        if self.filter_count == 0 {
            return None;
        }

        if key == Key::Char(' ') {
            return self.page_forward();
        }

        if key.is_enter() {
            return self.cursor.map(|cursor| MenuEvent::Select { cursor });
        }

        let dir = key.direction()?;
        if dir.is_diagonal() {
            None
        } else if dir.dx < 0 {
            Some(MenuEvent::Escape)
        } else if dir.dx > 0 {
            self.cursor.map(|cursor| MenuEvent::Select { cursor })
        } else {
            self.step(dir.dy > 0)
        }
    }

    /// Visible index whose tag matches `key` under the active tag mode.
    pub(crate) fn cursor_for_tag(&self, key: char) -> Option<usize> {
        let caseless = self.flags.contains(MenuFlags::CASELESS_TAGS);
        let matches = |tag: char| {
            if caseless {
                tag.to_uppercase().eq(key.to_uppercase())
            } else {
                tag == key
            }
        };

        match self.tag_mode() {
            TagMode::None => None,
            TagMode::View(selections) => (0..self.filter_count).find(|&pos| {
                self.skin
                    .tag_at(pos, self.top, selections)
                    .is_some_and(matches)
            }),
            TagMode::Selections(selections) => selections.chars().position(matches),
            TagMode::Row => (0..self.filter_count).find(|&pos| {
                self.row_id(pos)
                    .and_then(|oid| self.rows.get(oid))
                    .and_then(|row| self.source.tag(row))
                    .is_some_and(matches)
            }),
        }
    }

    /// Space bar: jump a page forward, wrapping to the top past the end.
    fn page_forward(&mut self) -> Option<MenuEvent> {
        let page_rows = self.active.page_rows.max(1) as usize;
        let total = self.filter_count;
        if page_rows >= total {
            return None;
        }

        let mut next = self.cursor.map_or(0, |cursor| cursor + page_rows);
        if next >= total {
            next = 0;
        }
        let next = self.next_row_where(next, true, |v| v == Validity::Valid)?;

        self.cursor = Some(next);
        self.top = next;
        Some(MenuEvent::Move { cursor: next })
    }

    /// Move to the next valid row up or down, wrapping around. Gives up
    /// after one full cycle.
    fn step(&mut self, down: bool) -> Option<MenuEvent> {
        let count = self.filter_count;
        let start = match (self.cursor, down) {
            (Some(cursor), true) => (cursor + 1) % count,
            (Some(cursor), false) => (cursor + count - 1) % count,
            (None, true) => 0,
            (None, false) => count - 1,
        };

        let Some(next) = self.next_row_where(start, down, |v| v == Validity::Valid) else {
            debug!("no valid row to move to among {} rows", count);
            return None;
        };
        self.cursor = Some(next);
        Some(MenuEvent::Move { cursor: next })
    }
}

fn key_command(key: Key) -> RowEvent {
    match key {
        Key::Char(c) => RowEvent::Command(c),
        _ => RowEvent::Select,
    }
}
