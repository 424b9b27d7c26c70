//! Plain actions: a label, an optional tag and an optional callback.

use std::fmt;
use std::marker::PhantomData;

use crate::core::event::RowEvent;
use crate::core::region::RowSlot;
use crate::core::surface::{Surface, cursor_style};

use super::{RowSource, Validity};

/// Callback run when an action is selected: `(surface, label, cursor)`.
pub type ActionFn<'f> = Box<dyn FnMut(&mut dyn Surface, &str, usize) + 'f>;

pub struct MenuAction<'f> {
    pub tag: Option<char>,
    /// Empty labels make the row invalid.
    pub name: &'f str,
    pub action: Option<ActionFn<'f>>,
}

impl<'f> MenuAction<'f> {
    pub fn new(name: &'f str) -> Self {
        Self {
            tag: None,
            name,
            action: None,
        }
    }

    pub fn tag(mut self, tag: char) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn on_select<F>(mut self, action: F) -> Self
    where
        F: FnMut(&mut dyn Surface, &str, usize) + 'f,
    {
        self.action = Some(Box::new(action));
        self
    }

    pub(super) fn is_named(&self) -> bool {
        !self.name.is_empty()
    }

    /// Run the callback, if any.
    pub(super) fn invoke(&mut self, surface: &mut dyn Surface, cursor: usize) {
        if let Some(action) = self.action.as_mut() {
            action(surface, self.name, cursor);
        }
    }

    pub(super) fn draw(&self, known: bool, is_cursor: bool, slot: RowSlot, surface: &mut dyn Surface) {
        surface.erase(slot.row, slot.col, slot.width);
        if self.is_named() {
            surface.put_str(
                slot.row,
                slot.col,
                slot.width,
                cursor_style(known, is_cursor),
                self.name,
            );
        }
    }
}

impl fmt::Debug for MenuAction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuAction")
            .field("tag", &self.tag)
            .field("name", &self.name)
            .field("action", &self.action.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Row source for slices of [`MenuAction`].
pub struct ActionRows<'f> {
    _rows: PhantomData<fn() -> MenuAction<'f>>,
}

impl ActionRows<'_> {
    pub fn new() -> Self {
        Self { _rows: PhantomData }
    }
}

impl Default for ActionRows<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'f> RowSource for ActionRows<'f> {
    type Row = MenuAction<'f>;

    fn tag(&self, row: &MenuAction<'f>) -> Option<char> {
        row.tag
    }

    fn validity(&self, row: &MenuAction<'f>) -> Validity {
        if row.is_named() {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }

    fn render(&self, row: &MenuAction<'f>, is_cursor: bool, slot: RowSlot, surface: &mut dyn Surface) {
        row.draw(true, is_cursor, slot, surface);
    }

    fn handle(
        &mut self,
        row: &mut MenuAction<'f>,
        event: RowEvent,
        cursor: usize,
        surface: &mut dyn Surface,
    ) -> bool {
        // The callback runs, but the selection still goes back to the caller.
        if event == RowEvent::Select {
            row.invoke(surface, cursor);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::HeadlessSurface;

    #[test]
    fn test_empty_label_is_invalid() {
        let rows = ActionRows::new();
        assert_eq!(rows.validity(&MenuAction::new("Go")), Validity::Valid);
        assert_eq!(rows.validity(&MenuAction::new("")), Validity::Invalid);
    }

    #[test]
    fn test_select_runs_callback_without_consuming() {
        let mut seen = Vec::new();
        {
            let mut surface = HeadlessSurface::new(20, 4);
            let mut rows = ActionRows::new();
            let mut row = MenuAction::new("Open")
                .tag('o')
                .on_select(|_, name, cursor| seen.push((name.to_string(), cursor)));

            assert!(!rows.handle(&mut row, RowEvent::Select, 3, &mut surface));
            assert!(!rows.handle(&mut row, RowEvent::Command('x'), 3, &mut surface));
        }
        assert_eq!(seen, vec![("Open".to_string(), 3)]);
    }

    #[test]
    fn test_render_clips_to_width() {
        let mut surface = HeadlessSurface::new(20, 2);
        let rows = ActionRows::new();
        rows.render(
            &MenuAction::new("Character sheet"),
            false,
            RowSlot::new(1, 2, 9),
            &mut surface,
        );
        assert_eq!(surface.line(1), "  Character         ");
    }
}
