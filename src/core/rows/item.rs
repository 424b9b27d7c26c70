//! Actions decorated with per-row flags and an optional selection character.

use std::marker::PhantomData;

use bitflags::bitflags;

use crate::core::event::RowEvent;
use crate::core::region::RowSlot;
use crate::core::surface::Surface;

use super::{MenuAction, RowSource, Validity};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ItemFlags: u8 {
        /// Selecting the row does nothing.
        const DISABLED = 0b0000_0001;
        /// Drawn with the dimmed color pair.
        const GRAYED = 0b0000_0010;
        /// Toggled on each selection of a `SELECTABLE` row.
        const SELECTED = 0b0000_0100;
        const SELECTABLE = 0b0000_1000;
        /// Never drawn and never landed on by the cursor.
        const HIDDEN = 0b0001_0000;
    }
}

#[derive(Debug)]
pub struct MenuItem<'f> {
    pub act: MenuAction<'f>,
    /// Selection character; wins over `act.tag`.
    pub sel: Option<char>,
    pub flags: ItemFlags,
}

impl<'f> MenuItem<'f> {
    pub fn new(act: MenuAction<'f>) -> Self {
        Self {
            act,
            sel: None,
            flags: ItemFlags::empty(),
        }
    }

    pub fn sel(mut self, sel: char) -> Self {
        self.sel = Some(sel);
        self
    }

    pub fn flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn is_selected(&self) -> bool {
        self.flags.contains(ItemFlags::SELECTED)
    }
}

/// Row source for slices of [`MenuItem`].
pub struct ItemRows<'f> {
    _rows: PhantomData<fn() -> MenuItem<'f>>,
}

impl ItemRows<'_> {
    pub fn new() -> Self {
        Self { _rows: PhantomData }
    }
}

impl Default for ItemRows<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'f> RowSource for ItemRows<'f> {
    type Row = MenuItem<'f>;

    fn tag(&self, row: &MenuItem<'f>) -> Option<char> {
        row.sel.or(row.act.tag)
    }

    fn validity(&self, row: &MenuItem<'f>) -> Validity {
        if row.flags.contains(ItemFlags::HIDDEN) {
            Validity::Hidden
        } else if row.act.is_named() {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }

    fn render(&self, row: &MenuItem<'f>, is_cursor: bool, slot: RowSlot, surface: &mut dyn Surface) {
        let known = !row.flags.contains(ItemFlags::GRAYED);
        row.act.draw(known, is_cursor, slot, surface);
    }

    fn handle(
        &mut self,
        row: &mut MenuItem<'f>,
        event: RowEvent,
        cursor: usize,
        surface: &mut dyn Surface,
    ) -> bool {
        if event != RowEvent::Select {
            return false;
        }
        if row.flags.contains(ItemFlags::DISABLED) {
            return true;
        }

        row.act.invoke(surface, cursor);
        if row.flags.contains(ItemFlags::SELECTABLE) {
            row.flags.toggle(ItemFlags::SELECTED);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::HeadlessSurface;
    use ratatui::style::Color;

    #[test]
    fn test_hidden_flag_wins_over_label() {
        let rows = ItemRows::new();
        let item = MenuItem::new(MenuAction::new("Secret")).flags(ItemFlags::HIDDEN);
        assert_eq!(rows.validity(&item), Validity::Hidden);
        assert_eq!(
            rows.validity(&MenuItem::new(MenuAction::new(""))),
            Validity::Invalid
        );
    }

    #[test]
    fn test_selection_char_wins_over_action_tag() {
        let rows = ItemRows::new();
        let tagged = MenuItem::new(MenuAction::new("Quaff").tag('q'));
        assert_eq!(rows.tag(&tagged), Some('q'));
        assert_eq!(rows.tag(&tagged.sel('Q')), Some('Q'));
    }

    #[test]
    fn test_selectable_item_toggles_after_callback() {
        let mut calls = 0;
        {
            let mut surface = HeadlessSurface::new(10, 2);
            let mut rows = ItemRows::new();
            let mut item = MenuItem::new(MenuAction::new("Torch").on_select(|_, _, _| calls += 1))
                .flags(ItemFlags::SELECTABLE);

            assert!(rows.handle(&mut item, RowEvent::Select, 0, &mut surface));
            assert!(item.is_selected());
            assert!(rows.handle(&mut item, RowEvent::Select, 0, &mut surface));
            assert!(!item.is_selected());
        }
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_disabled_item_consumes_without_acting() {
        let mut calls = 0;
        {
            let mut surface = HeadlessSurface::new(10, 2);
            let mut rows = ItemRows::new();
            let mut item = MenuItem::new(MenuAction::new("Rope").on_select(|_, _, _| calls += 1))
                .flags(ItemFlags::DISABLED | ItemFlags::SELECTABLE);

            assert!(rows.handle(&mut item, RowEvent::Select, 0, &mut surface));
            assert!(!item.is_selected());
        }
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_grayed_item_uses_dim_colors() {
        let mut surface = HeadlessSurface::new(10, 1);
        let rows = ItemRows::new();
        let item = MenuItem::new(MenuAction::new("Ash")).flags(ItemFlags::GRAYED);
        rows.render(&item, false, RowSlot::new(0, 0, 10), &mut surface);
        assert_eq!(surface.line(0).trim_end(), "Ash");
        assert_eq!(surface.style_at(0, 0).fg, Some(Color::Gray));
    }
}
