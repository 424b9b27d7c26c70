//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::layout::Size;
use ratatui::style::Style;

use crate::core::event::RowEvent;
use crate::core::layout::{RowPainter, SkinId};
use crate::core::menu::Menu;
use crate::core::region::{Region, RowSlot};
use crate::core::rows::{RowSource, Validity};
use crate::core::surface::{Surface, cursor_style};

/// `count` rows drawn as `row 0`, `row 1`, ... for layout tests.
pub struct NumberedRows(pub usize);

impl RowPainter for NumberedRows {
    fn len(&self) -> usize {
        self.0
    }

    fn paint(&self, surface: &mut dyn Surface, pos: usize, _top: usize, _is_cursor: bool, slot: RowSlot) {
        surface.put_str(slot.row, slot.col, slot.width, Style::default(), &format!("row {pos}"));
    }
}

/// A row that records every event offered to it.
#[derive(Debug, Clone)]
pub struct TestRow {
    pub tag: char,
    pub validity: Validity,
    /// Whether the handler reports events as consumed.
    pub consumes: bool,
    /// Whether handling an event hides the row.
    pub hides: bool,
    pub hits: Vec<RowEvent>,
}

#[derive(Debug, Default)]
pub struct TestRows {
    pub resizes: usize,
}

impl RowSource for TestRows {
    type Row = TestRow;

    fn tag(&self, row: &TestRow) -> Option<char> {
        Some(row.tag)
    }

    fn validity(&self, row: &TestRow) -> Validity {
        row.validity
    }

    fn render(&self, row: &TestRow, is_cursor: bool, slot: RowSlot, surface: &mut dyn Surface) {
        let style = cursor_style(row.validity == Validity::Valid, is_cursor);
        surface.put_str(slot.row, slot.col, slot.width, style, &format!("item {}", row.tag));
    }

    fn handle(&mut self, row: &mut TestRow, event: RowEvent, _cursor: usize, _surface: &mut dyn Surface) -> bool {
        row.hits.push(event);
        if row.hides {
            row.validity = Validity::Hidden;
        }
        row.consumes
    }

    fn on_resize(&mut self) {
        self.resizes += 1;
    }
}

/// Rows tagged and flagged as listed.
pub fn test_rows(entries: &[(char, Validity)]) -> Vec<TestRow> {
    entries
        .iter()
        .map(|&(tag, validity)| TestRow {
            tag,
            validity,
            consumes: false,
            hides: false,
            hits: Vec::new(),
        })
        .collect()
}

/// A scrolling menu over `rows`, laid out at the top-left of a 20-column
/// screen with `page_rows` lines.
pub fn test_menu(rows: &mut [TestRow], page_rows: i32) -> Menu<'_, TestRows> {
    let mut menu = Menu::new(SkinId::Scroll, TestRows::default());
    menu.set_data(rows);
    menu.layout(Region::new(0, 0, 20, page_rows), Size::new(20, page_rows.max(1) as u16));
    menu
}
