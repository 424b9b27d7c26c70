use std::marker::PhantomData;

use crate::core::region::RowSlot;
use crate::core::surface::{Surface, cursor_style};

use super::RowSource;

/// Rows that are just text. Selection is left to the caller.
pub struct StringRows<S> {
    _rows: PhantomData<fn() -> S>,
}

impl<S> StringRows<S> {
    pub fn new() -> Self {
        Self { _rows: PhantomData }
    }
}

impl<S> Default for StringRows<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> RowSource for StringRows<S> {
    type Row = S;

    fn render(&self, row: &S, is_cursor: bool, slot: RowSlot, surface: &mut dyn Surface) {
        surface.put_str(
            slot.row,
            slot.col,
            slot.width,
            cursor_style(true, is_cursor),
            row.as_ref(),
        );
    }
}
