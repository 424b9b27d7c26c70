//! Single-column list that scrolls to follow the cursor.

use crate::core::region::{Region, RowSlot, cell};
use crate::core::surface::Surface;

use super::{LayoutStrategy, RowPainter, clamp_index};

#[derive(Debug, Clone, Copy, Default)]
pub struct Scrolling;

/// New scroll position keeping `cursor` on screen with a one-row margin
/// from either edge when the page is tall enough for one.
fn follow_cursor(cursor: usize, top: usize, page_rows: usize) -> usize {
    let margin = usize::from(page_rows > 2);
    let mut top = top;
    if cursor < top + margin {
        top = cursor.saturating_sub(margin);
    }
    if cursor + margin >= top + page_rows {
        top = cursor + margin + 1 - page_rows;
    }
    top
}

impl LayoutStrategy for Scrolling {
    fn hit_test(&self, row: i32, _col: i32, count: usize, top: usize, region: &Region) -> Option<usize> {
        let index = i64::from(row - region.row) + top as i64;
        clamp_index(index, count)
    }

    fn redraw(
        &self,
        rows: &dyn RowPainter,
        surface: &mut dyn Surface,
        cursor: Option<usize>,
        top: &mut usize,
        region: &Region,
    ) {
        let count = rows.len();
        let page_rows = region.page_rows.max(0) as usize;

        if let Some(cursor) = cursor {
            *top = follow_cursor(cursor, *top, page_rows);
        }
        *top = (*top).min(count.saturating_sub(page_rows));

        for i in 0..page_rows {
            let line = region.row + i as i32;
            surface.erase(cell(line), cell(region.col), cell(region.width));

            let pos = *top + i;
            if pos < count {
                let slot = RowSlot::new(line, region.col, region.width);
                rows.paint(surface, pos, *top, cursor == Some(pos), slot);
            }
        }

        if let Some(cursor) = cursor
            && (*top..*top + page_rows).contains(&cursor)
        {
            let line = region.row + (cursor - *top) as i32;
            surface.set_caret(cell(line), cell(region.col));
        }
    }

    fn tag_at(&self, pos: usize, top: usize, selections: Option<&str>) -> Option<char> {
        let offset = pos.checked_sub(top)?;
        selections?.chars().nth(offset)
    }
}
