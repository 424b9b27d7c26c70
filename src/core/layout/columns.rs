//! Multi-column list. Every row is on screen at once; no scrolling.

use crate::core::region::{Region, RowSlot, cell};
use crate::core::surface::Surface;

use super::{LayoutStrategy, RowPainter, clamp_index};

pub const DEFAULT_COLUMN_WIDTH: u16 = 23;

#[derive(Debug, Clone, Copy)]
pub struct Columns {
    max_width: u16,
}

impl Columns {
    pub fn with_max_width(max_width: u16) -> Self {
        Self {
            max_width: max_width.max(1),
        }
    }

    /// `(column_count, column_width)` for `count` rows in `region`.
    fn grid(&self, count: usize, region: &Region) -> (usize, i32) {
        let page_rows = region.page_rows.max(1) as usize;
        let columns = count.div_ceil(page_rows);
        if columns == 0 {
            return (0, 0);
        }
        let fitted = region.width.max(0) / columns as i32;
        (columns, fitted.min(i32::from(self.max_width)))
    }
}

impl Default for Columns {
    fn default() -> Self {
        Self::with_max_width(DEFAULT_COLUMN_WIDTH)
    }
}

impl LayoutStrategy for Columns {
    fn hit_test(&self, row: i32, col: i32, count: usize, _top: usize, region: &Region) -> Option<usize> {
        let (columns, width) = self.grid(count, region);
        let page_rows = i64::from(region.page_rows.max(1));
        let column = if width > 0 {
            i64::from((col - region.col) / width).clamp(0, columns as i64 - 1)
        } else {
            0
        };
        let line = i64::from(row - region.row).clamp(0, page_rows - 1);
        clamp_index(column * page_rows + line, count)
    }

    fn redraw(
        &self,
        rows: &dyn RowPainter,
        surface: &mut dyn Surface,
        cursor: Option<usize>,
        top: &mut usize,
        region: &Region,
    ) {
        *top = 0;
        let page_rows = region.page_rows.max(1) as usize;
        let (_, width) = self.grid(rows.len(), region);

        for i in 0..page_rows {
            surface.erase(cell(region.row + i as i32), cell(region.col), cell(region.width));
        }
        if width <= 0 {
            return;
        }

        for pos in 0..rows.len() {
            let column = (pos / page_rows) as i32;
            let line = (pos % page_rows) as i32;
            let slot = RowSlot::new(region.row + line, region.col + column * width, width);
            rows.paint(surface, pos, 0, cursor == Some(pos), slot);
        }
    }

    fn tag_at(&self, pos: usize, _top: usize, selections: Option<&str>) -> Option<char> {
        selections?.chars().nth(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::NumberedRows;
    use crate::tui::HeadlessSurface;

    #[test]
    fn test_grid_caps_column_width() {
        let region = Region::new(0, 0, 80, 4);
        assert_eq!(Columns::default().grid(10, &region), (3, 23));
        assert_eq!(Columns::default().grid(0, &region), (0, 0));

        let narrow = Region::new(0, 0, 30, 4);
        assert_eq!(Columns::default().grid(10, &narrow), (3, 10));
    }

    #[test]
    fn test_redraw_fills_columns_top_to_bottom() {
        let region = Region::new(0, 0, 30, 2);
        let mut surface = HeadlessSurface::new(30, 2);
        let mut top = 7;

        Columns::default().redraw(&NumberedRows(5), &mut surface, Some(3), &mut top, &region);

        assert_eq!(top, 0);
        assert_eq!(surface.line(0), "row 0     row 2     row 4     ");
        assert_eq!(surface.line(1), "row 1     row 3               ");
    }

    #[test]
    fn test_hit_test_back_solves_column_then_row() {
        let region = Region::new(2, 1, 30, 2);
        let columns = Columns::default();
        assert_eq!(columns.hit_test(1, 2, 5, 0, &region), Some(0));
        assert_eq!(columns.hit_test(2, 13, 5, 0, &region), Some(3));
        assert_eq!(columns.hit_test(1, 25, 5, 0, &region), Some(4));
        // Below the last row of the last column clamps to the final row.
        assert_eq!(columns.hit_test(2, 25, 5, 0, &region), Some(4));
        assert_eq!(columns.hit_test(1, 2, 0, 0, &region), None);
    }

    #[test]
    fn test_tag_at_ignores_scroll() {
        let columns = Columns::default();
        assert_eq!(columns.tag_at(2, 5, Some("xyz")), Some('z'));
        assert_eq!(columns.tag_at(3, 0, Some("xyz")), None);
    }
}
