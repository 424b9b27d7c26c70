//! # Menu
//!
//! A [`Menu`] ties one [`RowSource`] to one [`LayoutStrategy`] and carries
//! everything a list needs between runs: the borrowed rows, an optional
//! view filter, geometry, the cursor and the scroll position.
//!
//! ```text
//! Menu
//! ├── rows: &mut [R::Row]      // caller-owned, rebound with set_data()
//! ├── filter: Option<&[usize]> // visible index → row id
//! ├── source: R                // what a row means
//! ├── skin: dyn LayoutStrategy // where rows go on screen
//! ├── boundary / active        // requested and usable regions
//! └── cursor / top             // navigation state
//! ```
//!
//! The event loop itself lives in `select.rs`.

use bitflags::bitflags;
use log::debug;
use ratatui::layout::Size;
use ratatui::style::{Color, Style};
use unicode_width::UnicodeWidthStr;

use crate::core::layout::{LayoutStrategy, RowPainter, SkinId};
use crate::core::region::{Region, RowSlot, cell};
use crate::core::rows::{RowSource, Validity};
use crate::core::surface::{Surface, cursor_style};

/// `a..z`, for menus tagged by position.
pub const LOWER_CASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// `A..Z`, for menus tagged by position.
pub const UPPER_CASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Width of the `"x) "` tag prefix.
const TAG_WIDTH: u16 = 3;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MenuFlags: u8 {
        /// Tags belong to screen positions and come from the layout.
        const VIEW_TAGS = 0b0000_0001;
        /// No tags at all; movement keys and mouse only.
        const NO_TAGS = 0b0000_0010;
        /// Ignore `selections` and ask the rows for their tags.
        const ROW_TAGS = 0b0000_0100;
        /// `a` also selects the row tagged `A`.
        const CASELESS_TAGS = 0b0000_1000;
        /// First tap moves the cursor, a second tap on the same row selects.
        const DOUBLE_TAP = 0b0001_0000;
    }
}

/// Where a row's selection character comes from, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagMode<'a> {
    None,
    /// Tags come from the layout, which may consult `selections`.
    View(Option<&'a str>),
    Selections(&'a str),
    Row,
}

/// Browse callback: `(row_id, rows, active_region, surface)`.
pub type BrowseHook<'a, T> = Box<dyn FnMut(usize, &[T], &Region, &mut dyn Surface) + 'a>;

pub struct Menu<'a, R: RowSource> {
    pub title: Option<&'a str>,
    pub prompt: Option<&'a str>,
    /// Tag characters by visible position.
    pub selections: Option<&'a str>,
    /// Keys routed to the row handler before any navigation.
    pub cmd_keys: Option<&'a str>,
    pub browse_hook: Option<BrowseHook<'a, R::Row>>,
    pub flags: MenuFlags,

    pub(crate) boundary: Region,
    pub(crate) active: Region,
    pub(crate) prompt_inline: bool,

    pub(crate) filter: Option<&'a [usize]>,
    pub(crate) filter_count: usize,
    pub(crate) rows: &'a mut [R::Row],

    pub(crate) source: R,
    pub(crate) skin: Box<dyn LayoutStrategy>,

    pub(crate) cursor: Option<usize>,
    pub(crate) top: usize,
}

impl<'a, R: RowSource> Menu<'a, R> {
    /// Build a menu with one of the built-in layouts.
    pub fn new(skin: SkinId, source: R) -> Self {
        Self::with_layout(skin.strategy(), source)
    }

    pub fn with_layout(skin: Box<dyn LayoutStrategy>, source: R) -> Self {
        Self {
            title: None,
            prompt: None,
            selections: None,
            cmd_keys: None,
            browse_hook: None,
            flags: MenuFlags::empty(),
            boundary: Region::default(),
            active: Region::default(),
            prompt_inline: false,
            filter: None,
            filter_count: 0,
            rows: Default::default(),
            source,
            skin,
            cursor: None,
            top: 0,
        }
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    /// Place the menu in `region`. Non-positive dimensions are relative to
    /// `screen`. Returns `false` if no usable space is left once title and
    /// prompt are accounted for.
    pub fn layout(&mut self, region: Region, screen: Size) -> bool {
        self.boundary = region;
        self.calc_size(screen)
    }

    pub(crate) fn calc_size(&mut self, screen: Size) -> bool {
        let mut active = self.boundary.resolve(screen);

        if self.title.is_some() {
            active.row += 2;
            active.page_rows -= 2;
            active.col += 4;
            active.width -= 4;
        }

        self.prompt_inline = false;
        if let Some(prompt) = self.prompt {
            if active.page_rows > 1 {
                active.page_rows -= 1;
            } else {
                let offset = prompt.width() as i32 + 2;
                active.col += offset;
                active.width -= offset;
                self.prompt_inline = true;
            }
        }

        self.active = active;
        let usable = active.is_usable();
        debug!(
            "menu layout: boundary {:?} -> active {:?} (usable: {})",
            self.boundary, active, usable
        );
        usable
    }

    pub fn boundary(&self) -> Region {
        self.boundary
    }

    /// The region rows are actually drawn in.
    pub fn active(&self) -> Region {
        self.active
    }

    // ------------------------------------------------------------------
    // Data and filtering
    // ------------------------------------------------------------------

    /// Bind a new set of rows.
    pub fn set_data(&mut self, rows: &'a mut [R::Row]) {
        self.rows = rows;
        if self.filter.is_none() {
            self.filter_count = self.rows.len();
        }
        self.settle_cursor();
    }

    pub fn rows(&self) -> &[R::Row] {
        &*self.rows
    }

    pub fn source(&self) -> &R {
        &self.source
    }

    /// Number of rows in the underlying data set.
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// Show only the rows listed in `filter`, in that order.
    pub fn set_filter(&mut self, filter: &'a [usize]) {
        self.filter = Some(filter);
        self.filter_count = filter.len();
        self.settle_cursor();
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
        self.filter_count = self.rows.len();
        self.settle_cursor();
    }

    /// Number of visible rows.
    pub fn filter_count(&self) -> usize {
        self.filter_count
    }

    /// Row id behind a visible index.
    pub fn row_id(&self, pos: usize) -> Option<usize> {
        if pos >= self.filter_count {
            return None;
        }
        match self.filter {
            Some(filter) => filter.get(pos).copied(),
            None => Some(pos),
        }
    }

    // ------------------------------------------------------------------
    // Cursor
    // ------------------------------------------------------------------

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Move the cursor, clamped into the visible rows.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = Some(pos);
        self.settle_cursor();
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub(crate) fn validity(&self, pos: usize) -> Validity {
        self.row_id(pos)
            .and_then(|oid| self.rows.get(oid))
            .map_or(Validity::Hidden, |row| self.source.validity(row))
    }

    /// True if the cursor may land on visible row `pos`.
    pub(crate) fn is_valid_row(&self, pos: usize) -> bool {
        self.validity(pos) == Validity::Valid
    }

    /// First visible row at or after `start` (or before it, going
    /// backwards) that is not hidden. Looks at each row at most once.
    pub(crate) fn next_row_where(
        &self,
        start: usize,
        forward: bool,
        accept: impl Fn(Validity) -> bool,
    ) -> Option<usize> {
        let count = self.filter_count;
        let mut pos = start.min(count.checked_sub(1)?);
        for _ in 0..count {
            if accept(self.validity(pos)) {
                return Some(pos);
            }
            pos = if forward {
                (pos + 1) % count
            } else {
                (pos + count - 1) % count
            };
        }
        None
    }

    /// Clamp the cursor into the visible rows and step off hidden ones.
    pub(crate) fn settle_cursor(&mut self) {
        let Some(last) = self.filter_count.checked_sub(1) else {
            self.cursor = None;
            self.top = 0;
            return;
        };
        let pos = self.cursor.unwrap_or(0).min(last);
        self.cursor = self.next_row_where(pos, true, |v| v != Validity::Hidden);
        self.top = self.top.min(last);
    }

    // ------------------------------------------------------------------
    // Tags and drawing
    // ------------------------------------------------------------------

    pub fn tag_mode(&self) -> TagMode<'a> {
        if self.flags.contains(MenuFlags::NO_TAGS) {
            TagMode::None
        } else if self.flags.contains(MenuFlags::VIEW_TAGS) {
            TagMode::View(self.selections)
        } else if let Some(selections) = self.selections
            && !self.flags.contains(MenuFlags::ROW_TAGS)
        {
            TagMode::Selections(selections)
        } else {
            TagMode::Row
        }
    }

    /// Draw title, prompt, browse output and the row window.
    pub fn refresh(&mut self, surface: &mut dyn Surface) {
        if self.filter.is_none() {
            self.filter_count = self.rows.len();
        }

        let active = self.active;
        let chrome = Style::default().fg(Color::White);

        if let Some(title) = self.title {
            surface.put_str(
                cell(self.boundary.row),
                cell(self.boundary.col),
                cell(active.width),
                chrome,
                title,
            );
        }

        if let Some(prompt) = self.prompt {
            let (row, col) = if self.prompt_inline {
                (active.row, active.col - prompt.width() as i32 - 2)
            } else {
                (active.row + active.page_rows, active.col)
            };
            surface.put_str(cell(row), cell(col), cell(active.width), chrome, prompt);
        }

        if let Some(oid) = self.cursor.and_then(|pos| self.row_id(pos))
            && let Some(hook) = self.browse_hook.as_mut()
        {
            hook(oid, &*self.rows, &active, surface);
        }

        let view = RowView {
            rows: &*self.rows,
            source: &self.source,
            skin: self.skin.as_ref(),
            filter: self.filter,
            count: self.filter_count,
            mode: self.tag_mode(),
        };
        self.skin
            .redraw(&view, surface, self.cursor, &mut self.top, &active);
    }
}

/// Read-only view of a menu's rows handed to the layout during a redraw.
struct RowView<'m, R: RowSource> {
    rows: &'m [R::Row],
    source: &'m R,
    skin: &'m dyn LayoutStrategy,
    filter: Option<&'m [usize]>,
    count: usize,
    mode: TagMode<'m>,
}

impl<R: RowSource> RowView<'_, R> {
    fn row(&self, pos: usize) -> Option<&R::Row> {
        let oid = match self.filter {
            Some(filter) => *filter.get(pos)?,
            None => pos,
        };
        self.rows.get(oid)
    }

    fn tag(&self, pos: usize, top: usize, row: &R::Row) -> Option<char> {
        match self.mode {
            TagMode::None => None,
            TagMode::View(selections) => self.skin.tag_at(pos, top, selections),
            TagMode::Selections(selections) => selections.chars().nth(pos),
            TagMode::Row => self.source.tag(row),
        }
    }
}

impl<R: RowSource> RowPainter for RowView<'_, R> {
    fn len(&self) -> usize {
        self.count
    }

    fn paint(&self, surface: &mut dyn Surface, pos: usize, top: usize, is_cursor: bool, slot: RowSlot) {
        let Some(row) = self.row(pos) else {
            return;
        };
        let validity = self.source.validity(row);
        if validity == Validity::Hidden {
            return;
        }

        let mut slot = slot;
        if let Some(tag) = self.tag(pos, top, row) {
            let style = cursor_style(validity == Validity::Valid, is_cursor);
            surface.put_str(
                slot.row,
                slot.col,
                slot.width.min(TAG_WIDTH),
                style,
                &format!("{tag}) "),
            );
            slot = slot.shifted(TAG_WIDTH);
        }

        self.source.render(row, is_cursor, slot, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TestRow, test_menu, test_rows};
    use crate::tui::HeadlessSurface;

    fn lettered(count: usize) -> Vec<TestRow> {
        let entries: Vec<_> = ('a'..='z').take(count).map(|c| (c, Validity::Valid)).collect();
        test_rows(&entries)
    }

    #[test]
    fn test_layout_reserves_title_and_prompt() {
        let mut rows = lettered(3);
        let mut menu = test_menu(&mut rows, 5);
        menu.title = Some("Pick");
        menu.prompt = Some("? ");
        assert!(menu.layout(Region::new(0, 0, 20, 10), Size::new(20, 10)));
        assert_eq!(menu.active(), Region::new(4, 2, 16, 7));
        assert_eq!(menu.boundary(), Region::new(0, 0, 20, 10));
    }

    #[test]
    fn test_layout_single_line_prompt_goes_inline() {
        let mut rows = lettered(1);
        let mut menu = test_menu(&mut rows, 1);
        menu.prompt = Some("Go:");
        assert!(menu.layout(Region::new(0, 0, 20, 1), Size::new(20, 1)));
        assert_eq!(menu.active(), Region::new(5, 0, 15, 1));

        let mut surface = HeadlessSurface::new(20, 1);
        menu.refresh(&mut surface);
        assert_eq!(surface.line(0), "Go:  a) item a      ");
    }

    #[test]
    fn test_layout_rejects_unusable_region() {
        let mut rows = lettered(3);
        let mut menu = test_menu(&mut rows, 5);
        menu.title = Some("Too small");
        assert!(!menu.layout(Region::new(0, 0, 20, 2), Size::new(20, 10)));
        assert!(!menu.layout(Region::new(0, 0, 4, 5), Size::new(20, 10)));
        menu.title = None;
        assert!(menu.layout(Region::new(0, 0, 4, 5), Size::new(20, 10)));
    }

    #[test]
    fn test_layout_relative_region() {
        let mut rows = lettered(3);
        let mut menu = test_menu(&mut rows, 5);
        assert!(menu.layout(Region::new(2, 1, -2, 0), Size::new(20, 10)));
        assert_eq!(menu.active(), Region::new(2, 1, 16, 9));
    }

    #[test]
    fn test_set_data_settles_cursor() {
        let mut hidden_first = test_rows(&[('a', Validity::Hidden), ('b', Validity::Invalid)]);
        let menu = test_menu(&mut hidden_first, 5);
        assert_eq!(menu.cursor(), Some(1));
        drop(menu);

        let mut empty: Vec<TestRow> = Vec::new();
        let menu = test_menu(&mut empty, 5);
        assert_eq!(menu.cursor(), None);
        assert_eq!(menu.count(), 0);
        drop(menu);

        let mut rows = lettered(4);
        let mut menu = test_menu(&mut rows, 5);
        menu.set_cursor(9);
        assert_eq!(menu.cursor(), Some(3));
    }

    #[test]
    fn test_set_data_clamps_cursor_to_shorter_rows() {
        let mut long = lettered(5);
        let mut short = lettered(2);
        let mut menu = test_menu(&mut long, 5);
        menu.set_cursor(4);
        assert_eq!(menu.cursor(), Some(4));

        menu.set_data(&mut short);
        assert_eq!(menu.count(), 2);
        assert_eq!(menu.filter_count(), 2);
        assert_eq!(menu.cursor(), Some(1));
    }

    #[test]
    fn test_all_hidden_leaves_no_cursor() {
        let mut rows = test_rows(&[('a', Validity::Hidden), ('b', Validity::Hidden)]);
        let menu = test_menu(&mut rows, 5);
        assert_eq!(menu.cursor(), None);
    }

    #[test]
    fn test_filter_maps_visible_rows() {
        let mut rows = lettered(3);
        let filter = [2, 0];
        let mut menu = test_menu(&mut rows, 5);
        menu.set_cursor(2);
        menu.set_filter(&filter);

        assert_eq!(menu.filter_count(), 2);
        assert_eq!(menu.count(), 3);
        assert_eq!(menu.cursor(), Some(1));
        assert_eq!(menu.row_id(0), Some(2));
        assert_eq!(menu.row_id(1), Some(0));
        assert_eq!(menu.row_id(2), None);

        menu.clear_filter();
        assert_eq!(menu.filter_count(), 3);
        assert_eq!(menu.row_id(2), Some(2));
    }

    #[test]
    fn test_tag_mode_precedence() {
        let mut rows = lettered(1);
        let mut menu = test_menu(&mut rows, 5);
        assert_eq!(menu.tag_mode(), TagMode::Row);

        menu.selections = Some(LOWER_CASE);
        assert_eq!(menu.tag_mode(), TagMode::Selections(LOWER_CASE));

        menu.flags = MenuFlags::ROW_TAGS;
        assert_eq!(menu.tag_mode(), TagMode::Row);

        menu.flags = MenuFlags::VIEW_TAGS | MenuFlags::ROW_TAGS;
        assert_eq!(menu.tag_mode(), TagMode::View(Some(LOWER_CASE)));

        menu.flags |= MenuFlags::NO_TAGS;
        assert_eq!(menu.tag_mode(), TagMode::None);
    }

    #[test]
    fn test_refresh_draws_title_and_tag_prefixes() {
        let mut rows = lettered(2);
        rows[1].validity = Validity::Invalid;
        let mut menu = test_menu(&mut rows, 5);
        menu.title = Some("Menu");
        assert!(menu.layout(Region::new(0, 0, 20, 5), Size::new(20, 5)));

        let mut surface = HeadlessSurface::new(20, 5);
        menu.refresh(&mut surface);

        assert_eq!(surface.line(0), "Menu                ");
        assert_eq!(surface.line(2), "    a) item a       ");
        assert_eq!(surface.line(3), "    b) item b       ");
        assert_eq!(surface.style_at(2, 4).fg, Some(Color::LightBlue));
        assert_eq!(surface.style_at(3, 4).fg, Some(Color::Gray));
        assert_eq!(surface.caret(), Some((2, 4)));
    }

    #[test]
    fn test_refresh_draws_prompt_below_list() {
        let mut rows = lettered(2);
        let mut menu = test_menu(&mut rows, 4);
        menu.prompt = Some("Pick one");
        menu.flags = MenuFlags::NO_TAGS;
        assert!(menu.layout(Region::new(0, 0, 20, 4), Size::new(20, 4)));

        let mut surface = HeadlessSurface::new(20, 4);
        menu.refresh(&mut surface);
        assert_eq!(surface.line(0), "item a              ");
        assert_eq!(surface.line(3), "Pick one            ");
    }

    #[test]
    fn test_refresh_leaves_hidden_rows_blank() {
        let mut rows = test_rows(&[('a', Validity::Valid), ('b', Validity::Hidden), ('c', Validity::Valid)]);
        let mut menu = test_menu(&mut rows, 3);
        let mut surface = HeadlessSurface::new(20, 3);
        menu.refresh(&mut surface);
        assert_eq!(surface.line(0), "a) item a           ");
        assert_eq!(surface.line(1), " ".repeat(20));
        assert_eq!(surface.line(2), "c) item c           ");
    }

    #[test]
    fn test_view_tags_follow_scroll() {
        let mut rows = lettered(10);
        let mut menu = test_menu(&mut rows, 3);
        menu.selections = Some(LOWER_CASE);
        menu.flags = MenuFlags::VIEW_TAGS;
        menu.set_cursor(5);

        let mut surface = HeadlessSurface::new(20, 3);
        menu.refresh(&mut surface);
        assert_eq!(menu.top(), 4);
        assert_eq!(surface.line(0), "a) item e           ");
        assert_eq!(surface.line(1), "b) item f           ");
        assert_eq!(menu.cursor_for_tag('b'), Some(5));
        assert_eq!(menu.cursor_for_tag('z'), None);
    }

    #[test]
    fn test_browse_hook_sees_row_under_cursor() {
        let mut seen = Vec::new();
        let mut rows = lettered(3);
        let filter = [2, 1];
        let mut menu = test_menu(&mut rows, 3);
        menu.set_filter(&filter);
        menu.browse_hook = Some(Box::new(|oid: usize, rows: &[TestRow], region: &Region, _surface: &mut dyn Surface| {
            seen.push((oid, rows[oid].tag, region.width));
        }));

        let mut surface = HeadlessSurface::new(20, 3);
        menu.refresh(&mut surface);
        menu.set_cursor(1);
        menu.refresh(&mut surface);
        drop(menu);

        assert_eq!(seen, vec![(2, 'c', 20), (1, 'b', 20)]);
    }
}
