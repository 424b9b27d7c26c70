//! # Layout Strategies
//!
//! A [`LayoutStrategy`] (a "skin") decides where visible rows go on screen,
//! which row a mouse click lands on, and which tag a screen position carries
//! when tags follow the view rather than the data.
//!
//! Layouts never look at row contents. They see the list through a
//! [`RowPainter`], which knows how many rows are visible and how to draw
//! one of them into a slot.

mod columns;
mod scroll;

pub use columns::{Columns, DEFAULT_COLUMN_WIDTH};
pub use scroll::Scrolling;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::error::MenuError;
use crate::core::region::{Region, RowSlot};
use crate::core::surface::Surface;

/// The menu side of a redraw: visible row count plus a way to draw one.
pub trait RowPainter {
    /// Number of visible rows.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Draw the visible row `pos` (tag prefix included) into `slot`.
    ///
    /// `top` is the scroll position the layout settled on for this redraw.
    fn paint(&self, surface: &mut dyn Surface, pos: usize, top: usize, is_cursor: bool, slot: RowSlot);
}

pub trait LayoutStrategy {
    /// Visible index under a screen cell, clamped to the last row.
    /// `None` only when there are no rows.
    fn hit_test(&self, row: i32, col: i32, count: usize, top: usize, region: &Region) -> Option<usize>;

    /// Repaint the whole window, blanking cells no longer in use.
    fn redraw(
        &self,
        rows: &dyn RowPainter,
        surface: &mut dyn Surface,
        cursor: Option<usize>,
        top: &mut usize,
        region: &Region,
    );

    /// Tag for a visible position when tags follow the view.
    fn tag_at(&self, pos: usize, top: usize, selections: Option<&str>) -> Option<char>;
}

/// Identifiers for the built-in layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinId {
    #[default]
    Scroll,
    Columns,
}

impl SkinId {
    pub fn strategy(self) -> Box<dyn LayoutStrategy> {
        match self {
            SkinId::Scroll => Box::new(Scrolling),
            SkinId::Columns => Box::new(Columns::default()),
        }
    }
}

impl fmt::Display for SkinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SkinId::Scroll => "scroll",
            SkinId::Columns => "columns",
        })
    }
}

impl FromStr for SkinId {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scroll" => Ok(SkinId::Scroll),
            "columns" => Ok(SkinId::Columns),
            other => Err(MenuError::UnknownSkin(other.to_string())),
        }
    }
}

/// Clamp a possibly out-of-range index into `0..count`.
fn clamp_index(index: i64, count: usize) -> Option<usize> {
    let last = count.checked_sub(1)?;
    Some(index.clamp(0, last as i64) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skin_id_parse() {
        assert_eq!("columns".parse::<SkinId>().unwrap(), SkinId::Columns);
        assert_eq!(SkinId::Scroll.to_string(), "scroll");
        assert!(matches!(
            "grid".parse::<SkinId>(),
            Err(MenuError::UnknownSkin(name)) if name == "grid"
        ));
    }

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(7, 0), None);
        assert_eq!(clamp_index(-2, 4), Some(0));
        assert_eq!(clamp_index(9, 4), Some(3));
        assert_eq!(clamp_index(2, 4), Some(2));
    }
}
