//! # Row Sources
//!
//! A [`RowSource`] decides what a row *means*: its tag, whether it can be
//! landed on, how it is drawn and what happens when it is chosen. The rows
//! themselves belong to the caller; a menu only borrows them.
//!
//! Built-in sources:
//!
//! | Source | Row type | Tag | Select |
//! |---|---|---|---|
//! | [`ActionRows`] | [`MenuAction`] | action tag | runs the callback, then returned to caller |
//! | [`ItemRows`] | [`MenuItem`] | item selection char | callback + toggle |
//! | [`StringRows`] | anything `AsRef<str>` | none | returned to caller |

mod action;
mod item;
mod strings;

pub use action::{ActionFn, ActionRows, MenuAction};
pub use item::{ItemFlags, ItemRows, MenuItem};
pub use strings::StringRows;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::error::MenuError;
use crate::core::event::RowEvent;
use crate::core::region::RowSlot;
use crate::core::surface::Surface;

/// How a row takes part in navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// Can be landed on and selected.
    Valid,
    /// Drawn dimmed; skipped by cursor movement.
    Invalid,
    /// Never drawn, never landed on.
    Hidden,
}

/// Behavior shared by every row of one kind of list.
pub trait RowSource {
    type Row;

    /// Natural selection character of a row.
    fn tag(&self, _row: &Self::Row) -> Option<char> {
        None
    }

    fn validity(&self, _row: &Self::Row) -> Validity {
        Validity::Valid
    }

    /// Draw one row inside `slot`; must not write past `slot.width`.
    fn render(&self, row: &Self::Row, is_cursor: bool, slot: RowSlot, surface: &mut dyn Surface);

    /// React to a selection or a registered command key.
    ///
    /// Returns `true` if the event was consumed. `cursor` is the visible
    /// index of the row. The surface is handed through so handlers can run
    /// nested menus.
    fn handle(
        &mut self,
        _row: &mut Self::Row,
        _event: RowEvent,
        _cursor: usize,
        _surface: &mut dyn Surface,
    ) -> bool {
        false
    }

    /// Called after the menu recomputed its geometry.
    fn on_resize(&mut self) {}
}

/// Identifiers for the built-in row sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    #[default]
    Actions,
    Items,
    Strings,
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RowKind::Actions => "actions",
            RowKind::Items => "items",
            RowKind::Strings => "strings",
        })
    }
}

impl FromStr for RowKind {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "actions" => Ok(RowKind::Actions),
            "items" => Ok(RowKind::Items),
            "strings" => Ok(RowKind::Strings),
            other => Err(MenuError::UnknownRowKind(other.to_string())),
        }
    }
}
