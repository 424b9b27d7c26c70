//! # Core Menu Engine
//!
//! Everything about menus that is independent of a particular terminal.
//! The engine draws and reads input only through the [`Surface`] trait.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │          Menu           │
//!                    │  cursor, filter, region │
//!                    └──┬──────────┬────────┬──┘
//!                       │          │        │
//!                       ▼          ▼        ▼
//!              ┌────────────┐ ┌─────────┐ ┌──────────┐
//!              │ RowSource  │ │ Layout  │ │ Surface  │
//!              │ what a row │ │ where   │ │ terminal │
//!              │ means      │ │ it goes │ │ (tui/)   │
//!              └────────────┘ └─────────┘ └──────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`]: The `Menu` struct, geometry, filtering and drawing
//! - [`select`]: The event loop behind `Menu::run`
//! - [`rows`]: Row sources (actions, items, plain strings)
//! - [`layout`]: Layout strategies (scrolling list, columns)
//! - [`config`]: Settings file and override hierarchy

pub mod config;
pub mod error;
pub mod event;
pub mod layout;
pub mod menu;
pub mod region;
pub mod rows;
pub mod select;
pub mod surface;

// Re-export commonly used types for convenience
pub use error::{ConfigError, MenuError};
pub use event::{EventMask, InputEvent, Key, MenuEvent, RowEvent};
pub use layout::{LayoutStrategy, SkinId};
pub use menu::{LOWER_CASE, Menu, MenuFlags, UPPER_CASE};
pub use region::{Region, RowSlot};
pub use rows::{RowKind, RowSource, Validity};
pub use surface::Surface;
