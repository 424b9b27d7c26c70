//! # TUI Adapter
//!
//! The crossterm/ratatui side of menukit. Provides the two [`Surface`]
//! implementations and the demo menus run by the binary.
//!
//! This is the only module that knows about ratatui terminals and
//! crossterm events; the engine in [`crate::core`] only sees the
//! [`Surface`] trait.
//!
//! ## Surfaces
//!
//! - [`TerminalSurface`]: raw mode on the alternate screen with mouse
//!   capture. Draws into a back buffer flushed before each blocking read.
//! - [`HeadlessSurface`]: in-memory buffer plus scripted input, for tests.
//!
//! [`Surface`]: crate::core::surface::Surface

pub mod demo;
mod event;
mod headless;
mod terminal;

use log::info;

use crate::core::config::ResolvedConfig;
use crate::core::error::MenuError;
use crate::core::event::MenuEvent;
use crate::core::rows::RowKind;

pub use event::translate;
pub use headless::HeadlessSurface;
pub use terminal::TerminalSurface;

/// Run the demo for `kind` on the real terminal. The terminal is restored
/// before this returns, error or not.
pub fn run(config: &ResolvedConfig, kind: RowKind) -> Result<MenuEvent, MenuError> {
    let mut surface = TerminalSurface::new()?;
    let result = demo::run_demo(&mut surface, config, kind);
    drop(surface);
    info!("Demo finished: {:?}", result);
    result
}
