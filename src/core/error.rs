//! # Errors
//!
//! Menus only fail on broken preconditions or when the terminal itself
//! fails. Everything else (bad cursors, stray clicks, unknown keys) is
//! absorbed inside the event loop.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    /// Reading input or flushing output failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
    /// `Menu::run` was called before a successful `Menu::layout`.
    #[error("menu has no usable geometry (width {width}, page rows {page_rows})")]
    NotLaidOut { width: i32, page_rows: i32 },
    #[error("unknown menu skin: {0}")]
    UnknownSkin(String),
    #[error("unknown row kind: {0}")]
    UnknownRowKind(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
