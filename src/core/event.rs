//! # Events
//!
//! Raw input coming from a [`Surface`](crate::core::surface::Surface) and the
//! outward events a running menu hands back to its caller.
//!
//! ```text
//! InputEvent ──▶ Menu::run() ──▶ MenuEvent
//!  Key / Mouse / Resize          Select / Move / Escape / Pass
//! ```

use bitflags::bitflags;

/// A key press, already stripped of terminal-specific encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Tab,
    Backspace,
    Home,
    End,
    PageUp,
    PageDown,
}

impl Key {
    pub fn is_enter(self) -> bool {
        matches!(self, Key::Enter | Key::Char('\n') | Key::Char('\r'))
    }

    /// Direction encoded by this key, if any.
    ///
    /// Keypad digits follow the usual roguelike layout; `5` and non-direction
    /// keys yield `None`.
    pub fn direction(self) -> Option<Direction> {
        let (dx, dy) = match self {
            Key::Up => (0, -1),
            Key::Down => (0, 1),
            Key::Left => (-1, 0),
            Key::Right => (1, 0),
            Key::Char('1') => (-1, 1),
            Key::Char('2') => (0, 1),
            Key::Char('3') => (1, 1),
            Key::Char('4') => (-1, 0),
            Key::Char('6') => (1, 0),
            Key::Char('7') => (-1, -1),
            Key::Char('8') => (0, -1),
            Key::Char('9') => (1, -1),
            _ => return None,
        };
        Some(Direction { dx, dy })
    }
}

/// Unit step on the keypad grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    pub fn is_diagonal(self) -> bool {
        self.dx != 0 && self.dy != 0
    }
}

/// One raw event read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    Mouse { row: u16, col: u16 },
    Resize,
}

impl InputEvent {
    pub fn kind(&self) -> EventMask {
        match self {
            InputEvent::Key(_) => EventMask::KEYBOARD,
            InputEvent::Mouse { .. } => EventMask::MOUSE,
            InputEvent::Resize => EventMask::RESIZE,
        }
    }
}

/// What a menu run yields to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The row at this visible index was chosen.
    Select { cursor: usize },
    /// The cursor moved to this visible index.
    Move { cursor: usize },
    /// The user backed out.
    Escape,
    /// A raw event the menu did not handle, returned on request.
    Pass(InputEvent),
}

impl MenuEvent {
    pub fn kind(&self) -> EventMask {
        match self {
            MenuEvent::Select { .. } => EventMask::SELECT,
            MenuEvent::Move { .. } => EventMask::MOVE,
            MenuEvent::Escape => EventMask::ESCAPE,
            MenuEvent::Pass(input) => input.kind(),
        }
    }
}

bitflags! {
    /// Event kinds a caller wants `Menu::run` to stop on.
    ///
    /// `SELECT` and `ESCAPE` are always included.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EventMask: u8 {
        const SELECT = 0b0000_0001;
        const MOVE = 0b0000_0010;
        const ESCAPE = 0b0000_0100;
        const KEYBOARD = 0b0000_1000;
        const MOUSE = 0b0001_0000;
        const RESIZE = 0b0010_0000;
    }
}

/// Events offered to a row's handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEvent {
    Select,
    Command(char),
}
