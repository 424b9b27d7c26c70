use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

use crate::core::event::{InputEvent, Key};

/// Translate a crossterm event into menu input. Events a menu has no use
/// for (key releases, mouse motion, focus, paste) yield `None`.
pub fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key_event) => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            translate_key(key_event).map(InputEvent::Key)
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Mouse {
                row: mouse_event.row,
                col: mouse_event.column,
            }),
            _ => None,
        },
        Event::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<Key> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    let key = match (key_event.modifiers, key_event.code) {
        // Ctrl+C backs out like Escape
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Key::Escape,
        (_, KeyCode::Char(c)) => Key::Char(c),
        (_, KeyCode::Enter) => Key::Enter,
        (_, KeyCode::Esc) => Key::Escape,
        (_, KeyCode::Up) => Key::Up,
        (_, KeyCode::Down) => Key::Down,
        (_, KeyCode::Left) => Key::Left,
        (_, KeyCode::Right) => Key::Right,
        (_, KeyCode::Tab) => Key::Tab,
        (_, KeyCode::Backspace) => Key::Backspace,
        (_, KeyCode::Home) => Key::Home,
        (_, KeyCode::End) => Key::End,
        (_, KeyCode::PageUp) => Key::PageUp,
        (_, KeyCode::PageDown) => Key::PageDown,
        _ => return None,
    };
    Some(key)
}
