//! Map crossterm key and mouse events to console input.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use termfolio_types::input::Key;

/// What a mouse event asks the console to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    WheelUp,
    WheelDown,
    /// Left click on a screen row.
    Click { row: u16 },
}

/// Translate a terminal key event. Only presses count; unbound keys map to
/// `None`.
pub fn map_key(event: &KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    let control = event.modifiers.contains(KeyModifiers::CONTROL);
    match event.code {
        KeyCode::Char('c') if control => Some(Key::Quit),
        KeyCode::Char(_) if control => None,
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Up => Some(Key::RecallPrevious),
        KeyCode::Down => Some(Key::RecallNext),
        KeyCode::Tab | KeyCode::Right => Some(Key::Complete),
        KeyCode::PageUp => Some(Key::ScrollUp),
        KeyCode::PageDown => Some(Key::ScrollDown),
        KeyCode::Esc => Some(Key::Quit),
        _ => None,
    }
}

/// Translate a mouse event. Drags, moves and releases map to `None`.
pub fn map_mouse(event: &MouseEvent) -> Option<MouseAction> {
    match event.kind {
        MouseEventKind::ScrollUp => Some(MouseAction::WheelUp),
        MouseEventKind::ScrollDown => Some(MouseAction::WheelDown),
        MouseEventKind::Down(MouseButton::Left) => Some(MouseAction::Click { row: event.row }),
        _ => None,
    }
}
