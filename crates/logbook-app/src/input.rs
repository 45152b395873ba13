//! Mapping from crossterm key events to console raw events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use logbook_types::RawEvent;

/// Whether the key press asks to leave the application (Ctrl+C / Ctrl+D).
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
}

/// Map a crossterm key press onto a console event.
///
/// Arrow keys become the escape sequences the console understands;
/// keys without a console meaning map to `None` and are dropped.
pub fn map_key(key: &KeyEvent) -> Option<RawEvent> {
    match key.code {
        KeyCode::Char(c) => Some(RawEvent::Key(c)),
        KeyCode::Enter => Some(RawEvent::Key('\r')),
        KeyCode::Backspace => Some(RawEvent::Key('\u{8}')),
        KeyCode::Delete => Some(RawEvent::Key('\u{7f}')),
        KeyCode::Up => Some(RawEvent::Escape("[A".to_string())),
        KeyCode::Down => Some(RawEvent::Escape("[B".to_string())),
        // Mid-line cursor movement is unsupported; the console ignores
        // these suffixes.
        KeyCode::Left => Some(RawEvent::Escape("[D".to_string())),
        KeyCode::Right => Some(RawEvent::Escape("[C".to_string())),
        KeyCode::Esc => Some(RawEvent::Escape(String::new())),
        _ => None,
    }
}
