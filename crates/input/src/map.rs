//! Key mapping from terminal events to shell events.

use crate::types::ShellEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a terminal event to the shell event it triggers, if any.
pub fn map_event(event: &Event) -> Option<ShellEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release && should_quit(*key) => {
            Some(ShellEvent::Quit)
        }
        Event::Resize(w, h) => Some(ShellEvent::Resize(*w, *h)),
        _ => None,
    }
}

/// Check if key should quit. Ctrl+C is the only binding.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
