use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    ForceQuit, // Ctrl+C, quits even with an alert open
    Escape,    // dismisses the alert, otherwise quits
    Submit,

    // TUI-local events (handled directly in TUI)
    InputChar(char),
    Paste(String),
    Backspace,
    NextField,
    PrevField,
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(map_event(event::read()?))
    } else {
        Ok(None)
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Release/repeat reports would double every keystroke on some terminals
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            Some(TuiEvent::InputChar(c))
        }
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Tab) | (_, KeyCode::Down) => Some(TuiEvent::NextField),
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => Some(TuiEvent::PrevField),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(TuiEvent::InputChar('c'))
        );
    }

    #[test]
    fn test_modified_letters_are_not_text() {
        assert_eq!(map_event(key(KeyCode::Char('v'), KeyModifiers::CONTROL)), None);
        assert_eq!(map_event(key(KeyCode::Char('x'), KeyModifiers::ALT)), None);
        assert_eq!(
            map_event(key(KeyCode::Char('E'), KeyModifiers::SHIFT)),
            Some(TuiEvent::InputChar('E'))
        );
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_event(key(KeyCode::Tab, KeyModifiers::NONE)), Some(TuiEvent::NextField));
        assert_eq!(map_event(key(KeyCode::Down, KeyModifiers::NONE)), Some(TuiEvent::NextField));
        assert_eq!(map_event(key(KeyCode::BackTab, KeyModifiers::SHIFT)), Some(TuiEvent::PrevField));
        assert_eq!(map_event(key(KeyCode::Up, KeyModifiers::NONE)), Some(TuiEvent::PrevField));
        assert_eq!(map_event(key(KeyCode::Enter, KeyModifiers::NONE)), Some(TuiEvent::Submit));
        assert_eq!(map_event(key(KeyCode::Esc, KeyModifiers::NONE)), Some(TuiEvent::Escape));
    }

    #[test]
    fn test_release_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event(Event::Key(release)), None);
    }

    #[test]
    fn test_paste_and_resize() {
        assert_eq!(map_event(Event::Paste("70,5".into())), Some(TuiEvent::Paste("70,5".into())));
        assert_eq!(map_event(Event::Resize(80, 24)), Some(TuiEvent::Resize));
        assert_eq!(map_event(Event::FocusGained), None);
    }
}
