//! Terminal input surface backed by crossterm.
//!
//! Translates crossterm key events into [`KeyboardEvent`]s with the key codes
//! of the key table, so chords registered on a [`TerminalSurface`] behave the
//! same as on any other target.

use crate::event::{EventType, KeyboardEvent};
use crate::keys::KeyCode as LegacyCode;
use crate::target::{EventTarget, Listener, StandardRegistration};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::cell::RefCell;

/// Key code for a crossterm key, if the key table has one.
pub fn legacy_key_code(code: KeyCode, keypad: bool) -> Option<LegacyCode> {
    let legacy = match code {
        KeyCode::Backspace => 8,
        KeyCode::Tab | KeyCode::BackTab => 9,
        KeyCode::Enter => 13,
        KeyCode::Pause => 19,
        KeyCode::CapsLock => 20,
        KeyCode::Esc => 27,
        KeyCode::PageUp => 33,
        KeyCode::PageDown => 34,
        KeyCode::End => 35,
        KeyCode::Home => 36,
        KeyCode::Left => 37,
        KeyCode::Up => 38,
        KeyCode::Right => 39,
        KeyCode::Down => 40,
        KeyCode::Insert => 45,
        KeyCode::Delete => 46,
        KeyCode::NumLock => 144,
        KeyCode::ScrollLock => 145,
        KeyCode::F(n @ 1..=12) => 111 + LegacyCode::from(n),
        KeyCode::Char(c) if keypad => match c {
            '0'..='9' => 96 + (c as LegacyCode - '0' as LegacyCode),
            '*' => 106,
            '+' => 107,
            '-' => 109,
            '/' => 111,
            _ => return None,
        },
        KeyCode::Char(c) => match c {
            ' ' => 32,
            '0'..='9' => c as LegacyCode,
            'a'..='z' => c.to_ascii_uppercase() as LegacyCode,
            'A'..='Z' => c as LegacyCode,
            ';' => 186,
            '=' | '+' => 187,
            ',' => 188,
            '-' => 189,
            '.' => 190,
            '/' => 191,
            '`' => 192,
            '[' => 219,
            ']' => 221,
            '\'' => 222,
            _ => return None,
        },
        _ => return None,
    };
    Some(legacy)
}

impl KeyboardEvent {
    /// Convert a crossterm key event.
    ///
    /// Press and repeat become keydown, release becomes keyup. Returns `None`
    /// for keys without a key code.
    pub fn from_crossterm(event: &KeyEvent) -> Option<(EventType, KeyboardEvent)> {
        let keypad = event.state.contains(KeyEventState::KEYPAD);
        let key_code = legacy_key_code(event.code, keypad)?;

        let event_type = match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => EventType::KeyDown,
            KeyEventKind::Release => EventType::KeyUp,
        };

        let mods = event.modifiers;
        let mut keyboard = KeyboardEvent::new(key_code);
        keyboard.which = key_code;
        keyboard.ctrl_key = mods.contains(KeyModifiers::CONTROL);
        keyboard.alt_key = mods.contains(KeyModifiers::ALT);
        keyboard.shift_key = mods.contains(KeyModifiers::SHIFT) || event.code == KeyCode::BackTab;
        keyboard.meta_key = mods.intersects(KeyModifiers::SUPER | KeyModifiers::META);

        Some((event_type, keyboard))
    }
}

/// Terminal input surface that listeners can be attached to.
///
/// The host loop reads crossterm events and feeds them to
/// [`dispatch`](Self::dispatch).
#[derive(Debug, Default)]
pub struct TerminalSurface {
    listeners: RefCell<Vec<(EventType, Listener)>>,
}

impl TerminalSurface {
    /// Create a surface with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Deliver a crossterm event to the attached listeners.
    ///
    /// Returns the delivered keyboard event so the host can check whether a
    /// listener suppressed it, or `None` if the event was not a mapped key.
    pub fn dispatch(&self, event: &Event) -> Option<KeyboardEvent> {
        let Event::Key(key) = event else {
            return None;
        };
        let (event_type, keyboard) = KeyboardEvent::from_crossterm(key)?;

        // Listeners may attach or detach while running.
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(t, _)| *t == event_type)
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in snapshot {
            listener.call(&keyboard);
        }

        Some(keyboard)
    }
}

impl StandardRegistration for TerminalSurface {
    fn add_event_listener(&self, event_type: EventType, listener: &Listener) {
        self.listeners
            .borrow_mut()
            .push((event_type, listener.clone()));
    }

    fn remove_event_listener(&self, event_type: EventType, listener: &Listener) {
        let mut listeners = self.listeners.borrow_mut();
        if let Some(pos) = listeners
            .iter()
            .position(|(t, l)| *t == event_type && l == listener)
        {
            listeners.remove(pos);
        }
    }
}

impl EventTarget for TerminalSurface {
    fn standard(&self) -> Option<&dyn StandardRegistration> {
        Some(self)
    }

    fn describe(&self) -> String {
        "terminal surface".to_string()
    }
}
