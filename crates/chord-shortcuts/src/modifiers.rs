//! Modifier state and modifier-name parsing.

use crate::error::{ShortcutError, ShortcutResult};
use crate::event::KeyboardEvent;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// State of the four keyboard modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModifierState {
    /// Ctrl held.
    pub ctrl: bool,
    /// Alt held.
    pub alt: bool,
    /// Shift held.
    pub shift: bool,
    /// Meta held.
    pub meta: bool,
}

impl ModifierState {
    /// No modifiers held.
    pub const NONE: ModifierState = ModifierState {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Read the native modifier flags of an event.
    pub fn from_event(event: &KeyboardEvent) -> Self {
        Self {
            ctrl: event.ctrl_key,
            alt: event.alt_key,
            shift: event.shift_key,
            meta: event.meta_key,
        }
    }

    /// Check if no modifiers are held.
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

impl fmt::Display for ModifierState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.meta {
            parts.push("Meta");
        }

        write!(f, "{}", parts.join("+"))
    }
}

/// Parse modifier names into a modifier state.
///
/// Names are matched case-insensitively against `ctrl`, `alt`, `shift` and
/// `meta`. Repeated names are harmless.
///
/// # Errors
///
/// Returns [`ShortcutError::UnrecognizedModifier`] for any other name.
pub fn parse_modifiers<'a, I>(names: I) -> ShortcutResult<ModifierState>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = ModifierState::NONE;

    for name in names {
        match name.to_lowercase().as_str() {
            "ctrl" => out.ctrl = true,
            "alt" => out.alt = true,
            "shift" => out.shift = true,
            "meta" => out.meta = true,
            _ => return Err(ShortcutError::UnrecognizedModifier(name.to_string())),
        }
    }

    Ok(out)
}

/// Live, read-only view of a manager's modifier state.
///
/// Every clone observes the same record, which the manager updates in place
/// on each keyup and keydown.
#[derive(Debug, Clone, Default)]
pub struct LiveModifiers {
    state: Rc<Cell<ModifierState>>,
}

impl LiveModifiers {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Current modifier state.
    pub fn get(&self) -> ModifierState {
        self.state.get()
    }

    pub(crate) fn update(&self, event: &KeyboardEvent) {
        self.state.set(ModifierState::from_event(event));
    }
}
