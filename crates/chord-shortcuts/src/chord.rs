//! Chord notation parser and matcher.

use crate::error::{ShortcutError, ShortcutResult};
use crate::event::KeyboardEvent;
use crate::keys::{key_label, parse_key, KeyCode};
use crate::modifiers::{parse_modifiers, ModifierState};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parsed, comparable form of a chord such as `"Ctrl+Alt+Delete"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChordMatcher {
    modifiers: ModifierState,
    key_code: KeyCode,
}

impl ChordMatcher {
    /// Create a matcher from its parts.
    pub fn new(modifiers: ModifierState, key_code: KeyCode) -> Self {
        Self {
            modifiers,
            key_code,
        }
    }

    /// Parse chord notation.
    ///
    /// Supported format: `(Modifier "+")* Key`, case-insensitive, where the
    /// modifiers are `Ctrl`, `Alt`, `Shift` and `Meta` and the key is any
    /// label of the key table. A literal plus key is spelled `Plus`.
    ///
    /// ```
    /// use chord_shortcuts::ChordMatcher;
    ///
    /// let chord = ChordMatcher::parse("Ctrl+Shift+Z").unwrap();
    /// assert_eq!(chord.key_code(), 90);
    /// assert!(chord.modifiers().ctrl && chord.modifiers().shift);
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`ShortcutError::UnrecognizedModifier`] or
    /// [`ShortcutError::UnrecognizedKey`]; no partial matcher is produced.
    pub fn parse(chord: &str) -> ShortcutResult<Self> {
        let parts: Vec<&str> = chord.split('+').collect();
        let (key, mods) = match parts.split_last() {
            Some(split) => split,
            None => return Err(ShortcutError::UnrecognizedKey(chord.to_string())),
        };

        let modifiers = parse_modifiers(mods.iter().copied())?;
        let key_code = parse_key(key)?;

        Ok(Self {
            modifiers,
            key_code,
        })
    }

    /// Expected modifier state.
    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    /// Expected key code.
    pub fn key_code(&self) -> KeyCode {
        self.key_code
    }

    /// Check if an event carries exactly this chord.
    ///
    /// Every modifier must match: a chord without Alt does not match an event
    /// where Alt is held.
    pub fn matches(&self, event: &KeyboardEvent) -> bool {
        event.code() == self.key_code && ModifierState::from_event(event) == self.modifiers
    }

    /// Like [`matches`](Self::matches), but compares the chord's Alt against
    /// the event's Shift flag and vice versa.
    ///
    /// Reproduces the comparison of older releases for hosts that depend on it.
    pub fn matches_swapped(&self, event: &KeyboardEvent) -> bool {
        event.code() == self.key_code
            && self.modifiers.ctrl == event.ctrl_key
            && self.modifiers.alt == event.shift_key
            && self.modifiers.shift == event.alt_key
            && self.modifiers.meta == event.meta_key
    }
}

impl FromStr for ChordMatcher {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ChordMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.modifiers.is_empty() {
            write!(f, "{}+", self.modifiers)?;
        }

        match key_label(self.key_code) {
            Some(label) => f.write_str(label),
            None => write!(f, "#{}", self.key_code),
        }
    }
}
