//! Property-based testing generators.
//!
//! This module provides proptest strategies for chord notation and for
//! events that satisfy a chord.

use chord_shortcuts::{key_labels, ChordMatcher, KeyboardEvent};
use proptest::prelude::*;
use proptest::sample::{select, subsequence};
use proptest::strategy::BoxedStrategy;

const MODIFIER_NAMES: &[&str] = &["Ctrl", "Alt", "Shift", "Meta"];

/// Generate valid chord strings such as `"Ctrl+Shift+F5"`.
pub fn chord() -> impl Strategy<Value = String> {
    ChordGen::new().build()
}

/// Generate a valid chord together with an event that satisfies it.
pub fn matching_event() -> impl Strategy<Value = (String, KeyboardEvent)> {
    chord().prop_filter_map("chord must parse", |chord| {
        let matcher = ChordMatcher::parse(&chord).ok()?;
        Some((chord, event_for(&matcher)))
    })
}

/// Build the event a matcher expects.
pub fn event_for(matcher: &ChordMatcher) -> KeyboardEvent {
    let mods = matcher.modifiers();
    let mut event = KeyboardEvent::new(matcher.key_code());
    event.ctrl_key = mods.ctrl;
    event.alt_key = mods.alt;
    event.shift_key = mods.shift;
    event.meta_key = mods.meta;
    event
}

/// Configurable chord string generator.
#[derive(Debug, Clone)]
pub struct ChordGen {
    max_modifiers: usize,
    mixed_case: bool,
}

impl ChordGen {
    /// Create a generator allowing every modifier combination.
    pub fn new() -> Self {
        Self {
            max_modifiers: MODIFIER_NAMES.len(),
            mixed_case: false,
        }
    }

    /// Limit how many modifiers a chord carries.
    pub fn max_modifiers(mut self, max: usize) -> Self {
        self.max_modifiers = max.min(MODIFIER_NAMES.len());
        self
    }

    /// Randomize the letter case of every token.
    pub fn mixed_case(mut self) -> Self {
        self.mixed_case = true;
        self
    }

    /// Build the strategy.
    pub fn build(self) -> BoxedStrategy<String> {
        let keys: Vec<&'static str> = key_labels().collect();
        let mods = subsequence(MODIFIER_NAMES.to_vec(), 0..=self.max_modifiers);
        let base = (mods, select(keys)).prop_map(|(mods, key)| {
            let mut tokens: Vec<&str> = mods;
            tokens.push(key);
            tokens.join("+")
        });

        if self.mixed_case {
            (base, any::<u64>())
                .prop_map(|(chord, seed)| scramble_case(&chord, seed))
                .boxed()
        } else {
            base.boxed()
        }
    }
}

impl Default for ChordGen {
    fn default() -> Self {
        Self::new()
    }
}

fn scramble_case(chord: &str, seed: u64) -> String {
    chord
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if (seed >> (i % 64)) & 1 == 1 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}
