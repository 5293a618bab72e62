//! Keyboard input simulation for testing.

use chord_shortcuts::{ChordMatcher, Element, EventType, KeyCode, KeyboardEvent, Node, ShortcutResult};

/// Builder for a single synthetic keyboard event.
#[derive(Debug, Clone, Default)]
pub struct KeyInput {
    event: KeyboardEvent,
}

impl KeyInput {
    /// Event for a key code with no modifiers.
    pub fn key(code: KeyCode) -> Self {
        Self {
            event: KeyboardEvent::new(code),
        }
    }

    /// Event that carries exactly the given chord.
    pub fn chord(chord: &str) -> ShortcutResult<Self> {
        let matcher = ChordMatcher::parse(chord)?;
        let mods = matcher.modifiers();
        let mut input = Self::key(matcher.key_code());
        input.event.ctrl_key = mods.ctrl;
        input.event.alt_key = mods.alt;
        input.event.shift_key = mods.shift;
        input.event.meta_key = mods.meta;
        Ok(input)
    }

    /// Report the code through `which` only, leaving `key_code` zero.
    pub fn via_which(mut self) -> Self {
        self.event.which = self.event.key_code;
        self.event.key_code = 0;
        self
    }

    /// Hold Ctrl.
    pub fn ctrl(mut self) -> Self {
        self.event.ctrl_key = true;
        self
    }

    /// Hold Alt.
    pub fn alt(mut self) -> Self {
        self.event.alt_key = true;
        self
    }

    /// Hold Shift.
    pub fn shift(mut self) -> Self {
        self.event.shift_key = true;
        self
    }

    /// Hold Meta.
    pub fn meta(mut self) -> Self {
        self.event.meta_key = true;
        self
    }

    /// Originate from an element with the given tag.
    pub fn on_element(mut self, tag: &str) -> Self {
        self.event.target = Some(Node::Element(Element::new(tag)));
        self
    }

    /// Originate from a text node inside an element with the given tag.
    pub fn on_text_in(mut self, tag: &str) -> Self {
        self.event.target = Some(Node::Text {
            parent: Some(Element::new(tag)),
        });
        self
    }

    /// Finish the event.
    pub fn build(self) -> KeyboardEvent {
        self.event
    }
}

/// A recorded sequence of typed events.
#[derive(Debug, Clone, Default)]
pub struct InputSequence {
    events: Vec<(EventType, KeyboardEvent)>,
}

impl InputSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a keydown event.
    pub fn down(&mut self, input: KeyInput) -> &mut Self {
        self.events.push((EventType::KeyDown, input.build()));
        self
    }

    /// Add a keyup event.
    pub fn up(&mut self, input: KeyInput) -> &mut Self {
        self.events.push((EventType::KeyUp, input.build()));
        self
    }

    /// Add a keydown then keyup for the same input.
    pub fn press(&mut self, input: KeyInput) -> &mut Self {
        self.down(input.clone());
        self.up(input)
    }

    /// All events in order.
    pub fn events(&self) -> &[(EventType, KeyboardEvent)] {
        &self.events
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_input() {
        let event = KeyInput::key(65).ctrl().shift().build();
        assert_eq!(event.code(), 65);
        assert!(event.ctrl_key && event.shift_key);
        assert!(!event.alt_key && !event.meta_key);
    }

    #[test]
    fn test_meta_matches_meta_chord() {
        let expected = KeyInput::chord("Meta+S").unwrap().build();
        let built = KeyInput::key(83).meta().build();
        assert!(built.meta_key);
        assert_eq!(
            (built.code(), built.meta_key, built.ctrl_key),
            (expected.code(), expected.meta_key, expected.ctrl_key)
        );
    }

    #[test]
    fn test_chord_input() {
        let event = KeyInput::chord("Ctrl+Alt+Delete").unwrap().build();
        assert_eq!(event.code(), 46);
        assert!(event.ctrl_key && event.alt_key);

        assert!(KeyInput::chord("Ctrl+Hyper").is_err());
    }

    #[test]
    fn test_via_which() {
        let event = KeyInput::key(13).via_which().build();
        assert_eq!(event.key_code, 0);
        assert_eq!(event.code(), 13);
    }

    #[test]
    fn test_targets() {
        let event = KeyInput::key(65).on_text_in("textarea").build();
        let element = event.target.as_ref().and_then(|n| n.element()).unwrap();
        assert!(element.is_text_entry());
    }

    #[test]
    fn test_sequence() {
        let mut seq = InputSequence::new();
        seq.press(KeyInput::key(65)).down(KeyInput::key(66));

        assert_eq!(seq.len(), 3);
        assert_eq!(seq.events()[1].0, EventType::KeyUp);
    }
}
