//! Keyboard event model.

use crate::error::ShortcutError;
use crate::keys::KeyCode;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

/// Native event type a listener is registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Key pressed.
    #[default]
    KeyDown,
    /// Key released.
    KeyUp,
}

impl EventType {
    /// Standard event name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KeyDown => "keydown",
            Self::KeyUp => "keyup",
        }
    }

    /// Event name used by legacy `attachEvent`-style registration.
    pub fn legacy_name(&self) -> &'static str {
        match self {
            Self::KeyDown => "onkeydown",
            Self::KeyUp => "onkeyup",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keydown" | "onkeydown" => Ok(Self::KeyDown),
            "keyup" | "onkeyup" => Ok(Self::KeyUp),
            _ => Err(ShortcutError::Config(format!(
                "unknown event type \"{}\", expected \"keydown\" or \"keyup\"",
                s
            ))),
        }
    }
}

/// An element that can originate a keyboard event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag_name: String,
}

impl Element {
    /// Create an element with the given tag name.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into().to_uppercase(),
        }
    }

    /// Upper-case tag name, e.g. `INPUT`.
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Whether this is a single- or multi-line text entry element.
    pub fn is_text_entry(&self) -> bool {
        matches!(self.tag_name.as_str(), "INPUT" | "TEXTAREA")
    }
}

/// Node an event was dispatched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element node.
    Element(Element),
    /// A text node, optionally inside an element.
    Text {
        /// Parent element of the text node.
        parent: Option<Element>,
    },
}

impl Node {
    /// The element itself, or the parent element of a text node.
    pub fn element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text { parent } => parent.as_ref(),
        }
    }
}

/// A raw keyboard event as seen by listeners.
///
/// Listeners receive `&KeyboardEvent`; cancellation flags use interior
/// mutability so any listener can suppress the event.
#[derive(Debug, Clone, Default)]
pub struct KeyboardEvent {
    /// Key code of the pressed key; zero when unknown.
    pub key_code: KeyCode,
    /// Fallback key code used when `key_code` is zero.
    pub which: KeyCode,
    /// Ctrl held.
    pub ctrl_key: bool,
    /// Alt held.
    pub alt_key: bool,
    /// Shift held.
    pub shift_key: bool,
    /// Meta held.
    pub meta_key: bool,
    /// Originating node.
    pub target: Option<Node>,
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

impl KeyboardEvent {
    /// Create an event for a key code with no modifiers held.
    pub fn new(key_code: KeyCode) -> Self {
        Self {
            key_code,
            ..Self::default()
        }
    }

    /// Decoded key code: `key_code`, or `which` when it is zero.
    pub fn code(&self) -> KeyCode {
        if self.key_code != 0 {
            self.key_code
        } else {
            self.which
        }
    }

    /// Suppress the host's default action.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    /// Stop the event from bubbling further.
    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    /// Whether a listener suppressed the default action.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    /// Whether a listener stopped propagation.
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_from_str() {
        assert_eq!("keydown".parse::<EventType>().unwrap(), EventType::KeyDown);
        assert_eq!("KeyUp".parse::<EventType>().unwrap(), EventType::KeyUp);
        assert!("keypress".parse::<EventType>().is_err());
    }

    #[test]
    fn test_event_type_names() {
        assert_eq!(EventType::KeyDown.to_string(), "keydown");
        assert_eq!(EventType::KeyUp.legacy_name(), "onkeyup");
        assert_eq!(EventType::default(), EventType::KeyDown);
    }

    #[test]
    fn test_code_falls_back_to_which() {
        let mut event = KeyboardEvent::new(0);
        event.which = 65;
        assert_eq!(event.code(), 65);

        event.key_code = 66;
        assert_eq!(event.code(), 66);
    }

    #[test]
    fn test_text_node_resolves_to_parent() {
        let node = Node::Text {
            parent: Some(Element::new("textarea")),
        };
        assert!(node.element().unwrap().is_text_entry());

        let orphan = Node::Text { parent: None };
        assert!(orphan.element().is_none());

        let div = Node::Element(Element::new("div"));
        assert!(!div.element().unwrap().is_text_entry());
    }

    #[test]
    fn test_tag_name_is_normalized() {
        let element = Element::new("Input");
        assert_eq!(element.tag_name(), "INPUT");
        assert!(element.is_text_entry());
        assert!(Element::new("textArea").is_text_entry());
    }

    #[test]
    fn test_cancellation_flags() {
        let event = KeyboardEvent::new(65);
        assert!(!event.default_prevented());
        event.prevent_default();
        event.stop_propagation();
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
    }
}
