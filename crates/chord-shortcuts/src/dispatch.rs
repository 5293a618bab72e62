//! Per-binding chord matching and dispatch.

use crate::chord::ChordMatcher;
use crate::config::ShortcutConfig;
use crate::event::KeyboardEvent;
use crate::schedule::Scheduler;
use crate::target::Listener;
use std::rc::Rc;

/// Shortcut callback. Receives a copy of the triggering event.
pub type Callback = Rc<dyn Fn(&KeyboardEvent)>;

/// Build the low-level listener for one binding.
pub(crate) fn chord_listener(
    chord: ChordMatcher,
    config: ShortcutConfig,
    scheduler: Rc<dyn Scheduler>,
    callback: Callback,
) -> Listener {
    Listener::new(move |event| {
        if config.input_disabled && from_text_entry(event) {
            tracing::trace!("Ignoring {} from text entry element", chord);
            return;
        }

        let matched = if config.legacy_modifier_swap {
            chord.matches_swapped(event)
        } else {
            chord.matches(event)
        };
        if !matched {
            return;
        }

        tracing::trace!("Matched {} on key code {}", chord, event.code());

        if !config.propagate {
            event.prevent_default();
            event.stop_propagation();
        }

        // The copy must carry the suppression flags.
        let callback = Rc::clone(&callback);
        let deferred = event.clone();
        scheduler.defer(Box::new(move || callback(&deferred)));
    })
}

fn from_text_entry(event: &KeyboardEvent) -> bool {
    event
        .target
        .as_ref()
        .and_then(|node| node.element())
        .is_some_and(|element| element.is_text_entry())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Element, Node};
    use crate::schedule::TaskQueue;
    use std::cell::Cell;

    fn setup(chord: &str, config: ShortcutConfig) -> (Listener, TaskQueue, Rc<Cell<u32>>) {
        let queue = TaskQueue::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let listener = chord_listener(
            ChordMatcher::parse(chord).unwrap(),
            config,
            Rc::new(queue.clone()),
            Rc::new(move |_: &KeyboardEvent| counter.set(counter.get() + 1)),
        );
        (listener, queue, hits)
    }

    fn ctrl_a() -> KeyboardEvent {
        let mut event = KeyboardEvent::new(65);
        event.ctrl_key = true;
        event
    }

    #[test]
    fn test_match_is_deferred_and_suppressed() {
        let (listener, queue, hits) = setup("Ctrl+A", ShortcutConfig::default());

        let event = ctrl_a();
        listener.call(&event);

        assert_eq!(hits.get(), 0);
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());

        assert_eq!(queue.run_pending(), 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_mismatch_is_silent() {
        let (listener, queue, _) = setup("Ctrl+A", ShortcutConfig::default());

        let event = KeyboardEvent::new(65);
        listener.call(&event);

        assert!(queue.is_empty());
        assert!(!event.default_prevented());
        assert!(!event.propagation_stopped());
    }

    #[test]
    fn test_propagate_leaves_event_alone() {
        let config = ShortcutConfig {
            propagate: true,
            ..ShortcutConfig::default()
        };
        let (listener, queue, _) = setup("Ctrl+A", config);

        let event = ctrl_a();
        listener.call(&event);

        assert_eq!(queue.len(), 1);
        assert!(!event.default_prevented());
        assert!(!event.propagation_stopped());
    }

    #[test]
    fn test_input_disabled() {
        let config = ShortcutConfig {
            input_disabled: true,
            ..ShortcutConfig::default()
        };
        let (listener, queue, _) = setup("A", config);

        let mut in_input = KeyboardEvent::new(65);
        in_input.target = Some(Node::Element(Element::new("input")));
        listener.call(&in_input);

        let mut in_textarea_text = KeyboardEvent::new(65);
        in_textarea_text.target = Some(Node::Text {
            parent: Some(Element::new("TEXTAREA")),
        });
        listener.call(&in_textarea_text);

        assert!(queue.is_empty());
        assert!(!in_input.default_prevented());
        assert!(!in_textarea_text.propagation_stopped());

        let mut in_div = KeyboardEvent::new(65);
        in_div.target = Some(Node::Element(Element::new("div")));
        listener.call(&in_div);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_text_entry_matches_when_enabled() {
        let (listener, queue, _) = setup("A", ShortcutConfig::default());

        let mut in_input = KeyboardEvent::new(65);
        in_input.target = Some(Node::Element(Element::new("INPUT")));
        listener.call(&in_input);

        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_legacy_modifier_swap() {
        let config = ShortcutConfig {
            legacy_modifier_swap: true,
            ..ShortcutConfig::default()
        };
        let (listener, queue, _) = setup("Shift+A", config);

        let mut alt_held = KeyboardEvent::new(65);
        alt_held.alt_key = true;
        listener.call(&alt_held);
        assert_eq!(queue.len(), 1);

        let mut shift_held = KeyboardEvent::new(65);
        shift_held.shift_key = true;
        listener.call(&shift_held);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_callback_sees_event_copy() {
        let queue = TaskQueue::new();
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let listener = chord_listener(
            ChordMatcher::parse("Enter").unwrap(),
            ShortcutConfig::default(),
            Rc::new(queue.clone()),
            Rc::new(move |event: &KeyboardEvent| sink.set(event.code())),
        );

        listener.call(&KeyboardEvent::new(13));
        queue.run_pending();
        assert_eq!(seen.get(), 13);
    }

    #[test]
    fn test_callback_sees_suppression() {
        let queue = TaskQueue::new();
        let flags = Rc::new(Cell::new((false, false)));
        let sink = Rc::clone(&flags);
        let listener = chord_listener(
            ChordMatcher::parse("Ctrl+A").unwrap(),
            ShortcutConfig::default(),
            Rc::new(queue.clone()),
            Rc::new(move |event: &KeyboardEvent| {
                sink.set((event.default_prevented(), event.propagation_stopped()))
            }),
        );

        listener.call(&ctrl_a());
        queue.run_pending();
        assert_eq!(flags.get(), (true, true));
    }
}
