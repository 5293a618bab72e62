//! Mock event targets that record listener registration.

use chord_shortcuts::{
    EventTarget, EventType, KeyboardEvent, LegacyRegistration, Listener, StandardRegistration,
};
use std::cell::RefCell;

/// Registration mechanism a [`MockTarget`] exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flavor {
    /// `add/removeEventListener`.
    #[default]
    Standard,
    /// `attach/detachEvent`.
    Legacy,
    /// Neither.
    Bare,
}

/// A recorded registration call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// Listener attached under an event name.
    Attach(String),
    /// Listener detached under an event name.
    Detach(String),
}

/// Event target that records every attach and detach call.
#[derive(Debug, Default)]
pub struct MockTarget {
    name: String,
    flavor: Flavor,
    calls: RefCell<Vec<Call>>,
    listeners: RefCell<Vec<(EventType, Listener)>>,
}

impl MockTarget {
    /// Standard target.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_flavor(name, Flavor::Standard)
    }

    /// Target with a given registration mechanism.
    pub fn with_flavor(name: impl Into<String>, flavor: Flavor) -> Self {
        Self {
            name: name.into(),
            flavor,
            ..Self::default()
        }
    }

    /// Every recorded call in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Number of attach calls.
    pub fn attach_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Attach(_)))
            .count()
    }

    /// Number of detach calls.
    pub fn detach_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Detach(_)))
            .count()
    }

    /// Forget recorded calls. Attached listeners stay attached.
    pub fn reset(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Number of currently attached listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Fire an event at every listener attached for its type, in attach order.
    pub fn dispatch(&self, event_type: EventType, event: &KeyboardEvent) {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(t, _)| *t == event_type)
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in snapshot {
            listener.call(event);
        }
    }

    fn add(&self, name: &str, event_type: EventType, listener: &Listener) {
        self.calls.borrow_mut().push(Call::Attach(name.to_string()));
        self.listeners
            .borrow_mut()
            .push((event_type, listener.clone()));
    }

    fn remove(&self, name: &str, event_type: EventType, listener: &Listener) {
        self.calls.borrow_mut().push(Call::Detach(name.to_string()));
        let mut listeners = self.listeners.borrow_mut();
        if let Some(pos) = listeners
            .iter()
            .position(|(t, l)| *t == event_type && l == listener)
        {
            listeners.remove(pos);
        }
    }
}

impl StandardRegistration for MockTarget {
    fn add_event_listener(&self, event_type: EventType, listener: &Listener) {
        self.add(event_type.as_str(), event_type, listener);
    }

    fn remove_event_listener(&self, event_type: EventType, listener: &Listener) {
        self.remove(event_type.as_str(), event_type, listener);
    }
}

impl LegacyRegistration for MockTarget {
    fn attach_event(&self, name: &str, listener: &Listener) {
        if let Ok(event_type) = name.parse::<EventType>() {
            self.add(name, event_type, listener);
        }
    }

    fn detach_event(&self, name: &str, listener: &Listener) {
        if let Ok(event_type) = name.parse::<EventType>() {
            self.remove(name, event_type, listener);
        }
    }
}

impl EventTarget for MockTarget {
    fn standard(&self) -> Option<&dyn StandardRegistration> {
        match self.flavor {
            Flavor::Standard => Some(self),
            _ => None,
        }
    }

    fn legacy(&self) -> Option<&dyn LegacyRegistration> {
        match self.flavor {
            Flavor::Legacy => Some(self),
            _ => None,
        }
    }

    fn describe(&self) -> String {
        format!("mock target \"{}\"", self.name)
    }
}
