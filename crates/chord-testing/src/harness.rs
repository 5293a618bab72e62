//! Synchronous shortcut test harness.

use crate::document::MockDocument;
use crate::input::InputSequence;
use crate::target::MockTarget;
use chord_shortcuts::{EventType, KeyboardEvent, ShortcutConfig, ShortcutFactory, TaskQueue};
use std::rc::Rc;

/// Bundles a mock document, a task queue and a factory wired to both.
///
/// Events are dispatched synchronously; callbacks only run on
/// [`flush`](Self::flush), mirroring a host that drains its task queue
/// after native dispatch returns.
pub struct ShortcutHarness {
    document: Rc<MockDocument>,
    queue: TaskQueue,
    factory: ShortcutFactory,
}

impl ShortcutHarness {
    /// Create a harness around a document.
    pub fn new(document: MockDocument) -> Self {
        Self::with_defaults(document, ShortcutConfig::default())
    }

    /// Create a harness whose factory starts from the given defaults.
    pub fn with_defaults(document: MockDocument, defaults: ShortcutConfig) -> Self {
        let document = Rc::new(document);
        let queue = TaskQueue::new();
        let factory = ShortcutFactory::new(document.clone(), Rc::new(queue.clone()))
            .with_defaults(defaults);
        Self {
            document,
            queue,
            factory,
        }
    }

    /// The factory under test.
    pub fn factory(&self) -> &ShortcutFactory {
        &self.factory
    }

    /// The mock document.
    pub fn document(&self) -> &MockDocument {
        &self.document
    }

    /// The deferred task queue.
    pub fn queue(&self) -> &TaskQueue {
        &self.queue
    }

    /// Fire a keydown at a target.
    pub fn key_down(&self, target: &MockTarget, event: &KeyboardEvent) {
        target.dispatch(EventType::KeyDown, event);
    }

    /// Fire a keyup at a target.
    pub fn key_up(&self, target: &MockTarget, event: &KeyboardEvent) {
        target.dispatch(EventType::KeyUp, event);
    }

    /// Fire every event of a sequence at a target, in order.
    pub fn send(&self, target: &MockTarget, input: &InputSequence) {
        for (event_type, event) in input.events() {
            target.dispatch(*event_type, event);
        }
    }

    /// Run deferred callbacks queued so far. Returns how many ran.
    pub fn flush(&self) -> usize {
        self.queue.run_pending()
    }
}

impl Default for ShortcutHarness {
    fn default() -> Self {
        Self::new(MockDocument::new())
    }
}
