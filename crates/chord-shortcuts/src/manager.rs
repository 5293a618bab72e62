//! Shortcut manager bound to one target.

use crate::config::ShortcutConfig;
use crate::error::ShortcutResult;
use crate::event::EventType;
use crate::modifiers::{LiveModifiers, ModifierState};
use crate::schedule::Scheduler;
use crate::shortcuts::Shortcuts;
use crate::target::{EventTarget, Listener, Registrar};
use std::fmt;
use std::rc::Rc;

/// Shortcut manager.
///
/// Tracks the live modifier state of its target and hands out [`Shortcuts`]
/// sessions. Call [`close`](Self::close) when the target goes away; sessions
/// created from the manager must be released separately with
/// [`Shortcuts::off_all`].
pub struct ShortcutManager {
    target: Rc<dyn EventTarget>,
    registrar: Registrar,
    config: ShortcutConfig,
    scheduler: Rc<dyn Scheduler>,
    mods: LiveModifiers,
    tracker: Listener,
    // Tracker registrations still on the target, in detach order.
    attached: Vec<EventType>,
}

impl ShortcutManager {
    /// Bind a manager to a target, attaching the keyup and keydown trackers.
    ///
    /// # Errors
    ///
    /// Returns [`ShortcutError::UnsupportedPlatform`](crate::ShortcutError::UnsupportedPlatform)
    /// if the target cannot take listeners.
    pub fn new(
        target: Rc<dyn EventTarget>,
        config: ShortcutConfig,
        scheduler: Rc<dyn Scheduler>,
    ) -> ShortcutResult<Self> {
        let registrar = Registrar::select(target.as_ref())?;
        let mods = LiveModifiers::new();

        let tracked = mods.clone();
        let tracker = Listener::new(move |event| tracked.update(event));

        registrar.attach(target.as_ref(), EventType::KeyUp, &tracker)?;
        if let Err(e) = registrar.attach(target.as_ref(), EventType::KeyDown, &tracker) {
            if let Err(rollback) = registrar.detach(target.as_ref(), EventType::KeyUp, &tracker) {
                tracing::warn!(
                    "Could not detach keyup tracker from {}: {}",
                    target.describe(),
                    rollback
                );
            }
            return Err(e);
        }

        tracing::debug!("Shortcut manager opened on {}", target.describe());

        Ok(Self {
            target,
            registrar,
            config,
            scheduler,
            mods,
            tracker,
            attached: vec![EventType::KeyUp, EventType::KeyDown],
        })
    }

    /// Detach the modifier trackers. Calling it again is a no-op.
    ///
    /// # Errors
    ///
    /// Fails if the target cannot detach listeners. Trackers already detached
    /// stay detached and a later call only detaches the rest.
    pub fn close(&mut self) -> ShortcutResult<()> {
        if self.attached.is_empty() {
            return Ok(());
        }

        while let Some(&event_type) = self.attached.first() {
            self.registrar
                .detach(self.target.as_ref(), event_type, &self.tracker)
                .inspect_err(|e| tracing::warn!("Shortcut manager close stopped early: {}", e))?;
            self.attached.remove(0);
        }

        tracing::debug!("Shortcut manager closed on {}", self.target.describe());
        Ok(())
    }

    /// Check if [`close`](Self::close) has completed.
    pub fn is_closed(&self) -> bool {
        self.attached.is_empty()
    }

    /// Snapshot of the current modifier state.
    pub fn current_mods(&self) -> ModifierState {
        self.mods.get()
    }

    /// Live view of the modifier state that stays current after this call.
    pub fn live_mods(&self) -> LiveModifiers {
        self.mods.clone()
    }

    /// Resolved configuration of this manager.
    pub fn config(&self) -> &ShortcutConfig {
        &self.config
    }

    /// The bound target.
    pub fn target(&self) -> &Rc<dyn EventTarget> {
        &self.target
    }

    /// Start a new chord-builder session with its own teardown chain.
    pub fn shortcuts(&self) -> Shortcuts {
        Shortcuts::new(
            Rc::clone(&self.target),
            self.registrar,
            self.config,
            Rc::clone(&self.scheduler),
        )
    }
}

impl fmt::Debug for ShortcutManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutManager")
            .field("target", &self.target.describe())
            .field("registrar", &self.registrar)
            .field("config", &self.config)
            .field("mods", &self.mods.get())
            .field("closed", &self.is_closed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::ChordMatcher;
    use crate::config::ShortcutOptions;
    use crate::event::KeyboardEvent;
    use crate::schedule::TaskQueue;
    use crate::target::StandardRegistration;
    use crate::ShortcutError;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    #[derive(Default)]
    struct Surface {
        listeners: RefCell<Vec<(EventType, Listener)>>,
        attached: Cell<usize>,
        detached: Cell<usize>,
    }

    impl Surface {
        fn fire(&self, event_type: EventType, event: &KeyboardEvent) {
            let snapshot: Vec<Listener> = self
                .listeners
                .borrow()
                .iter()
                .filter(|(t, _)| *t == event_type)
                .map(|(_, l)| l.clone())
                .collect();
            for listener in snapshot {
                listener.call(event);
            }
        }
    }

    impl StandardRegistration for Surface {
        fn add_event_listener(&self, event_type: EventType, listener: &Listener) {
            self.attached.set(self.attached.get() + 1);
            self.listeners
                .borrow_mut()
                .push((event_type, listener.clone()));
        }

        fn remove_event_listener(&self, event_type: EventType, listener: &Listener) {
            self.detached.set(self.detached.get() + 1);
            self.listeners
                .borrow_mut()
                .retain(|(t, l)| !(*t == event_type && l == listener));
        }
    }

    impl EventTarget for Surface {
        fn standard(&self) -> Option<&dyn StandardRegistration> {
            Some(self)
        }
    }

    struct Inert;

    impl EventTarget for Inert {}

    /// Surface whose capability lookups follow a script; `false` entries
    /// make that lookup come back empty. Unscripted lookups succeed.
    struct Flaky {
        surface: Surface,
        script: RefCell<VecDeque<bool>>,
    }

    impl Flaky {
        fn scripted(script: &[bool]) -> Rc<Self> {
            Rc::new(Self {
                surface: Surface::default(),
                script: RefCell::new(script.iter().copied().collect()),
            })
        }
    }

    impl EventTarget for Flaky {
        fn standard(&self) -> Option<&dyn StandardRegistration> {
            let available = self.script.borrow_mut().pop_front().unwrap_or(true);
            available.then_some(&self.surface as &dyn StandardRegistration)
        }
    }

    fn open(surface: &Rc<Surface>) -> (ShortcutManager, TaskQueue) {
        let queue = TaskQueue::new();
        let target: Rc<dyn EventTarget> = surface.clone();
        let manager =
            ShortcutManager::new(target, ShortcutConfig::default(), Rc::new(queue.clone()))
                .unwrap();
        (manager, queue)
    }

    #[test]
    fn test_open_and_close() {
        let surface = Rc::new(Surface::default());
        let (mut manager, _) = open(&surface);

        assert_eq!(surface.attached.get(), 2);
        assert_eq!(surface.detached.get(), 0);

        manager.close().unwrap();
        assert_eq!(surface.detached.get(), 2);
        assert!(surface.listeners.borrow().is_empty());
        assert!(manager.is_closed());

        manager.close().unwrap();
        assert_eq!(surface.detached.get(), 2);
    }

    #[test]
    fn test_failed_open_detaches_keyup_tracker() {
        // select, keyup attach, failing keydown attach, rollback detach
        let flaky = Flaky::scripted(&[true, true, false, true]);
        let target: Rc<dyn EventTarget> = flaky.clone();

        let result = ShortcutManager::new(target, ShortcutConfig::default(), Rc::new(TaskQueue::new()));

        assert!(matches!(result, Err(ShortcutError::UnsupportedPlatform(_))));
        assert_eq!(flaky.surface.attached.get(), 1);
        assert_eq!(flaky.surface.detached.get(), 1);
        assert!(flaky.surface.listeners.borrow().is_empty());
    }

    #[test]
    fn test_close_resumes_after_failure() {
        // select, two attaches, keyup detach, failing keydown detach
        let flaky = Flaky::scripted(&[true, true, true, true, false]);
        let target: Rc<dyn EventTarget> = flaky.clone();
        let mut manager =
            ShortcutManager::new(target, ShortcutConfig::default(), Rc::new(TaskQueue::new()))
                .unwrap();

        assert!(manager.close().is_err());
        assert!(!manager.is_closed());
        assert_eq!(flaky.surface.detached.get(), 1);
        assert_eq!(flaky.surface.listeners.borrow().len(), 1);
        assert_eq!(flaky.surface.listeners.borrow()[0].0, EventType::KeyDown);

        manager.close().unwrap();
        assert!(manager.is_closed());
        assert_eq!(flaky.surface.detached.get(), 2);
        assert!(flaky.surface.listeners.borrow().is_empty());

        manager.close().unwrap();
        assert_eq!(flaky.surface.detached.get(), 2);
    }

    #[test]
    fn test_keeps_target() {
        let surface = Rc::new(Surface::default());
        let (manager, _) = open(&surface);
        let expected: Rc<dyn EventTarget> = surface.clone();
        assert!(Rc::ptr_eq(manager.target(), &expected));
    }

    #[test]
    fn test_tracks_modifiers() {
        let surface = Rc::new(Surface::default());
        let (manager, _) = open(&surface);
        let live = manager.live_mods();

        let mut event = KeyboardEvent::new(16);
        event.shift_key = true;
        event.meta_key = true;
        surface.fire(EventType::KeyDown, &event);

        assert!(manager.current_mods().shift);
        assert!(live.get().meta);

        surface.fire(EventType::KeyUp, &KeyboardEvent::new(16));
        assert!(live.get().is_empty());
    }

    #[test]
    fn test_unsupported_target() {
        let target: Rc<dyn EventTarget> = Rc::new(Inert);
        let result = ShortcutManager::new(target, ShortcutConfig::default(), Rc::new(TaskQueue::new()));
        assert!(matches!(result, Err(ShortcutError::UnsupportedPlatform(_))));
    }

    #[test]
    fn test_shortcuts_session() {
        let surface = Rc::new(Surface::default());
        let (manager, queue) = open(&surface);
        let hits = Rc::new(Cell::new(0));

        let mut shortcuts = manager.shortcuts();
        let counter = Rc::clone(&hits);
        shortcuts
            .on("Ctrl+A", move |_| counter.set(counter.get() + 1))
            .unwrap();
        assert_eq!(surface.attached.get(), 3);

        let mut event = KeyboardEvent::new(65);
        event.ctrl_key = true;
        surface.fire(EventType::KeyDown, &event);
        assert_eq!(queue.run_pending(), 1);
        assert_eq!(hits.get(), 1);

        shortcuts.off_all().unwrap();
        assert_eq!(surface.detached.get(), 1);
        surface.fire(EventType::KeyDown, &event);
        assert_eq!(queue.run_pending(), 0);
    }

    #[test]
    fn test_bad_chord_attaches_nothing() {
        let surface = Rc::new(Surface::default());
        let (manager, _) = open(&surface);
        let mut shortcuts = manager.shortcuts();

        assert!(shortcuts.on("Ctrl+Hyper", |_| {}).is_err());
        assert!(shortcuts.on("Hyper+A", |_| {}).is_err());
        assert_eq!(surface.attached.get(), 2);
        assert_eq!(shortcuts.binding_count(), 0);
    }

    #[test]
    fn test_individual_release() {
        let surface = Rc::new(Surface::default());
        let (manager, _) = open(&surface);
        let mut shortcuts = manager.shortcuts();

        let first = shortcuts
            .bind("A", ShortcutOptions::new(), |_| {})
            .unwrap();
        shortcuts.on("B", |_| {}).unwrap();

        assert!(shortcuts.off(first).unwrap());
        assert!(!shortcuts.off(first).unwrap());
        assert_eq!(surface.detached.get(), 1);
        assert_eq!(shortcuts.chords(), vec![ChordMatcher::parse("B").unwrap()]);

        shortcuts.off_all().unwrap();
        assert_eq!(surface.detached.get(), 2);
    }

    #[test]
    fn test_keyup_binding() {
        let surface = Rc::new(Surface::default());
        let (manager, queue) = open(&surface);
        let mut shortcuts = manager.shortcuts();

        shortcuts
            .on_with("Esc", ShortcutOptions::new().event_type(EventType::KeyUp), |_| {})
            .unwrap();

        let event = KeyboardEvent::new(27);
        surface.fire(EventType::KeyDown, &event);
        assert!(queue.is_empty());

        surface.fire(EventType::KeyUp, &event);
        assert_eq!(queue.len(), 1);
    }
}
