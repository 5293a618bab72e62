//! Chord-builder sessions.

use crate::chord::ChordMatcher;
use crate::config::{ShortcutConfig, ShortcutOptions};
use crate::dispatch::{chord_listener, Callback};
use crate::error::ShortcutResult;
use crate::event::KeyboardEvent;
use crate::schedule::Scheduler;
use crate::target::{EventTarget, Registrar};
use crate::teardown::{BindingId, DetachAction, TeardownChain};
use std::fmt;
use std::rc::Rc;

/// A set of chord bindings released together.
///
/// Created by [`ShortcutManager::shortcuts`](crate::ShortcutManager::shortcuts).
/// Every `on` call attaches one listener; [`off_all`](Self::off_all) detaches
/// all of them, newest first.
///
/// ```ignore
/// let mut shortcuts = manager.shortcuts();
/// shortcuts
///     .on("PageUp", prev_page)?
///     .on("PageDown", next_page)?
///     .on("Ctrl+Home", first_page)?;
///
/// // later
/// shortcuts.off_all()?;
/// ```
pub struct Shortcuts {
    target: Rc<dyn EventTarget>,
    registrar: Registrar,
    config: ShortcutConfig,
    scheduler: Rc<dyn Scheduler>,
    chain: TeardownChain,
    next_id: u64,
}

impl Shortcuts {
    pub(crate) fn new(
        target: Rc<dyn EventTarget>,
        registrar: Registrar,
        config: ShortcutConfig,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            target,
            registrar,
            config,
            scheduler,
            chain: TeardownChain::new(),
            next_id: 1,
        }
    }

    /// Register a callback for a chord using the manager's options.
    ///
    /// # Errors
    ///
    /// Fails if the chord does not parse (nothing is attached in that case) or
    /// if the target cannot take listeners.
    pub fn on<F>(&mut self, chord: &str, callback: F) -> ShortcutResult<&mut Self>
    where
        F: Fn(&KeyboardEvent) + 'static,
    {
        self.bind(chord, ShortcutOptions::default(), callback)?;
        Ok(self)
    }

    /// Register a callback for a chord with per-call overrides.
    ///
    /// # Errors
    ///
    /// Same as [`on`](Self::on).
    pub fn on_with<F>(
        &mut self,
        chord: &str,
        options: ShortcutOptions,
        callback: F,
    ) -> ShortcutResult<&mut Self>
    where
        F: Fn(&KeyboardEvent) + 'static,
    {
        self.bind(chord, options, callback)?;
        Ok(self)
    }

    /// Register a callback and return the binding's id for individual release.
    ///
    /// # Errors
    ///
    /// Same as [`on`](Self::on).
    pub fn bind<F>(
        &mut self,
        chord: &str,
        options: ShortcutOptions,
        callback: F,
    ) -> ShortcutResult<BindingId>
    where
        F: Fn(&KeyboardEvent) + 'static,
    {
        let matcher = ChordMatcher::parse(chord)?;
        let config = self.config.with(&options);
        let callback: Callback = Rc::new(callback);
        let listener = chord_listener(matcher, config, Rc::clone(&self.scheduler), callback);

        self.registrar
            .attach(self.target.as_ref(), config.event_type, &listener)?;

        let id = BindingId(self.next_id);
        self.next_id += 1;
        self.chain.push(DetachAction {
            id,
            chord: matcher,
            event_type: config.event_type,
            listener,
        });

        tracing::debug!("Bound {} on {} as {:?}", matcher, config.event_type, id);
        Ok(id)
    }

    /// Detach a single binding.
    ///
    /// Returns `false` if the binding was already released.
    ///
    /// # Errors
    ///
    /// Fails if the target cannot detach listeners; the binding stays
    /// registered in that case.
    pub fn off(&mut self, id: BindingId) -> ShortcutResult<bool> {
        let target = self.target.as_ref();
        let registrar = self.registrar;
        self.chain.release(id, |action| {
            registrar.detach(target, action.event_type, &action.listener)
        })
    }

    /// Detach every binding registered through this session.
    ///
    /// Calling it again is a no-op. Callbacks already scheduled still run.
    ///
    /// # Errors
    ///
    /// Fails if the target cannot detach listeners. Bindings not yet detached
    /// stay in the session and a later call resumes with them.
    pub fn off_all(&mut self) -> ShortcutResult<()> {
        let target = self.target.as_ref();
        let registrar = self.registrar;
        let released = self
            .chain
            .run(|action| registrar.detach(target, action.event_type, &action.listener))
            .inspect_err(|e| tracing::warn!("Shortcut teardown stopped early: {}", e))?;

        if released > 0 {
            tracing::debug!("Released {} shortcut bindings", released);
        }
        Ok(())
    }

    /// Number of live bindings.
    pub fn binding_count(&self) -> usize {
        self.chain.len()
    }

    /// Check if every binding has been released.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Live chords, newest first.
    pub fn chords(&self) -> Vec<ChordMatcher> {
        self.chain.iter().map(|action| action.chord).collect()
    }
}

impl fmt::Debug for Shortcuts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shortcuts")
            .field("target", &self.target.describe())
            .field("registrar", &self.registrar)
            .field("config", &self.config)
            .field("bindings", &self.chain.len())
            .finish()
    }
}
