//! Manager factory.

use crate::config::{ShortcutConfig, ShortcutOptions};
use crate::error::ShortcutResult;
use crate::manager::ShortcutManager;
use crate::schedule::Scheduler;
use crate::target::{Document, TargetRef};
use std::fmt;
use std::rc::Rc;

/// Creates [`ShortcutManager`]s for a host document.
///
/// ```ignore
/// let factory = ShortcutFactory::new(document, Rc::new(queue.clone()));
///
/// // Page-wide shortcuts
/// let mut page = factory.document_manager()?;
///
/// // Shortcuts scoped to one element
/// let mut viewer = factory.create_with("viewer", ShortcutOptions::new().input_disabled(true))?;
/// ```
pub struct ShortcutFactory {
    document: Rc<dyn Document>,
    scheduler: Rc<dyn Scheduler>,
    defaults: ShortcutConfig,
}

impl ShortcutFactory {
    /// Create a factory with built-in defaults.
    pub fn new(document: Rc<dyn Document>, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            document,
            scheduler,
            defaults: ShortcutConfig::default(),
        }
    }

    /// Replace the defaults every manager starts from.
    pub fn with_defaults(mut self, defaults: ShortcutConfig) -> Self {
        self.defaults = defaults;
        self
    }

    /// Defaults every manager starts from.
    pub fn defaults(&self) -> &ShortcutConfig {
        &self.defaults
    }

    /// Create a manager for a target with the factory defaults.
    ///
    /// # Errors
    ///
    /// Fails with [`ShortcutError::TargetNotFound`](crate::ShortcutError::TargetNotFound)
    /// if an id target does not resolve, or
    /// [`ShortcutError::UnsupportedPlatform`](crate::ShortcutError::UnsupportedPlatform)
    /// if the target cannot take listeners.
    pub fn create(&self, target: impl Into<TargetRef>) -> ShortcutResult<ShortcutManager> {
        self.create_with(target, ShortcutOptions::default())
    }

    /// Create a manager for a target with manager-level overrides.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub fn create_with(
        &self,
        target: impl Into<TargetRef>,
        options: ShortcutOptions,
    ) -> ShortcutResult<ShortcutManager> {
        let target = target.into().resolve(self.document.as_ref())?;
        ShortcutManager::new(target, self.defaults.with(&options), Rc::clone(&self.scheduler))
    }

    /// Create a manager bound to the document root.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub fn document_manager(&self) -> ShortcutResult<ShortcutManager> {
        self.create(TargetRef::Document)
    }
}

impl fmt::Debug for ShortcutFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutFactory")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}
