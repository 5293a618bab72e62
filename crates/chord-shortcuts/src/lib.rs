//! # chord-shortcuts
//!
//! Keyboard chord shortcuts for event targets.
//!
//! ## Features
//!
//! - Chord notation like `"Ctrl+Alt+Shift+Delete"` parsed into matchers
//! - Live modifier tracking per target
//! - Fluent registration with one-call teardown of a whole session
//! - Standard and legacy listener registration behind one capability
//! - Deferred callbacks that never run inside native event dispatch
//! - Terminal surface driven by crossterm events
//!
//! ```ignore
//! use chord_shortcuts::{ShortcutFactory, TaskQueue};
//!
//! let queue = TaskQueue::new();
//! let factory = ShortcutFactory::new(document, Rc::new(queue.clone()));
//! let mut kb = factory.document_manager()?;
//!
//! let mut shortcuts = kb.shortcuts();
//! shortcuts
//!     .on("PageUp", prev_page)?
//!     .on("PageDown", next_page)?
//!     .on("Ctrl+Plus", zoom_in)?;
//!
//! // host loop, after each native event
//! queue.run_pending();
//!
//! // teardown
//! shortcuts.off_all()?;
//! kb.close()?;
//! ```

mod chord;
mod config;
mod dispatch;
mod error;
mod event;
mod factory;
mod keys;
mod manager;
mod modifiers;
mod schedule;
mod shortcuts;
mod target;
mod teardown;
mod terminal;

pub use chord::ChordMatcher;
pub use config::{ShortcutConfig, ShortcutOptions};
pub use dispatch::Callback;
pub use error::{ShortcutError, ShortcutResult};
pub use event::{Element, EventType, KeyboardEvent, Node};
pub use factory::ShortcutFactory;
pub use keys::{key_label, key_labels, parse_key, KeyCode};
pub use manager::ShortcutManager;
pub use modifiers::{parse_modifiers, LiveModifiers, ModifierState};
pub use schedule::{Scheduler, Task, TaskQueue};
pub use shortcuts::Shortcuts;
pub use target::{
    attach_listener, detach_listener, Document, EventTarget, LegacyRegistration, Listener,
    ListenerId, Registrar, StandardRegistration, TargetRef,
};
pub use teardown::BindingId;
pub use terminal::{legacy_key_code, TerminalSurface};

#[cfg(feature = "tokio")]
pub use schedule::LocalSetScheduler;

/// Parse chord notation into a matcher.
///
/// Shorthand for [`ChordMatcher::parse`].
pub fn parse(chord: &str) -> ShortcutResult<ChordMatcher> {
    ChordMatcher::parse(chord)
}
