//! Listener registration capability of event targets.
//!
//! Hosts expose listener registration through one of two mechanisms: the
//! standard `add/removeEventListener` pair, or the legacy `attach/detachEvent`
//! pair keyed by `on`-prefixed names. [`Registrar`] picks one when a manager is
//! set up so call sites never branch on it.

use crate::error::{ShortcutError, ShortcutResult};
use crate::event::{EventType, KeyboardEvent};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// A low-level event listener.
///
/// Clones share identity, so the clone handed to `detach` removes exactly the
/// listener that was attached.
#[derive(Clone)]
pub struct Listener {
    id: ListenerId,
    handler: Rc<dyn Fn(&KeyboardEvent)>,
}

impl Listener {
    /// Wrap a handler in a new listener identity.
    pub fn new(handler: impl Fn(&KeyboardEvent) + 'static) -> Self {
        Self {
            id: ListenerId(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed)),
            handler: Rc::new(handler),
        }
    }

    /// Listener identity.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Invoke the handler.
    pub fn call(&self, event: &KeyboardEvent) {
        (self.handler)(event)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener").field("id", &self.id).finish()
    }
}

/// Standard listener registration (`addEventListener`).
pub trait StandardRegistration {
    /// Register a listener for an event type.
    fn add_event_listener(&self, event_type: EventType, listener: &Listener);

    /// Remove a previously registered listener.
    fn remove_event_listener(&self, event_type: EventType, listener: &Listener);
}

/// Legacy listener registration (`attachEvent`), keyed by `on`-prefixed names.
pub trait LegacyRegistration {
    /// Register a listener under a legacy event name such as `onkeydown`.
    fn attach_event(&self, name: &str, listener: &Listener);

    /// Remove a listener registered under a legacy event name.
    fn detach_event(&self, name: &str, listener: &Listener);
}

/// Something keyboard listeners can be attached to.
///
/// Implementors expose whichever registration mechanisms they support.
pub trait EventTarget {
    /// Standard registration, if supported.
    fn standard(&self) -> Option<&dyn StandardRegistration> {
        None
    }

    /// Legacy registration, if supported.
    fn legacy(&self) -> Option<&dyn LegacyRegistration> {
        None
    }

    /// Short description used in error messages and logs.
    fn describe(&self) -> String {
        "event target".to_string()
    }
}

/// Host document: the default target and the id lookup for string targets.
pub trait Document {
    /// Document root target.
    fn root(&self) -> Rc<dyn EventTarget>;

    /// Find an element target by id.
    fn get_element_by_id(&self, id: &str) -> Option<Rc<dyn EventTarget>>;
}

/// Registration mechanism selected for a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registrar {
    /// `add/removeEventListener`.
    Standard,
    /// `attach/detachEvent`.
    Legacy,
}

impl Registrar {
    /// Select the mechanism a target supports, preferring the standard one.
    ///
    /// # Errors
    ///
    /// Returns [`ShortcutError::UnsupportedPlatform`] if the target supports
    /// neither mechanism.
    pub fn select(target: &dyn EventTarget) -> ShortcutResult<Self> {
        if target.standard().is_some() {
            Ok(Self::Standard)
        } else if target.legacy().is_some() {
            Ok(Self::Legacy)
        } else {
            Err(ShortcutError::UnsupportedPlatform(target.describe()))
        }
    }

    /// Attach a listener. Each call must be paired with one [`detach`](Self::detach).
    ///
    /// # Errors
    ///
    /// Returns [`ShortcutError::UnsupportedPlatform`] if the target no longer
    /// exposes the selected mechanism.
    pub fn attach(
        self,
        target: &dyn EventTarget,
        event_type: EventType,
        listener: &Listener,
    ) -> ShortcutResult<()> {
        match self {
            Self::Standard => target
                .standard()
                .ok_or_else(|| ShortcutError::UnsupportedPlatform(target.describe()))?
                .add_event_listener(event_type, listener),
            Self::Legacy => target
                .legacy()
                .ok_or_else(|| ShortcutError::UnsupportedPlatform(target.describe()))?
                .attach_event(event_type.legacy_name(), listener),
        }

        tracing::debug!(
            "Attached {} listener {:?} to {} ({:?})",
            event_type,
            listener.id(),
            target.describe(),
            self
        );
        Ok(())
    }

    /// Detach a listener previously attached with the same event type.
    ///
    /// # Errors
    ///
    /// Returns [`ShortcutError::UnsupportedPlatform`] if the target no longer
    /// exposes the selected mechanism.
    pub fn detach(
        self,
        target: &dyn EventTarget,
        event_type: EventType,
        listener: &Listener,
    ) -> ShortcutResult<()> {
        match self {
            Self::Standard => target
                .standard()
                .ok_or_else(|| ShortcutError::UnsupportedPlatform(target.describe()))?
                .remove_event_listener(event_type, listener),
            Self::Legacy => target
                .legacy()
                .ok_or_else(|| ShortcutError::UnsupportedPlatform(target.describe()))?
                .detach_event(event_type.legacy_name(), listener),
        }

        tracing::debug!(
            "Detached {} listener {:?} from {}",
            event_type,
            listener.id(),
            target.describe()
        );
        Ok(())
    }
}

/// Attach a listener using whichever mechanism the target supports.
///
/// # Errors
///
/// Returns [`ShortcutError::UnsupportedPlatform`] if the target supports
/// neither mechanism.
pub fn attach_listener(
    target: &dyn EventTarget,
    event_type: EventType,
    listener: &Listener,
) -> ShortcutResult<()> {
    Registrar::select(target)?.attach(target, event_type, listener)
}

/// Detach a listener using whichever mechanism the target supports.
///
/// # Errors
///
/// Returns [`ShortcutError::UnsupportedPlatform`] if the target supports
/// neither mechanism.
pub fn detach_listener(
    target: &dyn EventTarget,
    event_type: EventType,
    listener: &Listener,
) -> ShortcutResult<()> {
    Registrar::select(target)?.detach(target, event_type, listener)
}

/// What a manager should bind to.
#[derive(Clone, Default)]
pub enum TargetRef {
    /// The document root.
    #[default]
    Document,
    /// An element looked up by id.
    Id(String),
    /// A bare element.
    Element(Rc<dyn EventTarget>),
    /// A wrapped element list; the first element is used.
    Wrapped(Vec<Rc<dyn EventTarget>>),
}

impl TargetRef {
    /// Resolve to a concrete target.
    ///
    /// # Errors
    ///
    /// Returns [`ShortcutError::TargetNotFound`] if an id does not resolve or
    /// a wrapped list is empty.
    pub fn resolve(self, document: &dyn Document) -> ShortcutResult<Rc<dyn EventTarget>> {
        match self {
            Self::Document => Ok(document.root()),
            Self::Id(id) => document
                .get_element_by_id(&id)
                .ok_or(ShortcutError::TargetNotFound(id)),
            Self::Element(target) => Ok(target),
            Self::Wrapped(targets) => targets
                .into_iter()
                .next()
                .ok_or_else(|| ShortcutError::TargetNotFound("<empty wrapper>".to_string())),
        }
    }
}

impl fmt::Debug for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => write!(f, "Document"),
            Self::Id(id) => write!(f, "Id({:?})", id),
            Self::Element(target) => write!(f, "Element({})", target.describe()),
            Self::Wrapped(targets) => write!(f, "Wrapped({} elements)", targets.len()),
        }
    }
}

impl From<&str> for TargetRef {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for TargetRef {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl From<Rc<dyn EventTarget>> for TargetRef {
    fn from(target: Rc<dyn EventTarget>) -> Self {
        Self::Element(target)
    }
}

impl From<Vec<Rc<dyn EventTarget>>> for TargetRef {
    fn from(targets: Vec<Rc<dyn EventTarget>>) -> Self {
        Self::Wrapped(targets)
    }
}
