//! Teardown chain of detach actions.

use crate::chord::ChordMatcher;
use crate::error::ShortcutResult;
use crate::event::EventType;
use crate::target::Listener;

/// Identity of one binding within a [`Shortcuts`](crate::Shortcuts) session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(pub(crate) u64);

/// What it takes to detach one binding.
#[derive(Debug, Clone)]
pub(crate) struct DetachAction {
    pub id: BindingId,
    pub chord: ChordMatcher,
    pub event_type: EventType,
    pub listener: Listener,
}

#[derive(Debug)]
struct Link {
    action: DetachAction,
    previous: Option<Box<Link>>,
}

/// Singly-linked chain of detach actions, newest first.
#[derive(Debug, Default)]
pub(crate) struct TeardownChain {
    head: Option<Box<Link>>,
    len: usize,
}

impl TeardownChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Prepend an action; it will run before every older one.
    pub fn push(&mut self, action: DetachAction) {
        let previous = self.head.take();
        self.head = Some(Box::new(Link { action, previous }));
        self.len += 1;
    }

    /// Iterate actions newest first.
    pub fn iter(&self) -> impl Iterator<Item = &DetachAction> {
        std::iter::successors(self.head.as_deref(), |link| link.previous.as_deref())
            .map(|link| &link.action)
    }

    /// Run every action newest first, emptying the chain.
    ///
    /// If an action fails, it and every older action stay in the chain so a
    /// later run neither skips nor repeats a detach. Returns how many actions
    /// ran.
    pub fn run<F>(&mut self, mut detach: F) -> ShortcutResult<usize>
    where
        F: FnMut(&DetachAction) -> ShortcutResult<()>,
    {
        let mut released = 0;

        while let Some(mut link) = self.head.take() {
            if let Err(e) = detach(&link.action) {
                self.head = Some(link);
                return Err(e);
            }
            self.head = link.previous.take();
            self.len -= 1;
            released += 1;
        }

        Ok(released)
    }

    /// Run and unlink the single action with the given id.
    ///
    /// Returns `false` if no such action is in the chain.
    pub fn release<F>(&mut self, id: BindingId, detach: F) -> ShortcutResult<bool>
    where
        F: FnOnce(&DetachAction) -> ShortcutResult<()>,
    {
        match self.iter().find(|action| action.id == id) {
            Some(action) => detach(action)?,
            None => return Ok(false),
        }

        let mut kept = Vec::with_capacity(self.len);
        let mut next = self.head.take();
        while let Some(mut link) = next {
            next = link.previous.take();
            if link.action.id != id {
                kept.push(link);
            }
        }

        // `kept` is newest first; relink from the oldest.
        self.len = 0;
        for link in kept.into_iter().rev() {
            self.push(link.action);
        }

        Ok(true)
    }
}

impl Drop for TeardownChain {
    fn drop(&mut self) {
        // Unlink iteratively so long chains don't recurse on drop.
        let mut next = self.head.take();
        while let Some(mut link) = next {
            next = link.previous.take();
        }
    }
}
