//! Deferred callback scheduling.
//!
//! Matched callbacks never run inside the native event dispatch. They are
//! handed to a [`Scheduler`] and run on a later turn of the host loop, in the
//! order they were scheduled.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

/// Defers tasks to a later turn of the host event loop.
pub trait Scheduler {
    /// Queue a task. It must not run before this call returns.
    fn defer(&self, task: Task);
}

/// FIFO task queue drained by the host loop.
///
/// Clones share the same queue.
#[derive(Clone, Default)]
pub struct TaskQueue {
    tasks: Rc<RefCell<VecDeque<Task>>>,
}

impl TaskQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued tasks.
    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Check if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    /// Run every task queued before this call, oldest first.
    ///
    /// Tasks queued while running wait for the next call. Returns how many
    /// tasks ran.
    pub fn run_pending(&self) -> usize {
        let batch = std::mem::take(&mut *self.tasks.borrow_mut());
        let count = batch.len();
        for task in batch {
            task();
        }
        count
    }

    /// Drop every queued task without running it.
    pub fn clear(&self) {
        self.tasks.borrow_mut().clear();
    }
}

impl Scheduler for TaskQueue {
    fn defer(&self, task: Task) {
        self.tasks.borrow_mut().push_back(task);
    }
}

impl fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskQueue").field("pending", &self.len()).finish()
    }
}

/// Runs tasks on the current tokio [`LocalSet`](tokio::task::LocalSet).
///
/// `defer` must be called from within a `LocalSet`.
#[cfg(feature = "tokio")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSetScheduler;

#[cfg(feature = "tokio")]
impl Scheduler for LocalSetScheduler {
    fn defer(&self, task: Task) {
        tokio::task::spawn_local(async move {
            task();
        });
    }
}
