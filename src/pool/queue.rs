// src/pool/queue.rs

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use tracing::trace;

use super::task::Task;

/// Result of a blocking [`TaskQueue::pop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dequeue {
    /// The head of the queue.
    Task(Task),
    /// The queue was closed; no task will be handed out any more.
    Closed,
    /// The queue is empty, still open, and every other consumer is already
    /// blocked on it: nobody is left who could push more work.
    Quiescent,
}

/// Lifetime push/pop totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueStats {
    pub pushed: u64,
    pub popped: u64,
}

#[derive(Debug, Default)]
struct QueueInner {
    tasks: VecDeque<Task>,
    closed: bool,
    /// Number of workers expected to consume from this queue.
    consumers: usize,
    /// Consumers currently blocked in `pop`.
    waiting: usize,
    stats: QueueStats,
}

/// Unbounded, thread-safe FIFO of pending tasks.
///
/// - `push` never blocks and always appends to the tail.
/// - `pop` blocks while the queue is empty and open, and wakes on either a
///   push or [`close`](Self::close).
/// - The task list, the closed flag and the waiter count share one mutex, so a
///   consumer can never miss the wake-up that follows a push or a close.
#[derive(Debug, Default)]
pub struct TaskQueue {
    inner: Mutex<QueueInner>,
    available: Condvar,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, QueueInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Declare how many workers consume from this queue.
    ///
    /// Needed for quiescence detection; a queue with zero consumers never
    /// reports [`Dequeue::Quiescent`].
    pub fn set_consumers(&self, consumers: usize) {
        self.lock().consumers = consumers;
    }

    /// Append a task to the tail and wake one blocked consumer.
    pub fn push(&self, task: Task) {
        let mut inner = self.lock();
        inner.tasks.push_back(task);
        inner.stats.pushed += 1;
        trace!(?task, queued = inner.tasks.len(), "task pushed");
        drop(inner);

        self.available.notify_one();
    }

    /// Remove the head without blocking; `None` when empty.
    pub fn try_pop(&self) -> Option<Task> {
        let mut inner = self.lock();
        let task = inner.tasks.pop_front()?;
        inner.stats.popped += 1;
        Some(task)
    }

    /// Remove the head, blocking while the queue is empty and open.
    pub fn pop(&self) -> Dequeue {
        let mut inner = self.lock();

        loop {
            if inner.closed {
                return Dequeue::Closed;
            }

            if let Some(task) = inner.tasks.pop_front() {
                inner.stats.popped += 1;
                return Dequeue::Task(task);
            }

            // Every other consumer is parked here and the queue is empty:
            // blocking too would leave no thread able to make progress.
            if inner.consumers > 0 && inner.waiting + 1 >= inner.consumers {
                return Dequeue::Quiescent;
            }

            inner.waiting += 1;
            inner = self
                .available
                .wait(inner)
                .unwrap_or_else(PoisonError::into_inner);
            inner.waiting -= 1;
        }
    }

    /// Stop handing out tasks and wake every blocked consumer.
    ///
    /// Idempotent. Tasks still queued stay in place (and are counted as
    /// pushed but never popped).
    pub fn close(&self) {
        let mut inner = self.lock();
        inner.closed = true;
        drop(inner);

        self.available.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    pub fn len(&self) -> usize {
        self.lock().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().tasks.is_empty()
    }

    pub fn stats(&self) -> QueueStats {
        self.lock().stats
    }
}
