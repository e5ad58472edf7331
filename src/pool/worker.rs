// src/pool/worker.rs

//! Worker threads and the stop protocol.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use tracing::{debug, info, trace, warn};

use crate::errors::{GraphSumError, Result};

use super::queue::{Dequeue, TaskQueue};
use super::state::{AtomicPoolState, PoolState, StopReason};
use super::task::Task;

/// What the pool runs, and how it knows the work is finished.
///
/// Production code uses `traversal::TraversalContext`; tests can provide
/// their own implementation.
pub trait TaskHandler: Send + Sync + 'static {
    /// Execute one task. New work is pushed onto `queue`.
    ///
    /// An error aborts the whole pool: a task that cannot finish may have
    /// claimed work that nobody else will ever do.
    fn execute(&self, task: Task, queue: &TaskQueue) -> Result<()>;

    /// True once no further task can ever be produced.
    ///
    /// Called after every task, so it must be cheap.
    fn is_complete(&self) -> bool;
}

/// Summary returned by [`WorkerPool::join_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolReport {
    pub reason: StopReason,
    pub threads: usize,
    pub tasks_executed: u64,
}

struct PoolShared<H> {
    queue: Arc<TaskQueue>,
    handler: Arc<H>,
    state: AtomicPoolState,
    stop_reason: Mutex<Option<StopReason>>,
    tasks_executed: AtomicU64,
}

impl<H: TaskHandler> PoolShared<H> {
    /// `Running -> Stopping`; only the winning caller records its reason and
    /// closes the queue. Returns whether this call won.
    fn request_stop(&self, reason: StopReason) -> bool {
        if !self.state.begin_stopping() {
            return false;
        }

        info!(?reason, "worker pool stopping");
        *self
            .stop_reason
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(reason);
        self.queue.close();
        true
    }

    fn stop_when(&self, predicate: impl FnOnce() -> bool) -> bool {
        if self.state.load() != PoolState::Running || !predicate() {
            return false;
        }
        self.request_stop(StopReason::Completed)
    }

    fn is_running(&self) -> bool {
        self.state.load() == PoolState::Running
    }
}

/// Aborts the pool if its worker unwinds, so the other workers are not left
/// waiting for work the dead thread had claimed.
struct PanicGuard<'a, H: TaskHandler> {
    shared: &'a PoolShared<H>,
    index: usize,
}

impl<H: TaskHandler> Drop for PanicGuard<'_, H> {
    fn drop(&mut self) {
        if thread::panicking() {
            warn!(worker = self.index, "worker panicked; aborting pool");
            self.shared
                .request_stop(StopReason::Aborted(format!("worker {} panicked", self.index)));
        }
    }
}

fn worker_loop<H: TaskHandler>(index: usize, shared: Arc<PoolShared<H>>) {
    let _guard = PanicGuard {
        shared: &shared,
        index,
    };
    debug!(worker = index, "worker started");

    loop {
        match shared.queue.pop() {
            Dequeue::Task(task) => {
                // Tasks dequeued in the window between the state flip and the
                // queue closing are dropped, not run.
                if !shared.is_running() {
                    break;
                }

                trace!(worker = index, ?task, "executing task");
                if let Err(err) = shared.handler.execute(task, &shared.queue) {
                    warn!(worker = index, ?task, error = %err, "task failed; aborting pool");
                    shared.request_stop(StopReason::Aborted(err.to_string()));
                    break;
                }
                shared.tasks_executed.fetch_add(1, Ordering::Relaxed);

                if shared.stop_when(|| shared.handler.is_complete()) {
                    debug!(worker = index, "observed completion");
                }
                if !shared.is_running() {
                    break;
                }
            }
            Dequeue::Quiescent => {
                let reason = if shared.handler.is_complete() {
                    StopReason::Completed
                } else {
                    StopReason::Stalled
                };
                debug!(worker = index, ?reason, "queue quiescent");
                shared.request_stop(reason);
                break;
            }
            Dequeue::Closed => break,
        }
    }

    debug!(worker = index, "worker exiting");
}

/// A fixed set of long-lived worker threads draining one [`TaskQueue`].
///
/// Seed the queue *before* creating the pool: a pool whose queue is empty
/// from the start is immediately quiescent.
pub struct WorkerPool<H: TaskHandler> {
    shared: Arc<PoolShared<H>>,
    workers: Vec<JoinHandle<()>>,
}

impl<H: TaskHandler> fmt::Debug for WorkerPool<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerPool")
            .field("state", &self.shared.state.load())
            .field("threads", &self.workers.len())
            .finish_non_exhaustive()
    }
}

impl<H: TaskHandler> WorkerPool<H> {
    /// Spawn `thread_count` workers.
    ///
    /// Failing to spawn any thread is fatal: the pool is aborted, the
    /// workers that did start are joined, and the spawn error is returned.
    pub fn create(thread_count: usize, queue: Arc<TaskQueue>, handler: Arc<H>) -> Result<Self> {
        if thread_count == 0 {
            return Err(GraphSumError::ConfigError(
                "worker pool needs at least one thread".to_string(),
            ));
        }

        queue.set_consumers(thread_count);

        let shared = Arc::new(PoolShared {
            queue,
            handler,
            state: AtomicPoolState::new(),
            stop_reason: Mutex::new(None),
            tasks_executed: AtomicU64::new(0),
        });

        let mut workers = Vec::with_capacity(thread_count);
        for index in 0..thread_count {
            let worker_shared = Arc::clone(&shared);
            let spawned = thread::Builder::new()
                .name(format!("graphsum-worker-{index}"))
                .spawn(move || worker_loop(index, worker_shared));

            match spawned {
                Ok(handle) => workers.push(handle),
                Err(source) => {
                    warn!(index, error = %source, "failed to spawn worker thread");
                    shared.request_stop(StopReason::Aborted(format!(
                        "could not spawn worker {index}"
                    )));
                    for handle in workers {
                        let _ = handle.join();
                    }
                    shared.state.mark_stopped();
                    return Err(GraphSumError::ThreadSpawn { index, source });
                }
            }
        }

        info!(threads = thread_count, "worker pool started");
        Ok(Self { shared, workers })
    }

    pub fn state(&self) -> PoolState {
        self.shared.state.load()
    }

    pub fn thread_count(&self) -> usize {
        self.workers.len()
    }

    /// Stop the pool if `predicate` holds. Returns true only for the caller
    /// that performed the `Running -> Stopping` transition.
    pub fn stop_when(&self, predicate: impl FnOnce() -> bool) -> bool {
        self.shared.stop_when(predicate)
    }

    /// Stop the pool without waiting for completion.
    pub fn abort(&self, reason: impl Into<String>) -> bool {
        self.shared.request_stop(StopReason::Aborted(reason.into()))
    }

    /// Block until every worker has exited, then report why the pool stopped.
    ///
    /// A panicked worker is reported as [`GraphSumError::WorkerPanicked`].
    pub fn join_all(self) -> Result<PoolReport> {
        let threads = self.workers.len();
        let mut panicked = None;

        for handle in self.workers {
            let name = handle.thread().name().unwrap_or("<unnamed>").to_string();
            if handle.join().is_err() && panicked.is_none() {
                panicked = Some(name);
            }
        }

        self.shared.state.mark_stopped();
        debug!(threads, "all workers joined");

        if let Some(worker) = panicked {
            return Err(GraphSumError::WorkerPanicked { worker });
        }

        let reason = self
            .shared
            .stop_reason
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .unwrap_or(StopReason::Stalled);

        Ok(PoolReport {
            reason,
            threads,
            tasks_executed: self.shared.tasks_executed.load(Ordering::Relaxed),
        })
    }
}
