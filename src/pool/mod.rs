// src/pool/mod.rs

//! Fixed-size worker pool draining a shared FIFO of tasks.
//!
//! - [`task`] defines the unit of work.
//! - [`queue`] is the blocking, unbounded task queue shared by producers and
//!   workers.
//! - [`state`] holds the `Running -> Stopping -> Stopped` state machine.
//! - [`worker`] owns the threads, the worker loop and the stop protocol.
//!
//! The pool knows nothing about graphs: what a task *does* and when the work
//! is complete is supplied through the [`TaskHandler`] trait.

pub mod queue;
pub mod state;
pub mod task;
pub mod worker;

pub use queue::{Dequeue, QueueStats, TaskQueue};
pub use state::{PoolState, StopReason};
pub use task::Task;
pub use worker::{PoolReport, TaskHandler, WorkerPool};
