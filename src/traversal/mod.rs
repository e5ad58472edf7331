// src/traversal/mod.rs

//! Parallel graph traversal on top of the worker pool.
//!
//! - [`tracker`] guarantees each node gets at most one task.
//! - [`progress`] accumulates the running sum and owns the termination
//!   detector.
//! - [`context`] is the shared state handed to every worker, and implements
//!   the node-processing task.
//! - [`driver`] resolves roots, seeds the queue, runs the pool and checks the
//!   result.

pub mod context;
pub mod driver;
pub mod progress;
pub mod tracker;

pub use context::{TaskHook, TraversalContext};
pub use driver::{run_traversal, Seed, TraversalOptions, TraversalReport};
pub use progress::{ProgressCounters, TerminationDetector};
pub use tracker::VisitationTracker;
