// src/traversal/driver.rs

//! Seeds the task queue, runs the worker pool to completion and checks the
//! outcome.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::errors::{GraphSumError, Result};
use crate::graph::reachability::unreachable_from;
use crate::graph::{Graph, NodeId};
use crate::pool::{StopReason, TaskQueue, WorkerPool};

use super::context::{TaskHook, TraversalContext};

/// Which nodes become root tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    /// Offer every node; duplicates are suppressed by the tracker.
    AllNodes,
    /// Only these nodes. Every node must be reachable from them.
    Roots(Vec<NodeId>),
}

/// Resolved settings for one traversal.
#[derive(Clone)]
pub struct TraversalOptions {
    pub threads: usize,
    pub seed: Seed,
    pub task_hook: Option<TaskHook>,
}

impl fmt::Debug for TraversalOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraversalOptions")
            .field("threads", &self.threads)
            .field("seed", &self.seed)
            .field("task_hook", &self.task_hook.is_some())
            .finish()
    }
}

impl TraversalOptions {
    pub fn new(threads: usize) -> Self {
        Self {
            threads,
            seed: Seed::AllNodes,
            task_hook: None,
        }
    }

    pub fn with_roots(mut self, roots: Vec<NodeId>) -> Self {
        self.seed = Seed::Roots(roots);
        self
    }

    pub fn with_task_hook(mut self, hook: TaskHook) -> Self {
        self.task_hook = Some(hook);
        self
    }
}

/// Outcome of a successful traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalReport {
    pub sum: i64,
    pub processed: usize,
    pub node_count: usize,
    /// Tasks pushed, seeds included. Equals `node_count` on success.
    pub tasks_created: u64,
    pub tasks_executed: u64,
    pub threads: usize,
    pub elapsed: Duration,
}

/// Check the requested roots against the graph and expand `AllNodes`.
fn resolve_roots(graph: &Graph, seed: &Seed) -> Result<Vec<NodeId>> {
    let count = graph.node_count();
    let roots = match seed {
        Seed::AllNodes => return Ok((0..count).collect()),
        Seed::Roots(roots) => roots,
    };

    if let Some(&root) = roots.iter().find(|&&r| r >= count) {
        return Err(GraphSumError::InvalidRoot { root, count });
    }

    if count > 0 && roots.is_empty() {
        return Err(GraphSumError::ConfigError(
            "explicit root set must not be empty".to_string(),
        ));
    }

    let unreachable = unreachable_from(graph, roots);
    if !unreachable.is_empty() {
        return Err(GraphSumError::UnreachableNodes {
            count: unreachable.len(),
            sample: unreachable.into_iter().take(8).collect(),
        });
    }

    Ok(roots.clone())
}

/// Traverse `graph` on a fresh worker pool and return the sum of all node
/// values.
///
/// Roots are validated and the queue is seeded before any thread exists;
/// errors at that stage leave nothing to clean up.
pub fn run_traversal(graph: Arc<Graph>, options: &TraversalOptions) -> Result<TraversalReport> {
    let started = Instant::now();
    let node_count = graph.node_count();

    if options.threads == 0 {
        return Err(GraphSumError::ConfigError(
            "thread count must be >= 1 (got 0)".to_string(),
        ));
    }

    let roots = resolve_roots(&graph, &options.seed)?;

    if node_count == 0 {
        info!("empty graph; nothing to traverse");
        return Ok(TraversalReport {
            sum: 0,
            processed: 0,
            node_count: 0,
            tasks_created: 0,
            tasks_executed: 0,
            threads: 0,
            elapsed: started.elapsed(),
        });
    }

    let context = Arc::new(TraversalContext::new(
        Arc::clone(&graph),
        options.task_hook.clone(),
    ));
    let queue = Arc::new(TaskQueue::new());

    let seeded = context.seed(&queue, roots);
    debug!(seeded, node_count, "queue seeded with root tasks");

    let pool = WorkerPool::create(options.threads, Arc::clone(&queue), Arc::clone(&context))?;
    let pool_report = pool.join_all()?;

    let processed = context.progress().processed();
    match pool_report.reason {
        StopReason::Completed => {}
        StopReason::Stalled => {
            warn!(processed, node_count, "traversal stalled before completion");
            return Err(GraphSumError::Stalled {
                processed,
                total: node_count,
            });
        }
        StopReason::Aborted(msg) => return Err(GraphSumError::Aborted(msg)),
    }

    context.verify_exactly_once()?;

    let stats = queue.stats();
    if stats.pushed != stats.popped || processed != node_count {
        return Err(GraphSumError::Invariant(format!(
            "pushed {} / popped {} tasks, processed {processed} of {node_count} nodes",
            stats.pushed, stats.popped
        )));
    }

    let report = TraversalReport {
        sum: context.progress().sum(),
        processed,
        node_count,
        tasks_created: stats.pushed,
        tasks_executed: pool_report.tasks_executed,
        threads: pool_report.threads,
        elapsed: started.elapsed(),
    };
    info!(
        sum = report.sum,
        nodes = node_count,
        threads = report.threads,
        elapsed = ?report.elapsed,
        "traversal complete"
    );

    Ok(report)
}
