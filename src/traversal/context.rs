// src/traversal/context.rs

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use tracing::trace;

use crate::errors::{GraphSumError, Result};
use crate::graph::{Graph, NodeId};
use crate::pool::{Task, TaskHandler, TaskQueue};

use super::progress::ProgressCounters;
use super::tracker::VisitationTracker;

/// Callback run at the start of every node-processing task.
///
/// Used to inject delays or record scheduling order.
pub type TaskHook = Arc<dyn Fn(NodeId) + Send + Sync>;

/// Everything a traversal shares between the driver and the workers.
///
/// Constructed once per run and handed to the pool behind an `Arc`; no
/// worker ever owns or frees any part of it.
pub struct TraversalContext {
    graph: Arc<Graph>,
    tracker: VisitationTracker,
    progress: ProgressCounters,
    executions: Vec<AtomicU32>,
    hook: Option<TaskHook>,
}

impl fmt::Debug for TraversalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraversalContext")
            .field("nodes", &self.graph.node_count())
            .field("processed", &self.progress.processed())
            .field("claimed", &self.tracker.claimed_count())
            .finish_non_exhaustive()
    }
}

impl TraversalContext {
    pub fn new(graph: Arc<Graph>, hook: Option<TaskHook>) -> Self {
        let count = graph.node_count();
        Self {
            graph,
            tracker: VisitationTracker::new(count),
            progress: ProgressCounters::new(count),
            executions: (0..count).map(|_| AtomicU32::new(0)).collect(),
            hook,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn tracker(&self) -> &VisitationTracker {
        &self.tracker
    }

    pub fn progress(&self) -> &ProgressCounters {
        &self.progress
    }

    /// Claim each root and enqueue a task for every root that was not
    /// already claimed. Returns the number of tasks pushed.
    pub fn seed(&self, queue: &TaskQueue, roots: impl IntoIterator<Item = NodeId>) -> usize {
        let mut seeded = 0;
        for root in roots {
            if self.tracker.try_claim(root) {
                queue.push(Task::Visit(root));
                seeded += 1;
            }
        }
        seeded
    }

    /// The node-processing task.
    ///
    /// 1. add the node's value to the sum and bump the processed count (one
    ///    critical section);
    /// 2. claim every unclaimed neighbour and enqueue a task for it.
    pub fn process_node(&self, id: NodeId, queue: &TaskQueue) -> Result<()> {
        let node = self.graph.node(id).ok_or_else(|| {
            GraphSumError::Invariant(format!(
                "task for unknown node {id} (graph has {} nodes)",
                self.graph.node_count()
            ))
        })?;

        if let Some(hook) = &self.hook {
            hook(id);
        }

        self.executions[id].fetch_add(1, Ordering::Relaxed);
        let processed = self.progress.record(node.value);
        trace!(node = id, value = node.value, processed, "node processed");

        for &neighbour in &node.neighbours {
            if self.tracker.try_claim(neighbour) {
                queue.push(Task::Visit(neighbour));
            }
        }

        Ok(())
    }

    /// How many times each node's task has run.
    pub fn execution_counts(&self) -> Vec<u32> {
        self.executions
            .iter()
            .map(|count| count.load(Ordering::Relaxed))
            .collect()
    }

    /// Check that every node ran exactly once.
    pub fn verify_exactly_once(&self) -> Result<()> {
        let bad: Vec<(NodeId, u32)> = self
            .execution_counts()
            .into_iter()
            .enumerate()
            .filter(|&(_, count)| count != 1)
            .collect();

        if bad.is_empty() {
            return Ok(());
        }

        Err(GraphSumError::Invariant(format!(
            "{} node(s) not executed exactly once, e.g. (node, runs) = {:?}",
            bad.len(),
            &bad[..bad.len().min(8)]
        )))
    }
}

impl TaskHandler for TraversalContext {
    fn execute(&self, task: Task, queue: &TaskQueue) -> Result<()> {
        match task {
            Task::Visit(id) => self.process_node(id, queue),
        }
    }

    fn is_complete(&self) -> bool {
        self.progress.is_complete()
    }
}
