// src/pool/task.rs

use crate::graph::NodeId;

/// A deferred unit of work submitted to the [`TaskQueue`](super::TaskQueue).
///
/// A task owns everything it needs (just a node id); it never borrows
/// worker-local state, so it can move freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Process one node: accumulate its value and claim its neighbours.
    Visit(NodeId),
}

impl Task {
    /// The node this task operates on.
    pub fn node(&self) -> NodeId {
        match *self {
            Task::Visit(id) => id,
        }
    }
}
