// src/traversal/tracker.rs

use std::sync::atomic::{AtomicBool, Ordering};

use crate::graph::NodeId;

/// One claim flag per node.
///
/// Flags are independent atomics, so workers claiming different nodes never
/// contend with each other.
#[derive(Debug)]
pub struct VisitationTracker {
    visited: Vec<AtomicBool>,
}

impl VisitationTracker {
    pub fn new(node_count: usize) -> Self {
        Self {
            visited: (0..node_count).map(|_| AtomicBool::new(false)).collect(),
        }
    }

    /// Flip the node's flag from unclaimed to claimed.
    ///
    /// Returns true for exactly one caller per node; only that caller may
    /// create a task for it. Unknown ids are never claimable.
    pub fn try_claim(&self, id: NodeId) -> bool {
        self.visited.get(id).is_some_and(|flag| {
            flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
        })
    }

    pub fn is_claimed(&self, id: NodeId) -> bool {
        self.visited
            .get(id)
            .is_some_and(|flag| flag.load(Ordering::Acquire))
    }

    pub fn claimed_count(&self) -> usize {
        self.visited
            .iter()
            .filter(|flag| flag.load(Ordering::Acquire))
            .count()
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}
