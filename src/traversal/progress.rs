// src/traversal/progress.rs

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Decides whether every node has been processed.
///
/// Backed by a single atomic counter compared against the fixed node count,
/// so it can be polled after every task without taking a lock.
#[derive(Debug)]
pub struct TerminationDetector {
    processed: AtomicUsize,
    target: usize,
}

impl TerminationDetector {
    pub fn new(target: usize) -> Self {
        Self {
            processed: AtomicUsize::new(0),
            target,
        }
    }

    /// `processed == target`. Once true, stays true.
    pub fn is_complete(&self) -> bool {
        self.processed.load(Ordering::Acquire) >= self.target
    }

    pub fn processed(&self) -> usize {
        self.processed.load(Ordering::Acquire)
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Must only be called from inside the progress critical section.
    fn advance(&self) -> usize {
        self.processed.fetch_add(1, Ordering::AcqRel) + 1
    }
}

/// Running sum and processed count, updated as one step.
///
/// The value is added and the detector advanced inside the same critical
/// section, so a detector that reads `processed == N` is never ahead of the
/// sum.
#[derive(Debug)]
pub struct ProgressCounters {
    sum: Mutex<i64>,
    detector: TerminationDetector,
}

impl ProgressCounters {
    pub fn new(node_count: usize) -> Self {
        Self {
            sum: Mutex::new(0),
            detector: TerminationDetector::new(node_count),
        }
    }

    /// Account for one processed node. Returns the new processed count.
    pub fn record(&self, value: i64) -> usize {
        let mut sum = self.sum.lock().unwrap_or_else(PoisonError::into_inner);
        *sum = sum.wrapping_add(value);
        self.detector.advance()
    }

    pub fn sum(&self) -> i64 {
        *self.sum.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn processed(&self) -> usize {
        self.detector.processed()
    }

    pub fn detector(&self) -> &TerminationDetector {
        &self.detector
    }

    pub fn is_complete(&self) -> bool {
        self.detector.is_complete()
    }
}
