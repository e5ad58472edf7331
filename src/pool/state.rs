// src/pool/state.rs

//! Pool lifecycle state machine.
//!
//! ```text
//! Running --(first stop request)--> Stopping --(all workers joined)--> Stopped
//! ```
//!
//! `Running -> Stopping` is a single compare-and-set, so exactly one thread
//! wins it no matter how many observe the stop condition at once.

use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PoolState {
    Running = 0,
    Stopping = 1,
    Stopped = 2,
}

impl PoolState {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => PoolState::Running,
            1 => PoolState::Stopping,
            _ => PoolState::Stopped,
        }
    }
}

/// Why the pool left `Running`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The handler reported that all work is done.
    Completed,
    /// Every worker went idle on an empty queue but the handler never
    /// reported completion.
    Stalled,
    /// A task failed, a worker panicked, or the pool could not be started.
    Aborted(String),
}

/// Atomic holder for a [`PoolState`].
#[derive(Debug)]
pub(crate) struct AtomicPoolState(AtomicU8);

impl AtomicPoolState {
    pub(crate) fn new() -> Self {
        Self(AtomicU8::new(PoolState::Running as u8))
    }

    pub(crate) fn load(&self) -> PoolState {
        PoolState::from_u8(self.0.load(Ordering::Acquire))
    }

    /// Attempt `Running -> Stopping`. Returns true only for the winner.
    pub(crate) fn begin_stopping(&self) -> bool {
        self.0
            .compare_exchange(
                PoolState::Running as u8,
                PoolState::Stopping as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Terminal transition, performed once every worker has been joined.
    pub(crate) fn mark_stopped(&self) {
        self.0.store(PoolState::Stopped as u8, Ordering::Release);
    }
}
