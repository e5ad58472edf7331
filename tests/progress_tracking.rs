// tests/progress_tracking.rs

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use graphsum::traversal::{ProgressCounters, TerminationDetector, VisitationTracker};

#[test]
fn claim_succeeds_exactly_once() {
    let tracker = VisitationTracker::new(3);

    assert!(tracker.try_claim(1));
    assert!(!tracker.try_claim(1));
    assert!(tracker.is_claimed(1));
    assert!(!tracker.is_claimed(0));
    assert_eq!(tracker.claimed_count(), 1);
}

#[test]
fn unknown_nodes_are_never_claimed() {
    let tracker = VisitationTracker::new(2);
    assert!(!tracker.try_claim(2));
    assert!(!tracker.is_claimed(2));
}

#[test]
fn racing_claims_have_one_winner_per_node() {
    const NODES: usize = 1_000;
    let tracker = Arc::new(VisitationTracker::new(NODES));
    let wins = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let tracker = Arc::clone(&tracker);
            let wins = Arc::clone(&wins);
            thread::spawn(move || {
                for id in 0..NODES {
                    if tracker.try_claim(id) {
                        wins.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })
        })
        .collect();

    for h in handles {
        h.join().expect("claimer panicked");
    }

    assert_eq!(wins.load(Ordering::Relaxed), NODES);
    assert_eq!(tracker.claimed_count(), NODES);
}

#[test]
fn detector_completes_at_target() {
    let progress = ProgressCounters::new(3);
    assert!(!progress.is_complete());

    assert_eq!(progress.record(5), 1);
    assert_eq!(progress.record(-2), 2);
    assert!(!progress.is_complete());
    assert_eq!(progress.record(10), 3);

    assert!(progress.is_complete());
    assert_eq!(progress.sum(), 13);
    assert_eq!(progress.detector().target(), 3);
}

#[test]
fn empty_target_is_complete_immediately() {
    assert!(TerminationDetector::new(0).is_complete());
}

#[test]
fn completion_stays_true_and_sum_is_whole_once_observed() {
    const WRITERS: usize = 8;
    const PER_WRITER: usize = 5_000;
    let total = WRITERS * PER_WRITER;

    let progress = Arc::new(ProgressCounters::new(total));
    let done = Arc::new(AtomicBool::new(false));

    let watcher = {
        let progress = Arc::clone(&progress);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut seen_complete = false;
            while !done.load(Ordering::Acquire) {
                let complete = progress.is_complete();
                assert!(!(seen_complete && !complete), "completion went back to false");
                if complete && !seen_complete {
                    seen_complete = true;
                    assert_eq!(progress.sum(), total as i64);
                }
            }
            seen_complete || progress.is_complete()
        })
    };

    let writers: Vec<_> = (0..WRITERS)
        .map(|_| {
            let progress = Arc::clone(&progress);
            thread::spawn(move || {
                for _ in 0..PER_WRITER {
                    progress.record(1);
                }
            })
        })
        .collect();

    for w in writers {
        w.join().expect("writer panicked");
    }
    done.store(true, Ordering::Release);

    assert!(watcher.join().expect("watcher panicked"));
    assert_eq!(progress.processed(), total);
    assert_eq!(progress.sum(), total as i64);
}
