// tests/task_queue.rs

mod common;
use crate::common::with_timeout;

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use graphsum::pool::{Dequeue, QueueStats, Task, TaskQueue};

#[test]
fn tasks_are_served_in_push_order() {
    let queue = TaskQueue::new();
    for id in 0..5 {
        queue.push(Task::Visit(id));
    }

    let order: Vec<usize> = std::iter::from_fn(|| queue.try_pop().map(|t| t.node())).collect();
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
    assert_eq!(queue.stats(), QueueStats { pushed: 5, popped: 5 });
}

#[test]
fn try_pop_on_empty_queue_returns_none() {
    let queue = TaskQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.try_pop(), None);
    assert_eq!(queue.stats().popped, 0);
}

#[test]
fn blocking_pop_returns_queued_task() {
    let queue = TaskQueue::new();
    queue.push(Task::Visit(9));
    assert_eq!(queue.pop(), Dequeue::Task(Task::Visit(9)));
}

#[test]
fn blocked_consumer_is_woken_by_push() {
    let queue = Arc::new(TaskQueue::new());
    queue.set_consumers(2);

    let consumer = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || queue.pop())
    };

    thread::sleep(Duration::from_millis(50));
    queue.push(Task::Visit(3));

    let got = with_timeout(move || consumer.join().expect("consumer panicked"));
    assert_eq!(got, Dequeue::Task(Task::Visit(3)));
}

#[test]
fn close_wakes_every_blocked_consumer() {
    let queue = Arc::new(TaskQueue::new());
    queue.set_consumers(8);

    let consumers: Vec<_> = (0..4)
        .map(|_| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || queue.pop())
        })
        .collect();

    thread::sleep(Duration::from_millis(50));
    queue.close();
    assert!(queue.is_closed());

    let results = with_timeout(move || {
        consumers
            .into_iter()
            .map(|c| c.join().expect("consumer panicked"))
            .collect::<Vec<_>>()
    });
    assert!(results.iter().all(|r| *r == Dequeue::Closed));
}

#[test]
fn closed_queue_keeps_but_withholds_tasks() {
    let queue = TaskQueue::new();
    queue.push(Task::Visit(1));
    queue.close();

    assert_eq!(queue.pop(), Dequeue::Closed);
    assert_eq!(queue.len(), 1);
}

#[test]
fn last_idle_consumer_sees_quiescence() {
    let queue = Arc::new(TaskQueue::new());
    queue.set_consumers(2);

    let first = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || queue.pop())
    };
    thread::sleep(Duration::from_millis(50));

    // The second consumer would be the last one blocking.
    assert_eq!(queue.pop(), Dequeue::Quiescent);

    queue.close();
    let first = with_timeout(move || first.join().expect("consumer panicked"));
    assert_eq!(first, Dequeue::Closed);
}

#[test]
fn single_consumer_on_empty_queue_is_quiescent() {
    let queue = TaskQueue::new();
    queue.set_consumers(1);
    assert_eq!(queue.pop(), Dequeue::Quiescent);
}

#[test]
fn concurrent_producers_and_consumers_lose_nothing() {
    const PRODUCERS: usize = 4;
    const PER_PRODUCER: usize = 2_000;

    let queue = Arc::new(TaskQueue::new());

    let producers: Vec<_> = (0..PRODUCERS)
        .map(|p| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for i in 0..PER_PRODUCER {
                    queue.push(Task::Visit(p * PER_PRODUCER + i));
                }
            })
        })
        .collect();

    let consumers: Vec<_> = (0..4)
        .map(|_| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                let mut seen = Vec::new();
                loop {
                    match queue.pop() {
                        Dequeue::Task(task) => seen.push(task.node()),
                        Dequeue::Closed | Dequeue::Quiescent => return seen,
                    }
                }
            })
        })
        .collect();

    for p in producers {
        p.join().expect("producer panicked");
    }

    // Wait for the consumers to drain, then release them.
    let drain = Arc::clone(&queue);
    with_timeout(move || {
        while !drain.is_empty() {
            thread::sleep(Duration::from_millis(1));
        }
    });
    queue.close();

    let all = with_timeout(move || {
        consumers
            .into_iter()
            .flat_map(|c| c.join().expect("consumer panicked"))
            .collect::<Vec<_>>()
    });

    let unique: HashSet<usize> = all.iter().copied().collect();
    assert_eq!(all.len(), PRODUCERS * PER_PRODUCER);
    assert_eq!(unique.len(), PRODUCERS * PER_PRODUCER);

    let stats = queue.stats();
    assert_eq!(stats.pushed, stats.popped);
}
