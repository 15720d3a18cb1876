//! Common stress tests for the blocking list.
//!
//! These tests verify concurrent correctness under high contention.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use crate::data_structures::BlockingList;

/// Test that concurrent appends of distinct values are all retained
pub fn test_concurrent_distinct_appends() {
    let list = Arc::new(BlockingList::<i32>::new());
    let num_threads = 8;
    let ops_per_thread = 250;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|t| {
            let list = Arc::clone(&list);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..ops_per_thread {
                    let value = (t * ops_per_thread + i) as i32;
                    assert!(list.add(Some(value)), "Failed to append {}", value);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let total = num_threads * ops_per_thread;
    assert_eq!(list.len(), total);
    assert!(list.verify_links(), "Chain links inconsistent after appends");

    // Every value must appear exactly once, in some interleaving.
    let mut values = list.to_vec();
    values.sort_unstable();
    let expected: Vec<i32> = (0..total as i32).collect();
    assert_eq!(values, expected);
}

/// Test balanced append and remove_value leaving the list empty
pub fn test_append_then_remove_leaves_empty() {
    let list = Arc::new(BlockingList::<i32>::new());
    let num_threads = 8;
    let ops_per_thread = 200;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|t| {
            let list = Arc::clone(&list);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..ops_per_thread {
                    let value = (t * ops_per_thread + i) as i32;
                    assert!(list.add(Some(value)));
                    assert!(
                        list.remove_value(Some(&value)),
                        "Failed to remove {} just appended",
                        value
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert!(list.verify_links());
}

/// Test concurrent removal of the same value - exactly one should succeed
pub fn test_concurrent_remove_same_value() {
    let list = Arc::new(BlockingList::<i32>::new());
    let num_threads = 64;
    let test_value = 42;

    list.add(Some(test_value));

    let success_count = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let list = Arc::clone(&list);
            let success = Arc::clone(&success_count);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                if list.remove_value(Some(&test_value)) {
                    success.fetch_add(1, Ordering::Relaxed);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(
        success_count.load(Ordering::Relaxed),
        1,
        "Exactly one thread should successfully remove the value"
    );
    assert!(!list.contains(&test_value), "Value should be gone");
    assert_eq!(list.len(), 0);
}

/// Test that snapshots taken while sorters run always see a complete state
pub fn test_sort_against_snapshots() {
    let element_count = 400usize;
    let list = Arc::new(BlockingList::<i32>::new());
    for i in 0..element_count as i32 {
        list.add(Some(i));
    }

    let num_sorters = 4;
    let num_readers = 8;
    let barrier = Arc::new(Barrier::new(num_sorters + num_readers));

    let mut handles = vec![];

    for s in 0..num_sorters {
        let list = Arc::clone(&list);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for _ in 0..10 {
                if s % 2 == 0 {
                    list.sort(|a, b| a.cmp(b));
                } else {
                    list.sort(|a, b| b.cmp(a));
                }
            }
        }));
    }

    for _ in 0..num_readers {
        let list = Arc::clone(&list);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for _ in 0..50 {
                // Each snapshot must be a full permutation of the seed,
                // never a half-sorted view missing or doubling elements.
                let mut snapshot: Vec<i32> = list.iter().collect();
                assert_eq!(snapshot.len(), element_count);
                snapshot.sort_unstable();
                let expected: Vec<i32> = (0..element_count as i32).collect();
                assert_eq!(snapshot, expected);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(list.len(), element_count);
    assert!(list.verify_links());
}

/// Test linearizability - operations appear to take effect atomically
pub fn test_linearizability() {
    let list = Arc::new(BlockingList::<i32>::new());
    let num_threads = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4);
    let num_ops = 500;

    let handles: Vec<_> = (0..num_threads)
        .map(|t| {
            let list = Arc::clone(&list);
            thread::spawn(move || {
                for i in 0..num_ops {
                    let key = (t * num_ops + i) as i32;

                    assert!(list.add(Some(key)), "Failed to append unique key {}", key);
                    assert!(list.contains(&key), "Key {} not found after append", key);
                    assert!(
                        list.remove_value(Some(&key)),
                        "Failed to remove existing key {}",
                        key
                    );
                    assert!(!list.contains(&key), "Key {} found after removal", key);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    println!(
        "Linearizability test completed with {} threads x {} ops",
        num_threads, num_ops
    );
    assert!(list.is_empty());
}

/// Test the lock-free length counter under append-only load
pub fn test_len_without_lock_under_appends() {
    let list = Arc::new(BlockingList::<i32>::new());
    let num_writers = 4;
    let ops_per_thread = 500;
    let barrier = Arc::new(Barrier::new(num_writers + 1));

    let mut handles = vec![];

    for t in 0..num_writers {
        let list = Arc::clone(&list);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for i in 0..ops_per_thread {
                list.add(Some((t * ops_per_thread + i) as i32));
            }
        }));
    }

    let observer = {
        let list = Arc::clone(&list);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            let total = num_writers * ops_per_thread;
            let mut previous = 0;
            while previous < total {
                let current = list.len();
                // Append-only load: the observed length never moves backwards.
                assert!(
                    current >= previous,
                    "Length went backwards: {} after {}",
                    current,
                    previous
                );
                previous = current;
            }
        })
    };

    for handle in handles {
        handle.join().unwrap();
    }
    observer.join().unwrap();

    assert_eq!(list.len(), num_writers * ops_per_thread);
    assert!(list.verify_links());
}

/// Test that a snapshot iterator is detached from later mutations
pub fn test_snapshot_iterator_is_detached() {
    let list = BlockingList::<i32>::new();
    for i in 0..100 {
        list.add(Some(i));
    }

    let snapshot = list.iter();
    list.clear();
    assert!(list.is_empty());

    let collected: Vec<i32> = snapshot.collect();
    assert_eq!(collected, (0..100).collect::<Vec<i32>>());
}
