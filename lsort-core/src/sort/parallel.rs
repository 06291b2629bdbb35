//! Depth-bounded fork-join quicksort over a linked range.
//!
//! The recursion mirrors the serial driver; while the depth is below the
//! plan's cutoff, each sub-range is handed to a freshly spawned thread
//! that is joined before the caller proceeds, so the thread count is
//! bounded by recursion depth rather than sub-range size. A failed spawn
//! degrades that one sub-call to synchronous execution.

use std::panic;
use std::thread;

use super::partition::partition;
use super::reattach_pivot;
use crate::arch::{affinity, ParallelPlan};
use crate::list::{NodeId, NodePool};

/// Boundary pair plus recursion depth: the unit of work handed to a
/// spawned thread.
#[derive(Debug, Clone, Copy)]
struct SortTask {
    head: Option<NodeId>,
    end: Option<NodeId>,
    depth: usize,
}

/// Sort the chain starting at `head`; returns the new head.
pub fn sort(pool: &mut NodePool, head: Option<NodeId>, plan: &ParallelPlan) -> Option<NodeId> {
    let first = head?;
    let end = pool.tail_from(first);
    let task = SortTask {
        head,
        end: Some(end),
        depth: 0,
    };
    sort_range(pool, task, plan)
}

fn sort_range(pool: &mut NodePool, task: SortTask, plan: &ParallelPlan) -> Option<NodeId> {
    let (first, last) = match (task.head, task.end) {
        (Some(first), Some(last)) if first != last => (first, last),
        _ => return task.head,
    };

    let part = partition(pool, first, last);
    let mut new_head = part.head;

    if new_head != part.pivot {
        let before = pool.node_before(new_head, part.pivot);
        pool.set_next(before, None);

        let left = SortTask {
            head: Some(new_head),
            end: Some(before),
            depth: task.depth + 1,
        };
        let sorted = run_subtask(pool, left, task.depth, plan);
        new_head = reattach_pivot(pool, sorted, part.pivot);
    }

    let right = SortTask {
        head: pool.next(part.pivot),
        end: Some(part.tail),
        depth: task.depth + 1,
    };
    let sorted_right = run_subtask(pool, right, task.depth, plan);
    pool.set_next(part.pivot, sorted_right);

    Some(new_head)
}

/// Execute one sub-range: on a fresh, immediately joined thread while the
/// parent depth is below the cutoff, otherwise inline. A spawn failure
/// degrades this one call to inline execution.
fn run_subtask(
    pool: &mut NodePool,
    task: SortTask,
    parent_depth: usize,
    plan: &ParallelPlan,
) -> Option<NodeId> {
    if parent_depth < plan.max_spawn_depth() {
        match offload(pool, task, plan) {
            Ok(sorted) => return sorted,
            Err(err) => {
                tracing::warn!(
                    "Failed to spawn sort worker at depth {}, sorting inline: {}",
                    task.depth,
                    err
                );
            }
        }
    }
    sort_range(pool, task, plan)
}

/// Spawn a worker thread for `task` and block until it hands the sorted
/// head back. The pool borrow moves into the worker, so the caller cannot
/// touch the sublist before the join returns it.
fn offload(
    pool: &mut NodePool,
    task: SortTask,
    plan: &ParallelPlan,
) -> std::io::Result<Option<NodeId>> {
    thread::scope(|scope| {
        let worker = thread::Builder::new()
            .name(format!("lsort-sort-{}", task.depth))
            .spawn_scoped(scope, move || {
                if plan.pins_workers() {
                    affinity::hint_current_thread(task.depth % plan.workers());
                }
                sort_range(pool, task, plan)
            })?;

        Ok(worker
            .join()
            .unwrap_or_else(|payload| panic::resume_unwind(payload)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::CpuInfo;
    use crate::list::IntList;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn test_plan() -> ParallelPlan {
        ParallelPlan::for_cpu(&CpuInfo::mock(4)).unpinned()
    }

    fn sort_list(values: &[i32], plan: &ParallelPlan) -> Vec<i32> {
        let mut list = IntList::from_values(values);
        list.sort_parallel(plan);
        assert_eq!(list.len(), values.len());
        list.to_vec()
    }

    #[test]
    fn test_sorts_small_list() {
        assert_eq!(sort_list(&[5, 3, 8, 3, 1], &test_plan()), vec![1, 3, 3, 5, 8]);
    }

    #[test]
    fn test_sorts_empty_list() {
        assert_eq!(sort_list(&[], &test_plan()), Vec::<i32>::new());
    }

    #[test]
    fn test_sorts_all_equal() {
        assert_eq!(sort_list(&[4, 4, 4], &test_plan()), vec![4, 4, 4]);
    }

    #[test]
    fn test_matches_serial_driver() {
        let mut rng = StdRng::seed_from_u64(0xdeca);
        let values: Vec<i32> = (0..300).map(|_| rng.gen_range(1000..=9999)).collect();

        let mut serial = IntList::from_values(&values);
        serial.sort_serial();

        // Same partition routine, so the full sequences match, ties included
        assert_eq!(sort_list(&values, &test_plan()), serial.to_vec());
    }

    #[test]
    fn test_zero_cutoff_runs_inline() {
        // The same code path a spawn failure degrades to
        let plan = test_plan().with_max_spawn_depth(0);
        let mut rng = StdRng::seed_from_u64(7);
        let values: Vec<i32> = (0..100).map(|_| rng.gen_range(1000..=9999)).collect();

        let mut expected = values.clone();
        expected.sort_unstable();

        assert_eq!(sort_list(&values, &plan), expected);
    }

    #[test]
    fn test_deep_cutoff_on_short_list() {
        // More spawn levels than the list can use
        let plan = test_plan().with_max_spawn_depth(16);
        assert_eq!(sort_list(&[2, 1, 3], &plan), vec![1, 2, 3]);
    }

    #[test]
    fn test_sorts_built_parallel_list() {
        let plan = test_plan();
        let mut rng = StdRng::seed_from_u64(99);
        let values: Vec<i32> = (0..250).map(|_| rng.gen_range(1000..=9999)).collect();

        let mut expected = values.clone();
        expected.sort_unstable();

        let mut list = IntList::build_parallel(&values, &plan);
        list.sort_parallel(&plan);
        assert!(list.is_sorted());
        assert_eq!(list.to_vec(), expected);
    }
}
