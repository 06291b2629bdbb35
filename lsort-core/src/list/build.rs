//! Parallel list construction.
//!
//! The input values are split into one contiguous range per worker; each
//! worker fills and links its own disjoint range of pool slots, then
//! splices its private chain onto the shared head. The splice is the only
//! operation that touches shared state and is guarded by a single mutex.

use std::sync::Mutex;
use std::thread;

use super::pool::{Node, NodeId, NodePool};
use super::IntList;
use crate::arch::{affinity, ParallelPlan};

/// One worker's build assignment: a range of input values and the matching
/// range of pool slots.
struct InsertTask<'a> {
    worker: usize,
    base: usize,
    values: &'a [i32],
    slots: &'a mut [Node],
}

impl InsertTask<'_> {
    fn run(self, shared_head: &Mutex<Option<NodeId>>, plan: &ParallelPlan) {
        if plan.pins_workers() {
            affinity::hint_current_thread(self.worker);
        }
        if self.values.is_empty() {
            return;
        }

        // Fill and link the private chain in array order; the last link is
        // written under the lock when the chain is spliced in.
        let last = self.values.len() - 1;
        for (offset, (&value, slot)) in self.values.iter().zip(self.slots.iter_mut()).enumerate() {
            slot.value = value;
            slot.next = (offset < last).then(|| NodeId::from_index(self.base + offset + 1));
        }

        let head = NodeId::from_index(self.base);
        let mut shared = shared_head.lock().expect("list head mutex poisoned");
        self.slots[last].next = *shared;
        *shared = Some(head);
    }
}

impl IntList {
    /// Build the list with one thread per plan worker.
    ///
    /// The chain holds exactly `values.len()` nodes with the same multiset
    /// of values; node order depends on splice timing and is unspecified.
    pub fn build_parallel(values: &[i32], plan: &ParallelPlan) -> Self {
        let workers = plan.workers().max(1);
        let mut pool = NodePool::from_nodes(vec![
            Node {
                value: 0,
                next: None,
            };
            values.len()
        ]);
        let shared_head = Mutex::new(None);

        let chunk = values.len() / workers;
        let leftover = values.len() % workers;

        thread::scope(|scope| {
            let mut slots = pool.slots_mut();
            let mut rest = values;
            let mut base = 0usize;

            for worker in 0..workers {
                let count = chunk + if worker == workers - 1 { leftover } else { 0 };
                let (task_slots, remaining_slots) = slots.split_at_mut(count);
                slots = remaining_slots;
                let (task_values, remaining_values) = rest.split_at(count);
                rest = remaining_values;

                let task = InsertTask {
                    worker,
                    base,
                    values: task_values,
                    slots: task_slots,
                };
                base += count;

                let shared_head = &shared_head;
                thread::Builder::new()
                    .name(format!("lsort-build-{worker}"))
                    .spawn_scoped(scope, move || task.run(shared_head, plan))
                    .expect("failed to spawn list build worker");
            }
        });

        let head = shared_head
            .into_inner()
            .expect("list head mutex poisoned");
        tracing::debug!(
            "Built list of {} nodes with {} workers",
            values.len(),
            workers
        );

        IntList { pool, head }
    }
}
