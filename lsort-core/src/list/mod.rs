//! Arena-backed singly linked list of integers.

mod build;
mod pool;

pub use pool::{NodeId, NodePool, Values};

use crate::arch::ParallelPlan;
use crate::sort;

/// A singly linked list of integers together with its owning node pool.
#[derive(Debug, Default)]
pub struct IntList {
    pool: NodePool,
    head: Option<NodeId>,
}

impl IntList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list by prepending each value in order.
    ///
    /// Prepending means the chain ends up reversed relative to `values`.
    pub fn from_values(values: &[i32]) -> Self {
        let mut list = IntList {
            pool: NodePool::with_capacity(values.len()),
            head: None,
        };
        for &value in values {
            list.push_front(value);
        }
        list
    }

    /// Prepend a value to the chain
    pub fn push_front(&mut self, value: i32) {
        let id = self.pool.alloc(value);
        self.pool.set_next(id, self.head);
        self.head = Some(id);
    }

    /// Handle of the first node, or `None` for the empty list
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Number of nodes in the chain
    pub fn len(&self) -> usize {
        self.pool.chain_len(self.head)
    }

    /// Checks whether the chain is empty
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterate the chain's values front to back
    pub fn iter(&self) -> Values<'_> {
        self.pool.values(self.head)
    }

    /// Collect the chain's values into a vector
    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// Checks whether the chain is non-decreasing
    pub fn is_sorted(&self) -> bool {
        let mut prev = None;
        for value in self.iter() {
            if prev.map_or(false, |p| p > value) {
                return false;
            }
            prev = Some(value);
        }
        true
    }

    /// Sort the chain in place with the single-threaded driver
    pub fn sort_serial(&mut self) {
        self.head = sort::serial::sort(&mut self.pool, self.head);
    }

    /// Sort the chain in place with the depth-bounded fork-join driver
    pub fn sort_parallel(&mut self, plan: &ParallelPlan) {
        self.head = sort::parallel::sort(&mut self.pool, self.head, plan);
    }
}
