//! Quicksort over the arena-backed list.
//!
//! Both drivers share one partition routine and differ only in how the two
//! recursive sub-calls run: inline, or on a freshly spawned and immediately
//! joined worker thread while the recursion depth is below the plan's
//! cutoff.

pub mod parallel;
pub mod partition;
pub mod serial;

pub use partition::{partition, Partition};

use crate::list::{NodeId, NodePool};

/// Link `pivot` behind the tail of `sorted`; returns the combined head.
fn reattach_pivot(pool: &mut NodePool, sorted: Option<NodeId>, pivot: NodeId) -> NodeId {
    match sorted {
        Some(head) => {
            let tail = pool.tail_from(head);
            pool.set_next(tail, Some(pivot));
            head
        }
        None => pivot,
    }
}
