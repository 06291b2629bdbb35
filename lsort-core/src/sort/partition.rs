//! In-place partition of a linked sub-range around its last node.

use crate::list::{NodeId, NodePool};

/// Outcome of partitioning one `(head, end)` range.
#[derive(Debug, Clone, Copy)]
pub struct Partition {
    /// The pivot node; identical to the `end` the range was partitioned
    /// around
    pub pivot: NodeId,
    /// First node of the rearranged range, or the pivot itself when no
    /// value was below the pivot
    pub head: NodeId,
    /// Last node of the rearranged range
    pub tail: NodeId,
}

/// Partition the range `head..=end` around `end`'s value.
///
/// Nodes strictly below the pivot stay where they are, keeping their
/// relative order; every other node is unlinked and appended behind the
/// pivot in encounter order. Only links are rewritten; no node is created
/// or dropped, so the range keeps its length.
///
/// `end` must be reachable from `head`.
pub fn partition(pool: &mut NodePool, head: NodeId, end: NodeId) -> Partition {
    let pivot = end;
    let pivot_value = pool.value(pivot);

    let mut new_head: Option<NodeId> = None;
    let mut prev: Option<NodeId> = None;
    let mut tail = pivot;
    let mut cur = head;

    while cur != pivot {
        let next = pool.next(cur);
        if pool.value(cur) < pivot_value {
            new_head.get_or_insert(cur);
            prev = Some(cur);
        } else {
            // Unlink and append behind the growing >= chain
            if let Some(prev) = prev {
                pool.set_next(prev, next);
            }
            pool.set_next(cur, None);
            pool.set_next(tail, Some(cur));
            tail = cur;
        }
        cur = next.expect("`end` is reachable from `head`");
    }

    Partition {
        pivot,
        head: new_head.unwrap_or(pivot),
        tail,
    }
}
