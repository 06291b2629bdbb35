//! Single-threaded recursive quicksort over a linked range.

use super::partition::partition;
use super::reattach_pivot;
use crate::list::{NodeId, NodePool};

/// Sort the chain starting at `head`; returns the new head.
pub fn sort(pool: &mut NodePool, head: Option<NodeId>) -> Option<NodeId> {
    let first = head?;
    let end = pool.tail_from(first);
    sort_range(pool, head, Some(end))
}

/// Recursive driver over an explicit `(head, end)` boundary.
///
/// An empty or one-node range is returned unchanged. Every range handed in
/// is a terminal chain: nothing follows `end`.
fn sort_range(pool: &mut NodePool, head: Option<NodeId>, end: Option<NodeId>) -> Option<NodeId> {
    let (first, last) = match (head, end) {
        (Some(first), Some(last)) if first != last => (first, last),
        _ => return head,
    };

    let part = partition(pool, first, last);
    let mut new_head = part.head;

    // Sort whatever ended up in front of the pivot, detached into its own
    // terminal chain, then hook the pivot back behind it.
    if new_head != part.pivot {
        let before = pool.node_before(new_head, part.pivot);
        pool.set_next(before, None);

        let sorted = sort_range(pool, Some(new_head), Some(before));
        new_head = reattach_pivot(pool, sorted, part.pivot);
    }

    // Sort the >= group behind the pivot and re-link it
    let right = pool.next(part.pivot);
    let sorted_right = sort_range(pool, right, Some(part.tail));
    pool.set_next(part.pivot, sorted_right);

    Some(new_head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::IntList;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sort_list(values: &[i32]) -> Vec<i32> {
        let mut list = IntList::from_values(values);
        list.sort_serial();
        assert_eq!(list.len(), values.len());
        list.to_vec()
    }

    #[test]
    fn test_sorts_small_list() {
        assert_eq!(sort_list(&[5, 3, 8, 3, 1]), vec![1, 3, 3, 5, 8]);
    }

    #[test]
    fn test_sorts_empty_list() {
        assert_eq!(sort_list(&[]), Vec::<i32>::new());
    }

    #[test]
    fn test_sorts_single_element() {
        assert_eq!(sort_list(&[42]), vec![42]);
    }

    #[test]
    fn test_sorts_all_equal() {
        assert_eq!(sort_list(&[4, 4, 4]), vec![4, 4, 4]);
    }

    #[test]
    fn test_sorts_already_sorted_input() {
        // from_values reverses, so this feeds the driver a descending chain
        assert_eq!(sort_list(&[1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5]);
        // and this an ascending one
        assert_eq!(sort_list(&[5, 4, 3, 2, 1]), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sorts_random_input() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let values: Vec<i32> = (0..500).map(|_| rng.gen_range(1000..=9999)).collect();

        let mut expected = values.clone();
        expected.sort_unstable();

        assert_eq!(sort_list(&values), expected);
    }

    #[test]
    fn test_sort_on_raw_pool() {
        let mut pool = NodePool::new();
        let ids: Vec<NodeId> = [9, 1, 5].iter().map(|&v| pool.alloc(v)).collect();
        for pair in ids.windows(2) {
            pool.set_next(pair[0], Some(pair[1]));
        }

        let head = sort(&mut pool, Some(ids[0]));
        assert_eq!(pool.values(head).collect::<Vec<_>>(), vec![1, 5, 9]);
        assert_eq!(sort(&mut pool, None), None);
    }
}
