//! Order-statistic queries answered from the subtree sizes alone. Nothing here mutates the tree.

use std::cmp::Ordering;

use crate::node::{size, Link};

/// The key at 0-based ascending position `n` under `link`, or `None` when `n` is past the end.
pub(crate) fn nth<K>(link: &Link<K>, n: usize) -> Option<&K> {
    let node = link.as_deref()?;
    let left_count = size(&node.left);
    match n.cmp(&left_count) {
        Ordering::Less => nth(&node.left, n),
        Ordering::Equal => Some(&node.key),
        Ordering::Greater => nth(&node.right, n - left_count - 1),
    }
}

/// The 0-based ascending position of `key` under `link`, or `None` when `key` isn't there.
pub(crate) fn rank<K>(link: &Link<K>, key: &K) -> Option<usize>
where
    K: Ord,
{
    let node = link.as_deref()?;
    let left_count = size(&node.left);
    match key.cmp(&node.key) {
        Ordering::Less => rank(&node.left, key),
        Ordering::Equal => Some(left_count),
        // Everything on the left plus this node sits before `key`.
        Ordering::Greater => rank(&node.right, key).map(|r| r + left_count + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::insert;

    fn build(keys: &[i32]) -> Link<i32> {
        let mut root = None;
        for &key in keys {
            root = Some(insert(root, key).0);
        }
        root
    }

    #[test]
    fn nth_walks_by_left_counts() {
        let root = build(&[10, 7, 15, 2, 8]);

        assert_eq!(nth(&root, 0), Some(&2));
        assert_eq!(nth(&root, 1), Some(&7));
        assert_eq!(nth(&root, 2), Some(&8));
        assert_eq!(nth(&root, 3), Some(&10));
        assert_eq!(nth(&root, 4), Some(&15));
        assert_eq!(nth(&root, 5), None);
    }

    #[test]
    fn nth_of_empty_is_none() {
        assert_eq!(nth::<i32>(&None, 0), None);
    }

    #[test]
    fn rank_adds_left_counts_going_right() {
        let root = build(&[10, 7, 15, 2, 8, 12, 20]);

        for (position, key) in [2, 7, 8, 10, 12, 15, 20].iter().enumerate() {
            assert_eq!(rank(&root, key), Some(position));
        }
    }

    #[test]
    fn rank_of_missing_key_is_none() {
        let root = build(&[10, 7, 15, 2, 8]);

        // Misses on the far left, the far right and in between.
        assert_eq!(rank(&root, &1), None);
        assert_eq!(rank(&root, &9), None);
        assert_eq!(rank(&root, &16), None);
        assert_eq!(rank(&None, &16), None);
    }
}
