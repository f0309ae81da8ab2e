//! Rebalancing by linearization and arborization.
//!
//! Both steps reuse the existing nodes. A *list* here is a chain of nodes whose `left` links are
//! all empty and whose `right` links act as "next", in ascending key order. Such a list is also a
//! valid (fully degenerate) tree: [`linearize`] writes into each node's `size` the number of nodes
//! from that node to the end of the list, which is exactly its subtree size in the chain.
//!
//! ```text
//!        4                 1 -> 2 -> 3 -> 4 -> 5 -> 6          3
//!      /   \    linearize  (sizes 6, 5, 4, 3, 2, 1)  arborize /   \
//!     2     5   -------->                           -------> 1     5
//!    / \     \                                                \   / \
//!   1   3     6                                                2 4   6
//! ```

use crate::node::{size, Link};

/// Flattens the tree behind `root` into an ascending list and returns the list's head (the node
/// holding the smallest key). Runs in O(n) and allocates nothing.
pub(crate) fn linearize<K>(root: Link<K>) -> Link<K> {
    let mut list = None;
    let mut count = 0;
    prepend_reversed(root, &mut list, &mut count);
    tracing::trace!(len = count, "linearized tree");
    list
}

/// Walks `tree` right subtree first, pushing every node onto the front of `list`. So the largest
/// key ends up last and the smallest ends up at the head.
///
/// `count` is the number of nodes already in `list`. Each node gets its new 1-based position from
/// the end of the list as its `size`, which is also its size as a node of the chain.
fn prepend_reversed<K>(tree: Link<K>, list: &mut Link<K>, count: &mut usize) {
    let Some(mut node) = tree else {
        return;
    };

    prepend_reversed(node.right.take(), list, count);

    let left = node.left.take();
    node.right = list.take();
    *count += 1;
    node.size = *count;
    *list = Some(node);

    prepend_reversed(left, list, count);
}

/// Builds a tree from the first `count` nodes of `list` and returns its root. `list` is advanced
/// past every node consumed.
///
/// The left subtree gets `(count - 1) / 2` nodes and the right subtree `count / 2`, so at every
/// level the two children's sizes differ by at most one and the height is `⌈log2(count + 1)⌉`.
///
/// # Panics
///
/// When `list` holds fewer than `count` nodes.
pub(crate) fn arborize<K>(list: &mut Link<K>, count: usize) -> Link<K> {
    let tree = build_prefix(list, count);
    tracing::trace!(len = count, "arborized list prefix");
    tree
}

fn build_prefix<K>(list: &mut Link<K>, count: usize) -> Link<K> {
    if count == 0 {
        return None;
    }

    let left = build_prefix(list, (count - 1) / 2);

    let mut root = list.take().expect("list shorter than requested count");
    *list = root.right.take();
    root.left = left;
    root.size = count;
    root.right = build_prefix(list, count / 2);

    Some(root)
}

/// Rebuilds the tree behind `root` into one of minimal height, reusing every node.
pub(crate) fn balance<K>(root: Link<K>) -> Link<K> {
    let count = size(&root);
    let mut list = linearize(root);
    let balanced = arborize(&mut list, count);
    debug_assert!(list.is_none());
    tracing::trace!(
        len = count,
        height = balanced_height(count),
        "rebuilt balanced tree"
    );
    balanced
}

/// The height [`arborize`] produces for `count` nodes, i.e. `⌈log2(count + 1)⌉`.
pub(crate) fn balanced_height(count: usize) -> usize {
    (usize::BITS - count.leading_zeros()) as usize
}
