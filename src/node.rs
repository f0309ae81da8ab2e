//! The node store shared by every tree algorithm, plus the mutating descents (insert, delete,
//! delete-min).
//!
//! Each node exclusively owns its children through a [`Link`]. The recursive helpers that can
//! change the shape of a subtree take that subtree by value and hand back its (possibly new) root,
//! so the caller just writes the result into its own child slot.

use std::cmp::Ordering;

/// An owned, possibly empty, child slot.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single key plus its two subtrees.
///
/// Fields drop in declaration order, so both subtrees are destroyed before the node's own key.
pub(crate) struct Node<K> {
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,

    /// How many nodes are in the subtree rooted at this node, itself included. A node with no
    /// children has a size of 1.
    ///
    /// While a tree is being linearized this field is briefly reused as the node's 1-based
    /// position counted from the end of the list; see [`crate::rebalance`].
    pub(crate) size: usize,

    pub(crate) key: K,
}

/// The number of nodes reachable through `link`.
pub(crate) fn size<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |n| n.size)
}

/// The number of levels below and including `link`. An empty link has a height of 0.
pub(crate) fn height<K>(link: &Link<K>) -> usize {
    match link {
        None => 0,
        Some(n) => height(&n.left).max(height(&n.right)) + 1,
    }
}

impl<K> Node<K> {
    /// Construct a new leaf holding `key`.
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
            size: 1,
        })
    }

    /// Checks the size counter and the ordering against the direct children. Only active with
    /// `debug_assertions`, and only looks one level down so it stays O(1).
    fn debug_check(&self)
    where
        K: Ord,
    {
        if cfg!(debug_assertions) {
            assert_eq!(self.size, 1 + size(&self.left) + size(&self.right));
            if let Some(left) = &self.left {
                assert!(left.key < self.key);
            }
            if let Some(right) = &self.right {
                assert!(self.key < right.key);
            }
        }
    }
}

/// Whether `key` is stored somewhere under `link`.
pub(crate) fn contains<K>(link: &Link<K>, key: &K) -> bool
where
    K: Ord,
{
    match link {
        None => false,
        Some(n) => match key.cmp(&n.key) {
            Ordering::Less => contains(&n.left, key),
            Ordering::Equal => true,
            Ordering::Greater => contains(&n.right, key),
        },
    }
}

/// The smallest key of the subtree rooted at `node`.
pub(crate) fn min<K>(node: &Node<K>) -> &K {
    match &node.left {
        Some(left) => min(left),
        None => &node.key,
    }
}

/// Inserts `key` into the subtree behind `link` and returns the subtree's root along with
/// whether a node was created. An existing equal key leaves the subtree untouched.
pub(crate) fn insert<K>(link: Link<K>, key: K) -> (Box<Node<K>>, bool)
where
    K: Ord,
{
    let Some(mut node) = link else {
        return (Node::new_boxed(key), true);
    };

    let inserted = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), key);
            node.left = Some(left);
            inserted
        }
        Ordering::Equal => false,
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), key);
            node.right = Some(right);
            inserted
        }
    };

    if inserted {
        node.size += 1;
        node.debug_check();
    }
    (node, inserted)
}

/// Detaches the node holding the smallest key of the subtree rooted at `node`.
///
/// Returns what remains of the subtree and the detached node. Every ancestor of the detached node
/// loses one from its size on the way back up. The detached node comes back as a childless leaf.
pub(crate) fn take_min<K>(mut node: Box<Node<K>>) -> (Link<K>, Box<Node<K>>)
where
    K: Ord,
{
    match node.left.take() {
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            node.size -= 1;
            node.debug_check();
            (Some(node), min)
        }
        None => {
            // The minimum's right child takes its place.
            let rest = node.right.take();
            node.size = 1;
            (rest, node)
        }
    }
}

/// Removes `key` from the subtree rooted at `node`. Returns the subtree's new root and whether a
/// node was removed. If `key` is absent the subtree comes back unchanged.
pub(crate) fn delete<K>(mut node: Box<Node<K>>, key: &K) -> (Link<K>, bool)
where
    K: Ord,
{
    let removed = match key.cmp(&node.key) {
        Ordering::Less => match node.left.take() {
            Some(left) => {
                let (left, removed) = delete(left, key);
                node.left = left;
                removed
            }
            None => false,
        },
        Ordering::Equal => return (splice_out(node), true),
        Ordering::Greater => match node.right.take() {
            Some(right) => {
                let (right, removed) = delete(right, key);
                node.right = right;
                removed
            }
            None => false,
        },
    };

    if removed {
        node.size -= 1;
        node.debug_check();
    }
    (Some(node), removed)
}

/// Drops `node` and returns whatever should take its place in its parent's slot.
///
/// With two children this is Hibbard deletion: the in-order successor (the minimum of the right
/// subtree) is detached from the right subtree and then takes over `node`'s structural position,
/// children and size included.
fn splice_out<K>(mut node: Box<Node<K>>) -> Link<K>
where
    K: Ord,
{
    node.size -= 1;
    match (node.left.take(), node.right.take()) {
        (None, right) => right,
        (left, None) => left,
        (Some(left), Some(right)) => {
            let (rest, mut successor) = take_min(right);
            successor.left = Some(left);
            successor.right = rest;
            successor.size = node.size;
            successor.debug_check();
            Some(successor)
        }
    }
}
