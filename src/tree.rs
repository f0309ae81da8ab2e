//! The public [`Tree`] type.
//!
//! # Examples
//!
//! ```
//! use sized_bst::Tree;
//!
//! let mut tree: Tree<i32> = [10, 7, 15, 2, 8].into_iter().collect();
//!
//! // Keys come back in order and each position is one O(height) query away.
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [2, 7, 8, 10, 15]);
//! assert_eq!(tree.nth_element(2), Ok(&8));
//! assert_eq!(tree.rank(&8), Some(2));
//!
//! // Inserting an existing key is a no-op.
//! assert!(!tree.insert(7));
//! assert_eq!(tree.len(), 5);
//!
//! assert!(tree.delete(&10));
//! assert_eq!(tree.rank(&15), Some(3));
//! ```

use std::fmt::{self, Write as _};

use crate::error::{Error, Result};
use crate::node::{self, Link};
use crate::visit::Iter;
use crate::{display, order, rebalance, visit};

/// A binary search tree of unique keys that knows the size of every subtree.
///
/// The tree never rebalances itself. Inserting keys in sorted order produces a chain whose height
/// equals its length. Call [`balance`](Tree::balance) to rebuild it into a tree of minimal height
/// in linear time. Every recursive operation uses stack proportional to the current height.
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts `key` and returns whether it was added. If an equal key is already present the tree
    /// is left untouched and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let (root, inserted) = node::insert(self.root.take(), key);
        self.root = Some(root);
        inserted
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        node::contains(&self.root, key)
    }

    /// The smallest key in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree has no keys.
    pub fn min(&self) -> Result<&K> {
        match self.root.as_deref() {
            Some(root) => Ok(node::min(root)),
            None => Err(refused(Error::empty_tree("min"))),
        }
    }

    /// Removes the smallest key from the tree and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree has no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::{Error, Tree};
    ///
    /// let mut tree: Tree<_> = [10, 7, 15, 2, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.delete_min(), Ok(2));
    /// assert!(!tree.contains(&2));
    /// assert_eq!(tree.len(), 4);
    ///
    /// let mut empty = Tree::<i32>::new();
    /// assert!(matches!(empty.delete_min(), Err(Error::EmptyTree { .. })));
    /// ```
    pub fn delete_min(&mut self) -> Result<K>
    where
        K: Ord,
    {
        let root = self
            .root
            .take()
            .ok_or_else(|| refused(Error::empty_tree("delete_min")))?;
        let (rest, min) = node::take_min(root);
        self.root = rest;
        Ok(min.key)
    }

    /// Removes `key` from the tree and returns whether it was there. A two-child node is replaced
    /// by its in-order successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 2, 1, 3, 4, 7, 6].into_iter().collect();
    ///
    /// assert!(tree.delete(&5));
    /// assert!(!tree.delete(&5));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 6, 7]);
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let Some(root) = self.root.take() else {
            return false;
        };
        let (root, removed) = node::delete(root, key);
        self.root = root;
        removed
    }

    /// The number of keys in the tree. O(1).
    pub fn len(&self) -> usize {
        node::size(&self.root)
    }

    /// Whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in the tree; 0 when empty. This walks the whole tree.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// The key at 0-based position `n` in ascending order.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree has no keys and [`Error::IndexOutOfRange`] if
    /// `n >= self.len()`.
    pub fn nth_element(&self, n: usize) -> Result<&K> {
        let len = self.len();
        if len == 0 {
            return Err(refused(Error::empty_tree("nth_element")));
        }
        if n >= len {
            return Err(refused(Error::index_out_of_range(n, len)));
        }
        order::nth(&self.root, n).ok_or_else(|| refused(Error::index_out_of_range(n, len)))
    }

    /// The 0-based position `key` holds in ascending order, or `None` if it isn't in the tree.
    pub fn rank(&self, key: &K) -> Option<usize>
    where
        K: Ord,
    {
        order::rank(&self.root, key)
    }

    /// Turns the tree into a chain in which no node has a left child, reusing the existing nodes.
    ///
    /// The result is still a valid tree (every operation keeps working), just maximally
    /// unbalanced. It is mostly useful to observe the first half of [`balance`](Tree::balance).
    pub fn linearize(&mut self) {
        self.root = rebalance::linearize(self.root.take());
    }

    /// Rebuilds the tree so its height is `⌈log2(len + 1)⌉`. O(n) time, no allocation, keys and
    /// their order are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sized_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    /// assert_eq!(tree.height(), 7);
    ///
    /// tree.balance();
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn balance(&mut self) {
        self.root = rebalance::balance(self.root.take());
    }

    /// Calls `f` on every key, each node before its subtrees.
    pub fn visit_pre<F>(&self, mut f: F)
    where
        F: FnMut(&K),
    {
        visit::pre_order(&self.root, &mut f);
    }

    /// Calls `f` on every key in ascending order.
    pub fn visit_sym<F>(&self, mut f: F)
    where
        F: FnMut(&K),
    {
        visit::in_order(&self.root, &mut f);
    }

    /// Calls `f` on every key, each node after its subtrees.
    pub fn visit_post<F>(&self, mut f: F)
    where
        F: FnMut(&K),
    {
        visit::post_order(&self.root, &mut f);
    }

    /// An iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root, self.len())
    }

    /// Exchanges the contents of two trees without touching any node.
    pub fn swap(&mut self, other: &mut Tree<K>) {
        std::mem::swap(&mut self.root, &mut other.root);
    }

    /// The keys level by level, one line per level, `-` marking an absent child.
    pub fn display_keys(&self) -> String
    where
        K: fmt::Display,
    {
        let mut out = String::new();
        display::levels(&self.root, &mut out, |out, n| write!(out, "{}", n.key))
            .expect("writing to a String cannot fail");
        out
    }

    /// The subtree sizes laid out like [`display_keys`](Tree::display_keys).
    pub fn display_counts(&self) -> String {
        let mut out = String::new();
        display::levels(&self.root, &mut out, |out, n| write!(out, "{}", n.size))
            .expect("writing to a String cannot fail");
        out
    }
}

/// Logs a refused operation before handing its error back.
fn refused(err: Error) -> Error {
    tracing::debug!(%err, "tree operation refused");
    err
}

/// Copies by re-inserting every key in pre-order, which reproduces the source's shape.
impl<K> Clone for Tree<K>
where
    K: Clone + Ord,
{
    fn clone(&self) -> Self {
        let mut tree = Tree::new();
        self.visit_pre(|key| {
            tree.insert(key.clone());
        });
        tree
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// A table of every level's keys next to their subtree sizes.
impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::table(&self.root, f)
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
