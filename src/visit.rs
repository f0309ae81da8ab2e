//! Depth-first visitation of every key.

use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// Calls `f` on each key, parent before children.
pub(crate) fn pre_order<K, F>(link: &Link<K>, f: &mut F)
where
    F: FnMut(&K) + ?Sized,
{
    if let Some(n) = link {
        f(&n.key);
        pre_order(&n.left, f);
        pre_order(&n.right, f);
    }
}

/// Calls `f` on each key in ascending order.
pub(crate) fn in_order<K, F>(link: &Link<K>, f: &mut F)
where
    F: FnMut(&K) + ?Sized,
{
    if let Some(n) = link {
        in_order(&n.left, f);
        f(&n.key);
        in_order(&n.right, f);
    }
}

/// Calls `f` on each key, children before parent.
pub(crate) fn post_order<K, F>(link: &Link<K>, f: &mut F)
where
    F: FnMut(&K) + ?Sized,
{
    if let Some(n) = link {
        post_order(&n.left, f);
        post_order(&n.right, f);
        f(&n.key);
    }
}

/// An iterator over the keys of a [`Tree`](crate::Tree) in ascending order.
///
/// Created by [`Tree::iter`](crate::Tree::iter). Holds at most one pending node per level.
pub struct Iter<'a, K> {
    /// Nodes whose key hasn't been yielded yet; their left subtrees are already done.
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: &'a Link<K>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut cursor: Option<&'a Node<K>>) {
        while let Some(node) = cursor {
            self.stack.push(node);
            cursor = node.left.as_deref();
        }
    }
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}
