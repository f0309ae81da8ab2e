//! A Binary Search Tree that keeps the size of every subtree, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! This tree adds a third one:
//!
//! 3. Every `Node` knows how many `Node`s are in the subtree rooted at it
//!    (itself included).
//!
//! The sizes make two order-statistic queries cost `O(height)` instead of
//! `O(N)`: [`Tree::nth_element`] (which key is at sorted position `n`?) and
//! [`Tree::rank`] (at which sorted position is this key?).
//!
//! ## Balance
//!
//! Nothing here rebalances on its own, so inserting keys in sorted order builds
//! a chain of height `N`. [`Tree::balance`] flattens the tree into a sorted
//! list and rebuilds it with height `⌈lg(N + 1)⌉` in `O(N)`, reusing the same
//! nodes. Call it whenever the key sequence may have been adversarial.
//!
//! # Examples
//!
//! ```
//! use sized_bst::Tree;
//!
//! let mut tree: Tree<_> = (1..=7).collect();
//! assert_eq!(tree.height(), 7);
//!
//! tree.balance();
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.nth_element(3), Ok(&4));
//! assert_eq!(tree.rank(&6), Some(5));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod display;
mod error;
mod node;
mod order;
mod rebalance;
mod tree;
mod visit;

pub use error::{Error, Result};
pub use tree::Tree;
pub use visit::Iter;
