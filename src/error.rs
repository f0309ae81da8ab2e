//! Errors returned by [`Tree`](crate::Tree) queries that cannot be answered.

use thiserror::Error;

/// Result type alias using our [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a tree operation is refused. Every check happens before the tree is touched, so a
/// returned error always means the tree is unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation needs at least one key but the tree is empty.
    #[error("cannot {op} on an empty tree")]
    EmptyTree {
        /// The refused operation, e.g. `"min"`.
        op: &'static str,
    },

    /// A positional query asked for a position past the last key.
    #[error("index {index} is out of range for a tree of {len} keys")]
    IndexOutOfRange {
        /// The requested 0-based position.
        index: usize,
        /// How many keys the tree held.
        len: usize,
    },
}

impl Error {
    /// Create an empty tree error for the operation `op`.
    pub(crate) fn empty_tree(op: &'static str) -> Self {
        Error::EmptyTree { op }
    }

    /// Create an out of range error.
    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }
}
