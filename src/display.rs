//! Human-readable rendering of a tree, level by level.
//!
//! Each level of the tree is one line. Present nodes print a field (their key or their size)
//! followed by a space; absent children print `- `. For the tree built from `10, 7, 15, 2, 8` the
//! key levels are:
//!
//! ```text
//! 10
//! 7 15
//! 2 8 - -
//! - - - -
//! ```
//!
//! (every line also carries a trailing space).

use std::fmt::{self, Display, Write};

use crate::node::{Link, Node};

/// The narrowest a column of the [`table`] can be.
const MIN_COLUMN_WIDTH: usize = 11;

/// Writes one line per tree level, rendering each present node with `field`.
pub(crate) fn levels<K, W, F>(root: &Link<K>, out: &mut W, field: F) -> fmt::Result
where
    W: Write,
    F: Fn(&mut W, &Node<K>) -> fmt::Result,
{
    let mut level = vec![root.as_deref()];
    while !level.is_empty() {
        let mut next = Vec::with_capacity(level.len() * 2);
        for slot in level {
            match slot {
                None => out.write_str("- ")?,
                Some(node) => {
                    field(out, node)?;
                    out.write_char(' ')?;
                    next.push(node.left.as_deref());
                    next.push(node.right.as_deref());
                }
            }
        }
        out.write_char('\n')?;
        level = next;
    }
    Ok(())
}

/// Renders the levels of `root` as a two column table of keys and subtree sizes.
pub(crate) fn table<K>(root: &Link<K>, out: &mut fmt::Formatter<'_>) -> fmt::Result
where
    K: Display,
{
    let mut keys = String::new();
    levels(root, &mut keys, |out, n| write!(out, "{}", n.key))?;
    let mut sizes = String::new();
    levels(root, &mut sizes, |out, n| write!(out, "{}", n.size))?;

    let width = keys
        .lines()
        .map(str::len)
        .max()
        .unwrap_or(0)
        .max(MIN_COLUMN_WIDTH);

    rule(out, width)?;
    writeln!(out, "| {:<w$}| {:<w$}|", "key", "size", w = width)?;
    rule(out, width)?;
    for (key_line, size_line) in keys.lines().zip(sizes.lines()) {
        writeln!(out, "| {:<w$}| {:<w$}|", key_line, size_line, w = width)?;
    }
    rule(out, width)
}

fn rule(out: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result {
    writeln!(out, "+-{0:-<w$}+-{0:-<w$}+", "", w = width)
}
