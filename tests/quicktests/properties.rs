use sized_bst::{Error, Tree};

use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

/// The height a tree of `len` keys has right after `balance`.
fn balanced_height(len: usize) -> usize {
    let mut height = 0;
    while (1usize << height) - 1 < len {
        height += 1;
    }
    height
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let distinct: BTreeSet<_> = xs.into_iter().collect();

    let mut visited = Vec::new();
    tree.visit_sym(|k| visited.push(*k));

    visited.windows(2).all(|w| w[0] < w[1])
        && tree.len() == distinct.len()
        && visited.into_iter().eq(distinct)
}

#[quickcheck]
fn rank_inverts_nth_element(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    (0..tree.len()).all(|i| {
        tree.nth_element(i)
            .map(|key| tree.rank(key) == Some(i))
            .unwrap_or(false)
    })
}

#[quickcheck]
fn nth_element_past_the_end_fails(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let len = tree.len();

    match tree.nth_element(len) {
        Err(Error::EmptyTree { .. }) => len == 0,
        Err(Error::IndexOutOfRange { index, len: reported }) => index == len && reported == len,
        Ok(_) => false,
    }
}

#[quickcheck]
fn insert_then_delete(xs: Vec<i16>, key: i16) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();

    tree.insert(key);
    let found = tree.contains(&key);
    let removed = tree.delete(&key);

    found && removed && !tree.contains(&key)
}

#[quickcheck]
fn delete_missing_changes_nothing(xs: Vec<i16>, missing: i16) -> bool {
    let mut tree: Tree<_> = xs.into_iter().filter(|x| *x != missing).collect();
    let before: Vec<_> = tree.iter().copied().collect();

    !tree.delete(&missing) && tree.iter().copied().eq(before)
}

#[quickcheck]
fn rank_of_absent_key_is_none(xs: Vec<i16>, missing: i16) -> bool {
    let tree: Tree<_> = xs.into_iter().filter(|x| *x != missing).collect();

    tree.rank(&missing).is_none()
}

#[quickcheck]
fn balance_keeps_keys_and_minimises_height(xs: Vec<i16>) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    let before: Vec<_> = tree.iter().copied().collect();
    let len = tree.len();

    tree.balance();

    tree.len() == len
        && tree.height() == balanced_height(len)
        && tree.iter().copied().eq(before)
}

#[quickcheck]
fn sorted_input_balances(len: u8) -> bool {
    let mut tree: Tree<u32> = (0..u32::from(len)).collect();
    let chain_height = tree.height();

    tree.balance();

    chain_height == usize::from(len) && tree.height() == balanced_height(usize::from(len))
}

#[quickcheck]
fn delete_min_drains_in_order(xs: Vec<i16>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let expected: BTreeSet<_> = xs.into_iter().collect();

    let mut drained = Vec::new();
    while let Ok(min) = tree.delete_min() {
        drained.push(min);
    }

    tree.is_empty() && drained.into_iter().eq(expected)
}

#[quickcheck]
fn clone_is_independent(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let mut copy = tree.clone();
    let shape_matches = copy.display_keys() == tree.display_keys();

    copy.balance();
    while copy.delete_min().is_ok() {}

    shape_matches && copy.is_empty() && tree.iter().count() == tree.len()
}
