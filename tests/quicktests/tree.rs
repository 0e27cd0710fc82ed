use ordered_tree::Tree;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and to a map counting how many
/// copies of each value should be live. This way we can ensure that after a
/// random smattering of inserts and deletes both agree.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, counts: &mut BTreeMap<T, usize>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(v.clone());
                *counts.entry(v.clone()).or_insert(0) += 1;
            }
            Op::Delete(v) => {
                if tree.delete(v).is_some() {
                    let remaining = counts.get_mut(v).expect("deleted a value never inserted");
                    *remaining -= 1;
                    if *remaining == 0 {
                        counts.remove(v);
                    }
                }
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    counts.keys().all(|v| tree.find(v) == Some(v)) && tree.validate().is_ok()
}

#[quickcheck]
fn in_order_matches_live_multiset(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    let expected: Vec<i8> = counts
        .iter()
        .flat_map(|(v, n)| std::iter::repeat(*v).take(*n))
        .collect();

    tree.iter().copied().eq(expected.iter().copied()) && tree.len() == expected.len()
}

#[quickcheck]
fn in_order_is_sorted(ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::new();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    let values: Vec<_> = tree.iter().collect();

    values.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    // Each value may have been inserted several times - delete every copy.
    for delete in &deletes {
        while tree.delete(delete).is_some() {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && tree.len() == still_present.len()
}

#[quickcheck]
fn deleting_absent_value_changes_nothing(xs: Vec<i8>, absent: i8) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().filter(|x| *x != absent).collect();
    let before = tree.to_pre_order_string();

    tree.delete(&absent).is_none() && tree.to_pre_order_string() == before
}

#[quickcheck]
fn second_delete_is_noop(xs: Vec<i8>, target: i8) -> bool {
    let mut xs = xs;
    xs.retain(|x| *x != target);
    xs.push(target);

    let mut tree: Tree<i8> = xs.into_iter().collect();
    let first = tree.delete(&target);
    let after_first = tree.to_pre_order_string();
    let second = tree.delete(&target);

    first == Some(target) && second.is_none() && tree.to_pre_order_string() == after_first
}

#[quickcheck]
fn insertion_order_does_not_change_contents(xs: Vec<i8>) -> bool {
    let forward: Tree<i8> = xs.iter().copied().collect();
    let backward: Tree<i8> = xs.iter().rev().copied().collect();

    forward.to_sorted_string() == backward.to_sorted_string()
}
