use ordered_tree::OrderedTree;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and to a map of value counts.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same multiset of values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, counts: &mut BTreeMap<T, usize>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Add(x) => {
                tree.add(x.clone());
                *counts.entry(x.clone()).or_default() += 1;
            }
            Op::Remove(x) => {
                let removed = tree.remove(x);
                let expected = match counts.get(x).copied() {
                    Some(1) => counts.remove(x).is_some(),
                    Some(n) => {
                        counts.insert(x.clone(), n - 1);
                        true
                    }
                    None => false,
                };
                assert_eq!(removed, expected);
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = OrderedTree::new();
        let mut counts = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut counts);
        let expected: Vec<_> = counts
            .iter()
            .flat_map(|(x, n)| std::iter::repeat(x).take(*n))
            .collect();

        tree.in_order() == expected && tree.check().is_ok()
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = OrderedTree::from_values(xs.iter().copied());

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = OrderedTree::from_values(xs.iter().copied());
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = OrderedTree::from_values(xs.iter().copied());
        // We may have added the same value multiple times - delete each one.
        for delete in &deletes {
            while tree.remove(delete) {}
        }

        let still_present: Vec<_> = xs.iter().filter(|x| !deletes.contains(*x)).collect();

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(*x))
            && tree.len() == still_present.len()
    }
}

quickcheck::quickcheck! {
    fn absent_remove_changes_nothing(xs: Vec<i8>, key: i8) -> bool {
        let mut tree = OrderedTree::from_values(xs.iter().copied().filter(|x| *x != key));
        let snapshot = |tree: &OrderedTree<i8>| {
            [tree.pre_order(), tree.in_order(), tree.post_order()]
                .map(|order| order.into_iter().copied().collect::<Vec<_>>())
        };
        let before = snapshot(&tree);

        !tree.remove(&key) && snapshot(&tree) == before
    }
}

quickcheck::quickcheck! {
    fn remove_keeps_order(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = OrderedTree::from_values(xs.iter().copied());
        for delete in &deletes {
            tree.remove(delete);
        }
        let in_order = tree.in_order();

        in_order.windows(2).all(|pair| pair[0] <= pair[1]) && tree.check().is_ok()
    }
}
