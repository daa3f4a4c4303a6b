//! A mutable, unbalanced BST whose nodes live in an arena.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.add(1);
//! assert!(tree.contains(&1));
//!
//! // Adding an equal value keeps both. The second one goes right.
//! tree.add(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing takes out one of them at a time.
//! assert!(tree.remove(&1));
//! assert!(tree.contains(&1));
//! assert!(tree.remove(&1));
//! assert!(!tree.contains(&1));
//! assert!(!tree.remove(&1));
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::trace;

use crate::util::{Removal, Side, Slot};

/// A Binary Search Tree over values of type `T`. This can be used for adding, finding, and
/// removing values. It never rebalances.
///
/// Values that compare equal are all kept: a new value goes left only when it is strictly less
/// than the node it is compared against, so duplicates end up in the right subtree of the first
/// equal node on the way down. Lookups and removals stop at the first equal node they meet.
///
/// Mutation requires `&mut self` and there is no interior mutability, so sharing a tree between
/// threads needs an external lock (an `RwLock` gives one writer or many readers).
///
/// Cloning copies the node storage slot for slot, so every child index stays valid in the copy.
#[derive(Clone)]
pub struct OrderedTree<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) root: Option<Index>,
}

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<Index>,
    pub(crate) right: Option<Index>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("in_order", &self.in_order())
            .finish()
    }
}

/// Renders the in-order sequence, e.g. `TREE in order { 1, 2, 3 }`.
impl<T> fmt::Display for OrderedTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TREE in order { ")?;
        for (i, value) in self.in_order().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(" }")
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Generates a new, empty `OrderedTree` with room for `capacity` values before the node
    /// storage has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Builds a tree by adding each value in turn, in the order the iterator yields them.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from_values([2, 1, 3]);
    /// assert_eq!(tree.get_first(), Some(&2));
    ///
    /// let empty = OrderedTree::<i32>::from_values([]);
    /// assert!(empty.is_empty());
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        values.into_iter().collect()
    }

    /// How many values are stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every value.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the value stored at the root, if any. This is whichever value currently sits at
    /// the top of the tree, not the smallest one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from_values([5, 1, 9]);
    /// assert_eq!(tree.get_first(), Some(&5));
    /// assert_eq!(OrderedTree::<i32>::new().get_first(), None);
    /// ```
    pub fn get_first(&self) -> Option<&T> {
        self.root.and_then(|root| self.node(root)).map(|n| &n.value)
    }

    /// Returns the smallest value, found at the bottom of the root's left spine.
    pub fn min(&self) -> Option<&T> {
        self.root
            .map(|root| self.leftmost(root))
            .and_then(|idx| self.node(idx))
            .map(|n| &n.value)
    }

    /// Returns the largest value, found at the bottom of the root's right spine. With duplicates
    /// this is the most deeply nested of the equal largest values.
    pub fn max(&self) -> Option<&T> {
        let mut current = self.root?;
        while let Some(right) = self.node(current).and_then(|n| n.right) {
            current = right;
        }
        self.node(current).map(|n| &n.value)
    }

    /// Adds a value. It descends from the root going left when the value is less than a node and
    /// right otherwise, then hangs a new leaf in the first empty slot it reaches.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.add(2);
    /// tree.add(1);
    /// tree.add(2);
    ///
    /// assert_eq!(tree.in_order(), [&1, &2, &2]);
    /// assert_eq!(tree.pre_order(), [&2, &1, &2]);
    /// ```
    pub fn add(&mut self, value: T)
    where
        T: Ord,
    {
        let mut slot = Slot::Root;
        let mut current = self.root;
        while let Some(idx) = current {
            let Some(node) = self.node(idx) else {
                break;
            };
            let side = if value < node.value {
                Side::Left
            } else {
                Side::Right
            };
            slot = Slot::Child(idx, side);
            current = node.child(side);
        }

        let leaf = self.nodes.insert(Node::new(value));
        self.set_link(slot, Some(leaf));
        trace!(len = self.len(), "added value");
    }

    /// Returns whether a value equal to `key` is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from_values(["b".to_string(), "a".to_string()]);
    ///
    /// assert!(tree.contains("a"));
    /// assert!(!tree.contains("c"));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Returns the first stored value equal to `key` met on the way down from the root.
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key)
            .and_then(|(idx, _)| self.node(idx))
            .map(|n| &n.value)
    }

    /// Removes a value equal to `key` and returns whether there was one. When several stored
    /// values are equal to `key` the one closest to the root goes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from_values([50, 30, 70, 20, 40, 60, 80]);
    ///
    /// assert!(tree.remove(&50));
    /// assert!(!tree.remove(&50));
    /// assert_eq!(tree.get_first(), Some(&60));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes a value equal to `key` and hands it back. This is [`remove`][Self::remove] for
    /// callers who want the stored value, which may carry more than its key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from_values(["pear".to_string(), "fig".to_string()]);
    ///
    /// assert_eq!(tree.take("fig"), Some("fig".to_string()));
    /// assert_eq!(tree.take("fig"), None);
    /// ```
    pub fn take<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (target, slot) = self.find(key)?;
        self.detach(target, slot)
    }

    /// Removes whatever value sits at the root and returns whether there was one. This is not
    /// the minimum, see [`min`][Self::min] for that.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from_values([7]);
    ///
    /// assert!(tree.remove_first());
    /// assert_eq!(tree.get_first(), None);
    /// assert!(!tree.remove_first());
    /// ```
    pub fn remove_first(&mut self) -> bool {
        self.take_first().is_some()
    }

    /// Removes the root and hands its value back, re-rooting the tree the same way
    /// [`take`][Self::take] would for the root's key.
    pub fn take_first(&mut self) -> Option<T> {
        let root = self.root?;
        self.detach(root, Slot::Root)
    }

    pub(crate) fn node(&self, idx: Index) -> Option<&Node<T>> {
        self.nodes.get(idx)
    }

    /// Follows left children from `idx` until there are none. The node returned holds the
    /// smallest value of the subtree rooted at `idx`.
    pub(crate) fn leftmost(&self, mut idx: Index) -> Index {
        while let Some(left) = self.node(idx).and_then(|n| n.left) {
            idx = left;
        }
        idx
    }

    /// Descends from the root to the first node equal to `key`, returning it together with the
    /// link that points at it.
    fn find<Q>(&self, key: &Q) -> Option<(Index, Slot)>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut slot = Slot::Root;
        let mut current = self.root;
        while let Some(idx) = current {
            let node = self.node(idx)?;
            let side = match key.cmp(node.value.borrow()) {
                Ordering::Equal => return Some((idx, slot)),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            slot = Slot::Child(idx, side);
            current = node.child(side);
        }
        None
    }

    /// Points the given link at `child`.
    fn set_link(&mut self, slot: Slot, child: Option<Index>) {
        match slot {
            Slot::Root => self.root = child,
            Slot::Child(parent, side) => {
                if let Some(parent) = self.nodes.get_mut(parent) {
                    *parent.child_mut(side) = child;
                }
            }
        }
    }

    /// Unhooks `target`, which `slot` points at, and frees it.
    ///
    /// * No children: the link is cleared.
    /// * One child: the link is pointed straight at that child.
    /// * Two children: the in-order successor is moved (not copied) into the target's place.
    fn detach(&mut self, target: Index, slot: Slot) -> Option<T> {
        let (left, right) = {
            let node = self.node(target)?;
            (node.left, node.right)
        };

        let removal = match (left, right) {
            (None, None) => {
                self.set_link(slot, None);
                Removal::Leaf
            }
            (Some(child), None) => {
                self.set_link(slot, Some(child));
                Removal::Splice(Side::Left)
            }
            (None, Some(child)) => {
                self.set_link(slot, Some(child));
                Removal::Splice(Side::Right)
            }
            (Some(left), Some(right)) => {
                let (successor, direct) = self.lift_successor(left, right)?;
                self.set_link(slot, Some(successor));
                Removal::Successor { direct }
            }
        };

        let node = self.nodes.remove(target)?;
        trace!(case = ?removal, len = self.len(), "removed value");
        Some(node.value)
    }

    /// Pulls the leftmost node of the subtree at `right` out of its position and gives it the
    /// children `left` and `right` of the node it is about to replace. Returns that node and
    /// whether it was `right` itself.
    ///
    /// ```text
    ///     target                 successor
    ///     /    \                 /     \
    ///  left    right          left    right
    ///          /       ->             /
    ///        ...                    ...
    ///        /                      /
    ///   successor           successor_parent
    ///        \                    /
    ///        orphan            orphan
    /// ```
    fn lift_successor(&mut self, left: Index, right: Index) -> Option<(Index, bool)> {
        let mut successor_parent = None;
        let mut successor = right;
        while let Some(next) = self.node(successor)?.left {
            successor_parent = Some(successor);
            successor = next;
        }

        match successor_parent {
            // `right` has no left child so it keeps its own right subtree.
            None => self.nodes.get_mut(successor)?.left = Some(left),
            Some(parent) => {
                let node = self.nodes.get_mut(successor)?;
                node.left = Some(left);
                let orphan = node.right.replace(right);
                self.nodes.get_mut(parent)?.left = orphan;
            }
        }

        Some((successor, successor_parent.is_none()))
    }
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<Index> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and to a sorted `Vec` acting as a multiset.
    /// After every operation the tree must hold exactly the values in the `Vec`.
    fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, multiset: &mut Vec<T>)
    where
        T: Ord + Clone + fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Add(x) => {
                    tree.add(x.clone());
                    let pos = multiset.partition_point(|y| y <= x);
                    multiset.insert(pos, x.clone());
                }
                Op::Remove(x) => {
                    let expected = multiset.iter().position(|y| y == x);
                    assert_eq!(tree.remove(x), expected.is_some());
                    if let Some(pos) = expected {
                        multiset.remove(pos);
                    }
                }
                Op::RemoveFirst => {
                    let first = tree.get_first().cloned();
                    assert_eq!(tree.remove_first(), first.is_some());
                    if let Some(first) = first {
                        let pos = multiset.iter().position(|y| *y == first).unwrap();
                        multiset.remove(pos);
                    }
                }
                Op::Traverse => {
                    assert_eq!(tree.in_order(), multiset.iter().collect::<Vec<_>>());
                }
            }
            assert_eq!(tree.check(), Ok(()));
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = OrderedTree::new();
            let mut multiset = Vec::new();

            do_ops(&ops, &mut tree, &mut multiset);
            tree.len() == multiset.len()
                && tree.in_order() == multiset.iter().collect::<Vec<_>>()
                && multiset.iter().all(|x| tree.contains(x))
        }
    }

    quickcheck::quickcheck! {
        fn contains_iff_present(xs: Vec<i8>, probes: Vec<i8>) -> bool {
            let tree = OrderedTree::from_values(xs.iter().copied());

            probes.iter().chain(&xs).all(|x| tree.contains(x) == xs.contains(x))
        }
    }

    quickcheck::quickcheck! {
        fn add_then_remove_restores_in_order(xs: Vec<i8>, x: i8) -> bool {
            let mut tree = OrderedTree::from_values(xs.iter().copied().filter(|y| *y != x));
            let before = tree.in_order().into_iter().copied().collect::<Vec<_>>();

            tree.add(x);
            tree.remove(&x)
                && tree.in_order().into_iter().copied().collect::<Vec<_>>() == before
        }
    }
}
