//! This crate exposes a mutable, unbalanced Binary Search Tree (BST), mostly
//! for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and will sometimes have child `Node`s. The most important
//! invariants of this BST are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Duplicates always go right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). Nothing here
//! rebalances, so inserting already-sorted values produces a tree whose height
//! is the number of values. BSTs also naturally support sorted iteration by
//! visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Storage
//!
//! Nodes live in an arena and refer to their children by index. Deleting a node
//! with two children therefore relocates its in-order successor with a handful
//! of index writes instead of juggling owned pointers, and dropping a tree never
//! recurses no matter how deep it is.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree: OrderedTree<i32> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
//!
//! assert_eq!(tree.in_order(), [&20, &30, &40, &50, &60, &70, &80]);
//! assert_eq!(tree.pre_order(), [&50, &30, &20, &40, &70, &60, &80]);
//!
//! // 50 has two children so its in-order successor takes its place.
//! assert!(tree.remove(&50));
//! assert_eq!(tree.get_first(), Some(&60));
//! assert_eq!(tree.to_string(), "TREE in order { 20, 30, 40, 60, 70, 80 }");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod invariant;
mod ordered;
mod traversal;
mod util;

pub use error::TreeError;
pub use ordered::OrderedTree;
pub use util::Side;
