use std::collections::HashSet;

use generational_arena::Index;
use tracing::debug;

use crate::{OrderedTree, Side, TreeError};

/// A node waiting to be checked, with the bounds its ancestors put on it. `lower` is inclusive
/// (set by ancestors it sits right of) and `upper` exclusive (set by ancestors it sits left of).
struct Frame<'a, T> {
    index: Index,
    depth: usize,
    lower: Option<&'a T>,
    upper: Option<&'a T>,
}

impl<T: Ord> OrderedTree<T> {
    /// Walks the whole tree and verifies its structure:
    ///
    /// * every link points at a stored node,
    /// * no node is reachable along two paths,
    /// * every stored node is reachable from the root,
    /// * every value is less than the ancestors it sits left of and no less than the ancestors it
    ///   sits right of.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from_values([50, 30, 70, 20, 40, 60, 80]);
    /// tree.remove(&50);
    ///
    /// assert_eq!(tree.check(), Ok(()));
    /// ```
    pub fn check(&self) -> Result<(), TreeError> {
        let result = self.walk_checked();
        if let Err(err) = &result {
            debug!(%err, len = self.len(), "tree failed structural check");
        }
        result
    }

    fn walk_checked(&self) -> Result<(), TreeError> {
        let stored = self.nodes.len();
        let Some(root) = self.root else {
            return match stored {
                0 => Ok(()),
                _ => Err(TreeError::LostNodes {
                    unreachable: stored,
                    stored,
                }),
            };
        };
        if !self.nodes.contains(root) {
            return Err(TreeError::DanglingRoot);
        }

        let mut seen = HashSet::with_capacity(stored);
        let mut stack = vec![Frame {
            index: root,
            depth: 0,
            lower: None,
            upper: None,
        }];

        while let Some(frame) = stack.pop() {
            let depth = frame.depth;
            if !seen.insert(frame.index) {
                return Err(TreeError::SharedNode { depth });
            }
            // Children are only pushed once they are known to exist.
            let Some(node) = self.node(frame.index) else {
                return Err(TreeError::DanglingRoot);
            };

            if frame.upper.is_some_and(|upper| node.value >= *upper) {
                return Err(TreeError::OutOfOrder {
                    side: Side::Left,
                    depth,
                });
            }
            if frame.lower.is_some_and(|lower| node.value < *lower) {
                return Err(TreeError::OutOfOrder {
                    side: Side::Right,
                    depth,
                });
            }

            for side in [Side::Left, Side::Right] {
                let Some(child) = node.child(side) else {
                    continue;
                };
                if !self.nodes.contains(child) {
                    return Err(TreeError::DanglingLink { side, depth });
                }
                let (lower, upper) = match side {
                    Side::Left => (frame.lower, Some(&node.value)),
                    Side::Right => (Some(&node.value), frame.upper),
                };
                stack.push(Frame {
                    index: child,
                    depth: depth + 1,
                    lower,
                    upper,
                });
            }
        }

        match stored - seen.len() {
            0 => Ok(()),
            unreachable => Err(TreeError::LostNodes {
                unreachable,
                stored,
            }),
        }
    }
}
