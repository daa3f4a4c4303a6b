use thiserror::Error;

use crate::Side;

/// Structural problems found by [`OrderedTree::check`][crate::OrderedTree::check].
///
/// None of these can be produced through the public API with a well-behaved `Ord`
/// implementation. An inconsistent comparator is the usual way to end up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A child link names a node that no longer exists.
    #[error("{side} link at depth {depth} points at a node that does not exist")]
    DanglingLink {
        /// Which slot of the parent held the link.
        side: Side,
        /// Depth of the parent, the root being depth 0.
        depth: usize,
    },

    /// The root reference names a node that no longer exists.
    #[error("root link points at a node that does not exist")]
    DanglingRoot,

    /// The same node was reached along two different paths.
    #[error("node at depth {depth} is reachable from more than one link")]
    SharedNode {
        /// Depth at which the node was reached the second time.
        depth: usize,
    },

    /// Some stored nodes cannot be reached from the root.
    #[error("{unreachable} of {stored} stored nodes are unreachable from the root")]
    LostNodes {
        /// How many nodes are stored but unreachable.
        unreachable: usize,
        /// How many nodes are stored in total.
        stored: usize,
    },

    /// A value sits on the wrong side of one of its ancestors.
    #[error("value at depth {depth} is out of order for its position in a {side} subtree")]
    OutOfOrder {
        /// Which kind of subtree bound was broken: `Left` means the value was not strictly less
        /// than an ancestor it sits left of, `Right` means it was less than an ancestor it sits
        /// right of.
        side: Side,
        /// Depth of the misplaced node.
        depth: usize,
    },
}
