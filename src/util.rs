use std::fmt;

use generational_arena::Index;

/// One of the two child slots of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The slot holding values less than the parent.
    Left,
    /// The slot holding values greater than or equal to the parent.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// The link that points at a node: either the tree's root reference or one of a parent's child
/// slots. Deletion rewrites whichever link this names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Root,
    Child(Index, Side),
}

/// Which shape of deletion was performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Removal {
    /// The node had no children and was simply detached.
    Leaf,
    /// The node had a single child on the given side which took its place.
    Splice(Side),
    /// The node had two children. `direct` is set when the successor was the right child itself
    /// rather than somewhere down its left spine.
    Successor { direct: bool },
}
