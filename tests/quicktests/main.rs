use quickcheck::{Arbitrary, Gen};

mod ordered;

/// Mutations applied to a tree and to a reference model side by side.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Add the T to the tree
    Add(T),
    /// Remove one value equal to T from the tree
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Add(T::arbitrary(g))
        } else {
            Op::Remove(T::arbitrary(g))
        }
    }
}
