//! Depth-first walks over an [`OrderedTree`]. Each one collects a fresh `Vec` of the stored
//! values and uses an explicit stack, so a tree shaped like a long chain cannot overflow the call
//! stack.

use crate::ordered::{Node, OrderedTree};

impl<T> OrderedTree<T> {
    /// Left subtree, then the node, then the right subtree. The values come out sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from_values([50, 30, 70, 20, 40, 60, 80]);
    /// assert_eq!(tree.in_order(), [&20, &30, &40, &50, &60, &70, &80]);
    /// ```
    pub fn in_order(&self) -> Vec<&T> {
        let mut visited = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut current = self.root_node();

        loop {
            // Walk down the left spine, then visit the deepest node left on the stack.
            while let Some(node) = current {
                stack.push(node);
                current = self.left_of(node);
            }
            let Some(node) = stack.pop() else {
                return visited;
            };
            visited.push(&node.value);
            current = self.right_of(node);
        }
    }

    /// The node, then its left subtree, then its right subtree. This follows the shape the
    /// insertion order gave the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from_values([50, 30, 70, 20, 40, 60, 80]);
    /// assert_eq!(tree.pre_order(), [&50, &30, &20, &40, &70, &60, &80]);
    /// ```
    pub fn pre_order(&self) -> Vec<&T> {
        let mut visited = Vec::with_capacity(self.len());
        let mut stack: Vec<_> = self.root_node().into_iter().collect();

        while let Some(node) = stack.pop() {
            visited.push(&node.value);
            stack.extend(self.right_of(node));
            stack.extend(self.left_of(node));
        }
        visited
    }

    /// The left subtree, then the right subtree, then the node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from_values([50, 30, 70, 20, 40, 60, 80]);
    /// assert_eq!(tree.post_order(), [&20, &40, &30, &60, &80, &70, &50]);
    /// ```
    pub fn post_order(&self) -> Vec<&T> {
        // Node, right, left is exactly post-order backwards.
        let mut visited = Vec::with_capacity(self.len());
        let mut stack: Vec<_> = self.root_node().into_iter().collect();

        while let Some(node) = stack.pop() {
            visited.push(&node.value);
            stack.extend(self.left_of(node));
            stack.extend(self.right_of(node));
        }
        visited.reverse();
        visited
    }

    /// How many nodes are on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0 and a single node a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<_> = self.root_node().map(|n| (n, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(self.left_of(node).map(|n| (n, depth + 1)));
            stack.extend(self.right_of(node).map(|n| (n, depth + 1)));
        }
        height
    }

    fn root_node(&self) -> Option<&Node<T>> {
        self.root.and_then(|idx| self.node(idx))
    }

    fn left_of(&self, node: &Node<T>) -> Option<&Node<T>> {
        node.left.and_then(|idx| self.node(idx))
    }

    fn right_of(&self, node: &Node<T>) -> Option<&Node<T>> {
        node.right.and_then(|idx| self.node(idx))
    }
}
