//! The contract shared by every tree, and [`Subtree`], a borrowed view rooted at any node.

use std::fmt;

use crate::arena::Links;
use crate::node::{Node, NodeRef};
use crate::traverse::{Iter, Nodes, Walk};

/// The capabilities every tree offers, whatever the shape of its nodes.
pub trait Tree {
    /// The type of value stored in the tree.
    type Value;
    /// The handle type of the tree's root node.
    type Root<'a>: Node<'a, Value = Self::Value>
    where
        Self: 'a;

    /// The root node, or `None` for an empty tree.
    fn root(&self) -> Option<Self::Root<'_>>;

    /// The number of nodes reachable from the root, counting the root itself.
    fn size(&self) -> usize;

    /// Whether the tree has no nodes at all.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The number of edges between the root and the deepest leaf. An empty tree has no height.
    fn height(&self) -> Option<usize> {
        self.root().map(|root| root.height())
    }

    /// The values of the tree in pre-order: a node, then each of its children's subtrees in
    /// stored order.
    fn traverse(&self) -> Vec<&Self::Value>;

    /// The values of the tree level by level, each node exactly once.
    fn traverse_breadth_first(&self) -> Vec<&Self::Value>;
}

/// A tree view rooted at some node of another tree. Its size and height always reflect the
/// current structure.
pub struct Subtree<'a, N> {
    root: NodeRef<'a, N>,
}

impl<'a, N> Clone for Subtree<'a, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, N> Copy for Subtree<'a, N> {}

impl<'a, N: Links> Subtree<'a, N> {
    pub(crate) fn new(root: NodeRef<'a, N>) -> Self {
        Self { root }
    }

    /// The values of this subtree in pre-order.
    pub fn iter(&self) -> Iter<'a, N> {
        Iter::new(self.walk_pre_order())
    }

    /// The nodes of this subtree in pre-order.
    pub fn nodes(&self) -> Nodes<'a, N> {
        Nodes::new(self.walk_pre_order())
    }

    /// The values of this subtree level by level.
    pub fn iter_breadth_first(&self) -> Iter<'a, N> {
        Iter::new(Walk::breadth_first(self.root.arena(), Some(self.root.id())))
    }

    fn walk_pre_order(&self) -> Walk<'a, N> {
        Walk::pre_order(self.root.arena(), Some(self.root.id()))
    }
}

impl<'s, N: Links> Tree for Subtree<'s, N> {
    type Value = N::Value;
    type Root<'a> = NodeRef<'a, N> where Self: 'a;

    fn root(&self) -> Option<NodeRef<'_, N>> {
        Some(self.root)
    }

    fn size(&self) -> usize {
        self.root.arena().size(self.root.id())
    }

    fn traverse(&self) -> Vec<&N::Value> {
        self.iter().collect()
    }

    fn traverse_breadth_first(&self) -> Vec<&N::Value> {
        self.iter_breadth_first().collect()
    }
}

impl<'a, N> fmt::Debug for Subtree<'a, N>
where
    N: Links,
    N::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, N> fmt::Display for Subtree<'a, N>
where
    N: Links,
    N::Value: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_values(f, self.iter())
    }
}

/// Writes `values` as `[a, b, c]`.
pub(crate) fn write_values<'a, V>(
    f: &mut fmt::Formatter<'_>,
    values: impl Iterator<Item = &'a V>,
) -> fmt::Result
where
    V: fmt::Display + 'a,
{
    f.write_str("[")?;
    for (position, value) in values.enumerate() {
        if position > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{value}")?;
    }
    f.write_str("]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BinaryTree, EditNode, NTree};

    #[test]
    fn subtrees_are_rooted_at_their_node() {
        let mut tree = NTree::with_root(1);
        let mut root = tree.root_mut().unwrap();
        root.add(2).unwrap();
        root.add(3).unwrap();
        root.visit_mut(0).unwrap().unwrap().add(4).unwrap();

        let two = tree.root().unwrap().visit(0).unwrap().unwrap();
        let subtree = two.subtree();
        assert_eq!(subtree.size(), 2);
        assert_eq!(subtree.height(), Some(1));
        assert_eq!(subtree.traverse(), [&2, &4]);
        assert_eq!(subtree.root(), Some(two));

        // The parent link still leads out of the view.
        assert_eq!(two.parent(), tree.root());
    }

    #[test]
    fn display_and_debug() {
        let tree = BinaryTree::from_parts(5, 3, 8);
        let subtree = tree.root().unwrap().subtree();
        assert_eq!(subtree.to_string(), "[5, 3, 8]");
        assert_eq!(format!("{subtree:?}"), "[5, 3, 8]");

        let leaf = tree.root().unwrap().visit(1).unwrap().unwrap().subtree();
        assert_eq!(leaf.to_string(), "[8]");
    }

    #[test]
    fn default_height_and_emptiness() {
        let tree = BinaryTree::<u8>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), None);

        let tree = BinaryTree::with_root(0u8);
        assert!(!tree.is_empty());
        assert_eq!(tree.height(), Some(0));
    }
}
