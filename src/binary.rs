//! Binary trees: every node has a left and a right slot, filled in that order.
//!
//! # Examples
//!
//! ```
//! use canopy::{BinaryTree, EditNode, Node, Tree};
//!
//! let mut tree = BinaryTree::from_parts(5, 3, 8);
//! assert_eq!(tree.size(), 3);
//! assert_eq!(tree.height(), Some(1));
//! assert_eq!(tree.traverse(), [&5, &3, &8]);
//!
//! // Grow the tree below the left child.
//! let mut root = tree.root_mut().unwrap();
//! root.left_mut().unwrap().add(1).unwrap();
//!
//! assert_eq!(tree.size(), 4);
//! assert_eq!(tree.height(), Some(2));
//! assert_eq!(tree.to_string(), "[5, 3, 1, 8]");
//! ```

use std::fmt;

use crate::arena::{Arena, Links, NodeId};
use crate::error::{Result, Slot, TreeError};
use crate::node::{present, EditNode, NodeMut, NodeRef};
use crate::traverse::{Iter, Nodes, Walk};
use crate::tree::{write_values, Tree};

/// A shared handle onto a node of a [`BinaryTree`].
pub type BinaryRef<'a, T> = NodeRef<'a, BinaryNode<T>>;

/// An exclusive handle onto a node of a [`BinaryTree`].
pub type BinaryMut<'a, T> = NodeMut<'a, BinaryNode<T>>;

/// A node with at most two children. Nodes are stored inside their [`BinaryTree`] and reached
/// through [`BinaryRef`] and [`BinaryMut`] handles.
#[derive(Clone, Debug)]
pub struct BinaryNode<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

impl<T> BinaryNode<T> {
    fn detached(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }

    pub(crate) fn slot(&self, slot: Slot) -> Option<NodeId> {
        match slot {
            Slot::Left => self.left,
            Slot::Right => self.right,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<NodeId> {
        match slot {
            Slot::Left => &mut self.left,
            Slot::Right => &mut self.right,
        }
    }
}

impl<T> Links for BinaryNode<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    fn child_ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.left.into_iter().chain(self.right)
    }

    fn slots(&self) -> Vec<Option<NodeId>> {
        vec![self.left, self.right]
    }

    fn visit(&self, index: usize) -> Result<Option<NodeId>> {
        match index {
            0 => Ok(self.left),
            1 => Ok(self.right),
            _ => Err(TreeError::IndexOutOfRange { index, len: 2 }),
        }
    }

    fn relink(&self, parent: Option<NodeId>, remap: &dyn Fn(NodeId) -> NodeId) -> Self
    where
        T: Clone,
    {
        Self {
            value: self.value.clone(),
            left: self.left.map(remap),
            right: self.right.map(remap),
            parent,
        }
    }
}

impl<T> Arena<BinaryNode<T>> {
    /// Hangs a new node holding `value` in `slot` of `parent`.
    pub(crate) fn attach(&mut self, parent: NodeId, slot: Slot, value: T) -> Result<NodeId> {
        if self.get(parent).slot(slot).is_some() {
            return Err(TreeError::NodeOccupied { slot });
        }

        let child = self.push(BinaryNode::detached(value, Some(parent)));
        *self.get_mut(parent).slot_mut(slot) = Some(child);
        self.debug_check_link(parent, child);
        log::trace!("attached {slot} child {child:?} to node {parent:?}");
        Ok(child)
    }
}

impl<'a, T> NodeRef<'a, BinaryNode<T>> {
    /// The left child, if there is one.
    pub fn left(self) -> Option<Self> {
        self.record().left.map(|id| self.at(id))
    }

    /// The right child, if there is one.
    pub fn right(self) -> Option<Self> {
        self.record().right.map(|id| self.at(id))
    }

    /// Whether the left slot is filled.
    pub fn has_left(self) -> bool {
        self.record().left.is_some()
    }

    /// Whether the right slot is filled.
    pub fn has_right(self) -> bool {
        self.record().right.is_some()
    }

    /// The values of the present children, left first.
    pub fn children_values(self) -> Vec<&'a T> {
        [self.left(), self.right()]
            .into_iter()
            .flatten()
            .map(|child| &child.record().value)
            .collect()
    }
}

impl<'a, T> NodeMut<'a, BinaryNode<T>> {
    /// Fills the left slot with a new node holding `value`.
    ///
    /// # Errors
    ///
    /// * [`TreeError::InvalidArgument`] if `value` is `None`.
    /// * [`TreeError::NodeOccupied`] if the left slot is already filled.
    pub fn set_left(&mut self, value: impl Into<Option<T>>) -> Result<()> {
        self.set(Slot::Left, value)
    }

    /// Fills the right slot with a new node holding `value`.
    ///
    /// # Errors
    ///
    /// * [`TreeError::InvalidArgument`] if `value` is `None`.
    /// * [`TreeError::NodeOccupied`] if the right slot is already filled.
    pub fn set_right(&mut self, value: impl Into<Option<T>>) -> Result<()> {
        self.set(Slot::Right, value)
    }

    /// The left child, if there is one.
    pub fn left_mut(&mut self) -> Option<BinaryMut<'_, T>> {
        let left = self.arena().get(self.id()).left?;
        Some(self.at(left))
    }

    /// The right child, if there is one.
    pub fn right_mut(&mut self) -> Option<BinaryMut<'_, T>> {
        let right = self.arena().get(self.id()).right?;
        Some(self.at(right))
    }

    fn set(&mut self, slot: Slot, value: impl Into<Option<T>>) -> Result<()> {
        let value = present(value)?;
        let id = self.id();
        self.arena_mut().attach(id, slot, value)?;
        Ok(())
    }
}

impl<'a, T> EditNode for NodeMut<'a, BinaryNode<T>> {
    type Value = T;

    fn add(&mut self, value: impl Into<Option<T>>) -> Result<()> {
        let value = present(value)?;
        let node = self.arena().get(self.id());
        let slot = match (node.left, node.right) {
            (None, _) => Slot::Left,
            (Some(_), None) => Slot::Right,
            (Some(_), Some(_)) => return Err(TreeError::NodeOccupied { slot: Slot::Right }),
        };
        let id = self.id();
        self.arena_mut().attach(id, slot, value)?;
        Ok(())
    }

    fn update(&mut self, value: impl Into<Option<T>>) -> Result<()> {
        self.replace(value)
    }
}

/// A tree of [`BinaryNode`]s. The tree owns every node; dropping it drops them all.
///
/// Its size is kept up to date on every insertion, so it always equals the number of nodes
/// reachable from the root.
#[derive(Clone, Debug)]
pub struct BinaryTree<T> {
    arena: Arena<BinaryNode<T>>,
    root: Option<NodeId>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// A tree with a single node holding `value`.
    pub fn with_root(value: T) -> Self {
        let mut arena = Arena::new();
        let root = arena.push(BinaryNode::detached(value, None));
        Self {
            arena,
            root: Some(root),
        }
    }

    /// A tree with the given root and up to two children. Absent children are left empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopy::{BinaryTree, Node, Tree};
    ///
    /// let tree = BinaryTree::from_parts(1, None, 3);
    /// let root = tree.root().unwrap();
    ///
    /// assert!(!root.has_left());
    /// assert_eq!(root.right().map(|right| *right.value()), Some(3));
    /// ```
    pub fn from_parts(root: T, left: impl Into<Option<T>>, right: impl Into<Option<T>>) -> Self {
        let mut arena = Arena::new();
        let root = arena.push(BinaryNode::detached(root, None));
        let mut node = NodeMut::new(&mut arena, root);
        // Both slots of a fresh root are empty, so the only possible error is an absent value,
        // which leaves its slot empty.
        let _ = node.set_left(left);
        let _ = node.set_right(right);
        Self {
            arena,
            root: Some(root),
        }
    }

    /// An exclusive handle onto the root node, or `None` for an empty tree.
    pub fn root_mut(&mut self) -> Option<BinaryMut<'_, T>> {
        let root = self.root?;
        Some(NodeMut::new(&mut self.arena, root))
    }

    /// The values of the tree in pre-order. Each call starts a new traversal.
    pub fn iter(&self) -> Iter<'_, BinaryNode<T>> {
        Iter::new(Walk::pre_order(&self.arena, self.root))
    }

    /// The nodes of the tree in pre-order.
    pub fn nodes(&self) -> Nodes<'_, BinaryNode<T>> {
        Nodes::new(Walk::pre_order(&self.arena, self.root))
    }

    /// The values of the tree level by level.
    pub fn iter_breadth_first(&self) -> Iter<'_, BinaryNode<T>> {
        Iter::new(Walk::breadth_first(&self.arena, self.root))
    }

    /// The nodes of the tree level by level.
    pub fn nodes_breadth_first(&self) -> Nodes<'_, BinaryNode<T>> {
        Nodes::new(Walk::breadth_first(&self.arena, self.root))
    }

    pub(crate) fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn arena_mut(&mut self) -> &mut Arena<BinaryNode<T>> {
        &mut self.arena
    }
}

impl<T> Tree for BinaryTree<T> {
    type Value = T;
    type Root<'a> = BinaryRef<'a, T> where Self: 'a;

    fn root(&self) -> Option<BinaryRef<'_, T>> {
        self.root.map(|id| NodeRef::new(&self.arena, id))
    }

    fn size(&self) -> usize {
        self.arena.len()
    }

    fn traverse(&self) -> Vec<&T> {
        self.iter().collect()
    }

    fn traverse_breadth_first(&self) -> Vec<&T> {
        self.iter_breadth_first().collect()
    }
}

/// Copies the subtree rooted at `node` into a new tree.
impl<T: Clone> From<BinaryRef<'_, T>> for BinaryTree<T> {
    fn from(node: BinaryRef<'_, T>) -> Self {
        let (arena, root) = node.arena().copy_subtree(node.id());
        Self {
            arena,
            root: Some(root),
        }
    }
}

impl<'a, T> IntoIterator for &'a BinaryTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, BinaryNode<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the values in pre-order, e.g. `[5, 3, 8]`.
impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_values(f, self.iter())
    }
}
