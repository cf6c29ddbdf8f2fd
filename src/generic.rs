//! N-ary trees: every node keeps an ordered list of any number of children.
//!
//! # Examples
//!
//! ```
//! use canopy::{EditNode, NTree, Node, Tree};
//!
//! let mut tree = NTree::with_root("root");
//! let mut root = tree.root_mut().unwrap();
//! root.add("c1").unwrap();
//! root.add("c2").unwrap();
//! root.add("c3").unwrap();
//! root.visit_mut(0).unwrap().unwrap().add("g1").unwrap();
//!
//! assert_eq!(tree.size(), 5);
//! assert_eq!(tree.height(), Some(2));
//! assert_eq!(tree.traverse(), [&"root", &"c1", &"g1", &"c2", &"c3"]);
//! assert_eq!(tree.traverse_breadth_first(), [&"root", &"c1", &"c2", &"c3", &"g1"]);
//! ```

use std::fmt;

use crate::arena::{Arena, Links, NodeId};
use crate::error::{Result, TreeError};
use crate::node::{present, EditNode, NodeMut, NodeRef};
use crate::traverse::{Iter, Nodes, Walk};
use crate::tree::{write_values, Tree};

/// A shared handle onto a node of an [`NTree`].
pub type GenericRef<'a, T> = NodeRef<'a, GenericNode<T>>;

/// An exclusive handle onto a node of an [`NTree`].
pub type GenericMut<'a, T> = NodeMut<'a, GenericNode<T>>;

/// A node with any number of children, kept in insertion order.
#[derive(Clone, Debug)]
pub struct GenericNode<T> {
    value: T,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl<T> GenericNode<T> {
    pub(crate) fn detached(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            children: Vec::new(),
            parent,
        }
    }

    pub(crate) fn link_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}

impl<T> Links for GenericNode<T> {
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
        self.children.iter().copied()
    }

    fn slots(&self) -> Vec<Option<NodeId>> {
        self.children.iter().copied().map(Some).collect()
    }

    fn visit(&self, index: usize) -> Result<Option<NodeId>> {
        match self.children.get(index) {
            Some(&child) => Ok(Some(child)),
            None => Err(TreeError::IndexOutOfRange {
                index,
                len: self.children.len(),
            }),
        }
    }

    fn relink(&self, parent: Option<NodeId>, remap: &dyn Fn(NodeId) -> NodeId) -> Self
    where
        T: Clone,
    {
        Self {
            value: self.value.clone(),
            children: self.children.iter().copied().map(remap).collect(),
            parent,
        }
    }
}

impl<T> Arena<GenericNode<T>> {
    /// Appends a new node holding `value` to the children of `parent`.
    pub(crate) fn append(&mut self, parent: NodeId, value: T) -> NodeId {
        let child = self.push(GenericNode::detached(value, Some(parent)));
        self.get_mut(parent).link_child(child);
        self.debug_check_link(parent, child);
        log::trace!("appended child {child:?} to node {parent:?}");
        child
    }
}

impl<'a, T> NodeRef<'a, GenericNode<T>> {
    /// How many children this node has.
    pub fn child_count(self) -> usize {
        self.record().children.len()
    }

    /// The children of this node in insertion order.
    pub fn iter_children(self) -> impl Iterator<Item = Self> + 'a {
        self.record().children.iter().map(move |&id| self.at(id))
    }

    /// The values of the children of this node in insertion order.
    pub fn children_values(self) -> Vec<&'a T> {
        self.iter_children()
            .map(|child| &child.record().value)
            .collect()
    }
}

impl<'a, T> NodeMut<'a, GenericNode<T>> {
    /// The most recently added child, if there is one.
    pub fn last_child_mut(&mut self) -> Option<GenericMut<'_, T>> {
        let last = *self.arena().get(self.id()).children.last()?;
        Some(self.at(last))
    }
}

impl<'a, T> EditNode for NodeMut<'a, GenericNode<T>> {
    type Value = T;

    fn add(&mut self, value: impl Into<Option<T>>) -> Result<()> {
        let value = present(value)?;
        let id = self.id();
        self.arena_mut().append(id, value);
        Ok(())
    }

    fn update(&mut self, value: impl Into<Option<T>>) -> Result<()> {
        self.replace(value)
    }
}

/// A tree of [`GenericNode`]s. The tree owns every node; dropping it drops them all.
///
/// Its size is kept up to date on every insertion, so it always equals the number of nodes
/// reachable from the root.
#[derive(Clone, Debug)]
pub struct NTree<T> {
    arena: Arena<GenericNode<T>>,
    root: Option<NodeId>,
}

impl<T> Default for NTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NTree<T> {
    /// Generates a new, empty `NTree`.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// A tree with a single node holding `value`.
    pub fn with_root(value: T) -> Self {
        let mut arena = Arena::new();
        let root = arena.push(GenericNode::detached(value, None));
        Self {
            arena,
            root: Some(root),
        }
    }

    /// An exclusive handle onto the root node, or `None` for an empty tree.
    pub fn root_mut(&mut self) -> Option<GenericMut<'_, T>> {
        let root = self.root?;
        Some(NodeMut::new(&mut self.arena, root))
    }

    /// The values of the tree in pre-order. Each call starts a new traversal.
    pub fn iter(&self) -> Iter<'_, GenericNode<T>> {
        Iter::new(Walk::pre_order(&self.arena, self.root))
    }

    /// The nodes of the tree in pre-order.
    pub fn nodes(&self) -> Nodes<'_, GenericNode<T>> {
        Nodes::new(Walk::pre_order(&self.arena, self.root))
    }

    /// The values of the tree level by level.
    pub fn iter_breadth_first(&self) -> Iter<'_, GenericNode<T>> {
        Iter::new(Walk::breadth_first(&self.arena, self.root))
    }

    /// The nodes of the tree level by level.
    pub fn nodes_breadth_first(&self) -> Nodes<'_, GenericNode<T>> {
        Nodes::new(Walk::breadth_first(&self.arena, self.root))
    }
}

impl<T> Tree for NTree<T> {
    type Value = T;
    type Root<'a> = GenericRef<'a, T> where Self: 'a;

    fn root(&self) -> Option<GenericRef<'_, T>> {
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
impl<T: Clone> From<GenericRef<'_, T>> for NTree<T> {
    fn from(node: GenericRef<'_, T>) -> Self {
        let (arena, root) = node.arena().copy_subtree(node.id());
        Self {
            arena,
            root: Some(root),
        }
    }
}

impl<'a, T> IntoIterator for &'a NTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, GenericNode<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the values in pre-order, e.g. `[a, b, c]`.
impl<T: fmt::Display> fmt::Display for NTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_values(f, self.iter())
    }
}
