//! Handles onto the nodes of a tree and the contract every node shape shares.
//!
//! Nodes live inside the tree that owns them, so they are reached through handles:
//!
//! * [`NodeRef`] borrows the tree immutably. It is `Copy` and can be kept around, compared, and
//!   navigated in every direction, including up to its parent.
//! * [`NodeMut`] borrows the tree mutably. It is what values are added and updated through.
//!
//! The shapes ([`BinaryNode`][crate::BinaryNode], [`GenericNode`][crate::GenericNode]) add
//! methods of their own on top of the shared contract, e.g. `left`/`right` for binary nodes.

use std::fmt;
use std::ptr;

use crate::arena::{Arena, Links, NodeId};
use crate::error::{Result, TreeError, ABSENT_VALUE};
use crate::tree::{Subtree, Tree};

/// The read side of the contract shared by every node shape.
pub trait Node<'a>: Copy {
    /// The type of value stored in the node.
    type Value: 'a;
    /// The view returned by [`Node::subtree`].
    type Subtree: Tree<Value = Self::Value>;

    /// The stored value.
    fn value(self) -> &'a Self::Value;

    /// The node this one is a child of, or `None` for a root.
    fn parent(self) -> Option<Self>;

    /// Every child position in order. Binary nodes always report both slots, either of which may
    /// be empty. Generic nodes report one filled position per child.
    fn children(self) -> Vec<Option<Self>>;

    /// Navigates to the child at `index`.
    ///
    /// # Errors
    ///
    /// [`TreeError::IndexOutOfRange`] when the node has no position `index`: anything but `0` or
    /// `1` for binary nodes, anything past the last child for generic nodes.
    fn visit(self, index: usize) -> Result<Option<Self>>;

    /// Whether at least one child is present.
    fn has_children(self) -> bool;

    /// The number of edges on the longest path down to a leaf. A leaf has height `0`.
    fn height(self) -> usize;

    /// The number of nodes in the subtree rooted here, including this one.
    fn size(self) -> usize {
        self.subtree().size()
    }

    /// A tree view rooted at this node.
    fn subtree(self) -> Self::Subtree;
}

/// The write side of the contract shared by every node shape.
///
/// Values are taken as `impl Into<Option<_>>`: a plain value is always accepted, while `None`
/// stands for an absent value and is rejected before anything changes.
pub trait EditNode {
    /// The type of value stored in the node.
    type Value;

    /// Attaches a new child holding `value`. Binary nodes fill the left slot, then the right one;
    /// generic nodes append to the end of their children.
    ///
    /// # Errors
    ///
    /// * [`TreeError::InvalidArgument`] if `value` is `None`.
    /// * [`TreeError::NodeOccupied`] naming the right slot if a binary node is already full.
    fn add(&mut self, value: impl Into<Option<Self::Value>>) -> Result<()>;

    /// Replaces the stored value. Children are untouched.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`] if `value` is `None`.
    fn update(&mut self, value: impl Into<Option<Self::Value>>) -> Result<()>;
}

/// A shared handle onto one node of a tree.
pub struct NodeRef<'a, N> {
    arena: &'a Arena<N>,
    id: NodeId,
}

impl<'a, N> Clone for NodeRef<'a, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, N> Copy for NodeRef<'a, N> {}

/// Two handles are equal when they point at the same node of the same tree.
impl<'a, N> PartialEq for NodeRef<'a, N> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}

impl<'a, N> Eq for NodeRef<'a, N> {}

impl<'a, N> fmt::Debug for NodeRef<'a, N>
where
    N: Links,
    N::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", self.record().value())
            .finish()
    }
}

impl<'a, N> NodeRef<'a, N> {
    pub(crate) fn new(arena: &'a Arena<N>, id: NodeId) -> Self {
        Self { arena, id }
    }

    pub(crate) fn id(self) -> NodeId {
        self.id
    }

    pub(crate) fn arena(self) -> &'a Arena<N> {
        self.arena
    }

    /// A handle onto another node of the same tree.
    pub(crate) fn at(self, id: NodeId) -> Self {
        Self::new(self.arena, id)
    }

    pub(crate) fn record(self) -> &'a N {
        self.arena.get(self.id)
    }
}

impl<'a, N: Links> Node<'a> for NodeRef<'a, N> {
    type Value = N::Value;
    type Subtree = Subtree<'a, N>;

    fn value(self) -> &'a N::Value {
        self.record().value()
    }

    fn parent(self) -> Option<Self> {
        self.record().parent().map(|id| self.at(id))
    }

    fn children(self) -> Vec<Option<Self>> {
        self.record()
            .slots()
            .into_iter()
            .map(|slot| slot.map(|id| self.at(id)))
            .collect()
    }

    fn visit(self, index: usize) -> Result<Option<Self>> {
        Ok(self.record().visit(index)?.map(|id| self.at(id)))
    }

    fn has_children(self) -> bool {
        self.record().child_ids().next().is_some()
    }

    fn height(self) -> usize {
        self.arena.height(self.id)
    }

    fn subtree(self) -> Subtree<'a, N> {
        Subtree::new(self)
    }
}

/// An exclusive handle onto one node of a tree, used to grow the tree and change its values.
pub struct NodeMut<'a, N> {
    arena: &'a mut Arena<N>,
    id: NodeId,
}

impl<'a, N> fmt::Debug for NodeMut<'a, N>
where
    N: Links,
    N::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeMut")
            .field("id", &self.id)
            .field("value", self.arena.get(self.id).value())
            .finish()
    }
}

impl<'a, N> NodeMut<'a, N> {
    pub(crate) fn new(arena: &'a mut Arena<N>, id: NodeId) -> Self {
        Self { arena, id }
    }

    pub(crate) fn id(&self) -> NodeId {
        self.id
    }

    pub(crate) fn arena(&self) -> &Arena<N> {
        &*self.arena
    }

    pub(crate) fn arena_mut(&mut self) -> &mut Arena<N> {
        &mut *self.arena
    }

    /// A mutable handle onto another node of the same tree, reborrowing this one.
    pub(crate) fn at(&mut self, id: NodeId) -> NodeMut<'_, N> {
        NodeMut::new(&mut *self.arena, id)
    }
}

impl<'a, N: Links> NodeMut<'a, N> {
    /// A shared handle onto the same node.
    pub fn as_node(&self) -> NodeRef<'_, N> {
        NodeRef::new(&*self.arena, self.id)
    }

    /// The stored value.
    pub fn value(&self) -> &N::Value {
        self.arena.get(self.id).value()
    }

    /// The stored value, mutably. See also [`EditNode::update`].
    pub fn value_mut(&mut self) -> &mut N::Value {
        self.arena.get_mut(self.id).value_mut()
    }

    /// The parent of this node, or `None` for a root.
    pub fn parent_mut(&mut self) -> Option<NodeMut<'_, N>> {
        let parent = self.arena.get(self.id).parent()?;
        Some(self.at(parent))
    }

    /// Navigates to the child at `index`. The rules are the same as [`Node::visit`].
    ///
    /// # Errors
    ///
    /// [`TreeError::IndexOutOfRange`] when the node has no position `index`.
    pub fn visit_mut(&mut self, index: usize) -> Result<Option<NodeMut<'_, N>>> {
        match self.arena.get(self.id).visit(index)? {
            Some(child) => Ok(Some(self.at(child))),
            None => Ok(None),
        }
    }

    /// Shared by every shape's [`EditNode::update`].
    pub(crate) fn replace(&mut self, value: impl Into<Option<N::Value>>) -> Result<()> {
        let value = present(value)?;
        *self.value_mut() = value;
        log::trace!("updated the value of node {:?}", self.id);
        Ok(())
    }
}

/// Unwraps an `add`/`set_*` argument, rejecting an absent value.
pub(crate) fn present<T>(value: impl Into<Option<T>>) -> Result<T> {
    value
        .into()
        .ok_or(TreeError::InvalidArgument(ABSENT_VALUE))
}
