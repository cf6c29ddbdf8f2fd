//! Node storage shared by both tree shapes.
//!
//! Every owned tree keeps its nodes in a single `Vec` and links them together by index. A child
//! is owned by the arena (and therefore by the tree), while the link back to its parent is just
//! another index, so a parent and its children never own each other. Nodes are never removed,
//! which means every record in an arena is reachable from the root and the arena's length is the
//! size of the tree.

use std::collections::HashMap;

use crate::error::Result;
use crate::traverse::Walk;

/// The position of a node inside the arena of the tree that created it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// The link structure a node record exposes to the shape-agnostic algorithms.
pub trait Links {
    /// The type of value stored in the node.
    type Value;

    /// The stored value.
    fn value(&self) -> &Self::Value;

    /// The stored value, mutably. Children are unaffected by writes through this.
    fn value_mut(&mut self) -> &mut Self::Value;

    /// The node this one hangs from, if it isn't a root.
    fn parent(&self) -> Option<NodeId>;

    /// The present children, in stored order.
    fn child_ids(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_;

    /// Every child position, including empty ones.
    fn slots(&self) -> Vec<Option<NodeId>>;

    /// The child at `index`. An in-range position may still be empty for shapes with fixed
    /// slots.
    fn visit(&self, index: usize) -> Result<Option<NodeId>>;

    /// A copy of this node whose parent and child links have been rewritten.
    fn relink(&self, parent: Option<NodeId>, remap: &dyn Fn(NodeId) -> NodeId) -> Self
    where
        Self: Sized,
        Self::Value: Clone;
}

/// An append-only store of nodes.
#[derive(Clone, Debug)]
pub struct Arena<N> {
    nodes: Vec<N>,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    /// Generates a new, empty `Arena`.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// How many nodes have been stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Stores `node` and returns its id.
    pub fn push(&mut self, node: N) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Ids are only ever minted by `push` on the arena they index, so this can't go out of
    /// bounds.
    pub fn get(&self, id: NodeId) -> &N {
        &self.nodes[id.0]
    }

    /// See [`Arena::get`].
    pub fn get_mut(&mut self, id: NodeId) -> &mut N {
        &mut self.nodes[id.0]
    }
}

impl<N: Links> Arena<N> {
    /// The number of edges between `id` and its deepest descendant.
    pub fn height(&self, id: NodeId) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(id, 0)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(self.get(id).child_ids().map(|child| (child, depth + 1)));
        }

        deepest
    }

    /// The number of nodes in the subtree rooted at `id`, counting `id` itself.
    pub fn size(&self, id: NodeId) -> usize {
        self.pre_order(id).count()
    }

    /// Walks the subtree rooted at `id` in pre-order.
    pub fn pre_order(&self, id: NodeId) -> Walk<'_, N> {
        Walk::pre_order(self, Some(id))
    }

    /// Copies the subtree rooted at `id` into a fresh arena where it becomes the root. Returns
    /// the new arena along with the id of that root.
    pub fn copy_subtree(&self, id: NodeId) -> (Arena<N>, NodeId)
    where
        N::Value: Clone,
    {
        let order: Vec<NodeId> = self.pre_order(id).collect();
        let positions: HashMap<NodeId, NodeId> = order
            .iter()
            .enumerate()
            .map(|(position, &old)| (old, NodeId(position)))
            .collect();
        // Every link inside the subtree points at another node of the subtree.
        let remap = |old: NodeId| positions[&old];

        let mut copy = Arena::new();
        for (position, &old) in order.iter().enumerate() {
            let node = self.get(old);
            let parent = if position == 0 {
                None
            } else {
                node.parent().map(remap)
            };
            copy.push(node.relink(parent, &remap));
        }

        (copy, NodeId(0))
    }

    /// In debug builds, checks that `child` and `parent` agree about being linked.
    pub fn debug_check_link(&self, parent: NodeId, child: NodeId) {
        if cfg!(debug_assertions) {
            assert_eq!(self.get(child).parent(), Some(parent));
            assert!(self.get(parent).child_ids().any(|id| id == child));
        }
    }
}
