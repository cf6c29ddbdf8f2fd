//! Iterators over the nodes of a tree.
//!
//! Both orders are driven by an explicit frontier instead of recursion so arbitrarily deep (for
//! example, a search tree built from sorted input) trees can be walked without growing the call
//! stack:
//!
//! * pre-order keeps a stack and pushes each visited node's children in reverse so that the
//!   first child is popped next.
//! * breadth-first keeps a FIFO queue and enqueues each *dequeued* node's children in stored
//!   order.
//!
//! Every reachable node is produced exactly once. Iterators are lazy and each call that creates
//! one starts again from the root.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::arena::{Arena, Links, NodeId};
use crate::node::NodeRef;

enum Frontier {
    Stack(Vec<NodeId>),
    Queue(VecDeque<NodeId>),
}

/// Walks node ids in one of the two orders.
pub struct Walk<'a, N> {
    arena: &'a Arena<N>,
    frontier: Frontier,
}

impl<'a, N> Walk<'a, N> {
    /// Starts a pre-order walk. With no root nothing is produced.
    pub fn pre_order(arena: &'a Arena<N>, root: Option<NodeId>) -> Self {
        Self {
            arena,
            frontier: Frontier::Stack(root.into_iter().collect()),
        }
    }

    /// Starts a breadth-first walk. With no root nothing is produced.
    pub fn breadth_first(arena: &'a Arena<N>, root: Option<NodeId>) -> Self {
        Self {
            arena,
            frontier: Frontier::Queue(root.into_iter().collect()),
        }
    }
}

impl<'a, N: Links> Iterator for Walk<'a, N> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.frontier {
            Frontier::Stack(stack) => {
                let id = stack.pop()?;
                stack.extend(self.arena.get(id).child_ids().rev());
                Some(id)
            }
            Frontier::Queue(queue) => {
                let id = queue.pop_front()?;
                queue.extend(self.arena.get(id).child_ids());
                Some(id)
            }
        }
    }
}

impl<'a, N: Links> FusedIterator for Walk<'a, N> {}

/// An iterator over the values of a tree, in pre-order or level by level depending on the
/// method that created it.
pub struct Iter<'a, N> {
    walk: Walk<'a, N>,
}

impl<'a, N> Iter<'a, N> {
    pub(crate) fn new(walk: Walk<'a, N>) -> Self {
        Self { walk }
    }
}

impl<'a, N: Links> Iterator for Iter<'a, N> {
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.walk.arena;
        self.walk.next().map(|id| arena.get(id).value())
    }
}

impl<'a, N: Links> FusedIterator for Iter<'a, N> {}

/// An iterator over the nodes of a tree, in the same orders as [`Iter`]. The yielded handles
/// refer to the tree's own nodes so they can navigate to their parents and children.
pub struct Nodes<'a, N> {
    walk: Walk<'a, N>,
}

impl<'a, N> Nodes<'a, N> {
    pub(crate) fn new(walk: Walk<'a, N>) -> Self {
        Self { walk }
    }
}

impl<'a, N: Links> Iterator for Nodes<'a, N> {
    type Item = NodeRef<'a, N>;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.walk.arena;
        self.walk.next().map(|id| NodeRef::new(arena, id))
    }
}

impl<'a, N: Links> FusedIterator for Nodes<'a, N> {}
