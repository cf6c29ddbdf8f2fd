//! A binary search tree built once from a sequence of values.
//!
//! The first value becomes the root. Every later value descends from the root, going left when
//! it is less than or equal to the value of the node it meets and right otherwise, until it
//! finds an empty slot to fill. Duplicates therefore always end up in a left subtree. No
//! balancing is done, so the shape of the tree depends entirely on the order of the input.
//!
//! # Examples
//!
//! ```
//! use canopy::{BinarySearchTree, Node, Tree};
//!
//! let tree = BinarySearchTree::from_values([5, 3, 8, 1, 4, 9]).unwrap();
//! let root = tree.root().unwrap();
//!
//! assert_eq!(*root.value(), 5);
//! assert_eq!(root.left().unwrap().children_values(), [&1, &4]);
//! assert_eq!(tree.height(), Some(2));
//!
//! // There's nothing to put at the root of an empty tree.
//! assert!(BinarySearchTree::<i32>::from_values([]).is_err());
//! ```

use std::fmt;

use crate::arena::Links;
use crate::binary::{BinaryNode, BinaryRef, BinaryTree};
use crate::error::{Result, Slot, TreeError};
use crate::traverse::{Iter, Nodes};
use crate::tree::Tree;

const EMPTY_SEQUENCE: &str = "a search tree needs at least one value";

/// A [`BinaryTree`] whose nodes satisfy the search ordering: everything in a node's left subtree
/// is less than or equal to it, everything in its right subtree is greater.
///
/// Only shared access to the underlying tree is handed out, so the ordering can't be broken
/// after construction.
#[derive(Clone, Debug)]
pub struct BinarySearchTree<T> {
    tree: BinaryTree<T>,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Builds a tree by inserting `values` in order.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`] if `values` is empty.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut values = values.into_iter();
        let first = values
            .next()
            .ok_or(TreeError::InvalidArgument(EMPTY_SEQUENCE))?;

        let mut search = Self {
            tree: BinaryTree::with_root(first),
        };
        for value in values {
            search.insert(value)?;
        }

        log::debug!(
            "built a search tree of {} values with height {:?}",
            search.size(),
            search.height()
        );
        Ok(search)
    }

    fn insert(&mut self, value: T) -> Result<()> {
        let Some(mut current) = self.tree.root_id() else {
            self.tree = BinaryTree::with_root(value);
            return Ok(());
        };
        let arena = self.tree.arena_mut();

        loop {
            let node = arena.get(current);
            let slot = if value <= *node.value() {
                Slot::Left
            } else {
                Slot::Right
            };

            match node.slot(slot) {
                Some(child) => current = child,
                None => {
                    let child = arena.attach(current, slot, value)?;

                    // In debug builds, check that the new node is ordered against its parent.
                    if cfg!(debug_assertions) {
                        let parent = arena.get(current).value();
                        let child = arena.get(child).value();
                        match slot {
                            Slot::Left => assert!(child <= parent),
                            Slot::Right => assert!(child > parent),
                        }
                    }
                    return Ok(());
                }
            }
        }
    }
}

impl<T> BinarySearchTree<T> {
    /// The underlying binary tree.
    pub fn as_tree(&self) -> &BinaryTree<T> {
        &self.tree
    }

    /// Gives up the ordering guarantee and returns the underlying binary tree.
    pub fn into_inner(self) -> BinaryTree<T> {
        self.tree
    }

    /// The values of the tree in pre-order.
    pub fn iter(&self) -> Iter<'_, BinaryNode<T>> {
        self.tree.iter()
    }

    /// The nodes of the tree in pre-order.
    pub fn nodes(&self) -> Nodes<'_, BinaryNode<T>> {
        self.tree.nodes()
    }

    /// The values of the tree level by level.
    pub fn iter_breadth_first(&self) -> Iter<'_, BinaryNode<T>> {
        self.tree.iter_breadth_first()
    }
}

impl<T> Tree for BinarySearchTree<T> {
    type Value = T;
    type Root<'a> = BinaryRef<'a, T> where Self: 'a;

    fn root(&self) -> Option<BinaryRef<'_, T>> {
        self.tree.root()
    }

    fn size(&self) -> usize {
        self.tree.size()
    }

    fn traverse(&self) -> Vec<&T> {
        self.tree.traverse()
    }

    fn traverse_breadth_first(&self) -> Vec<&T> {
        self.tree.traverse_breadth_first()
    }
}

impl<T: Ord> TryFrom<Vec<T>> for BinarySearchTree<T> {
    type Error = TreeError;

    fn try_from(values: Vec<T>) -> Result<Self> {
        Self::from_values(values)
    }
}

impl<T: Ord + Clone> TryFrom<&[T]> for BinarySearchTree<T> {
    type Error = TreeError;

    fn try_from(values: &[T]) -> Result<Self> {
        Self::from_values(values.iter().cloned())
    }
}

impl<T> From<BinarySearchTree<T>> for BinaryTree<T> {
    fn from(search: BinarySearchTree<T>) -> Self {
        search.into_inner()
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, BinaryNode<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the values in pre-order, e.g. `[5, 3, 8]`.
impl<T: fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tree, f)
    }
}


#[cfg(test)]
mod quickcheck_tests {
    use super::*;
    use crate::Node;

    /// A plain boxed search tree to check placement against.
    struct Model<T> {
        value: T,
        left: Option<Box<Model<T>>>,
        right: Option<Box<Model<T>>>,
    }

    impl<T: Ord> Model<T> {
        fn insert(&mut self, value: T) {
            let slot = if value <= self.value {
                &mut self.left
            } else {
                &mut self.right
            };
            match slot {
                Some(child) => child.insert(value),
                None => {
                    *slot = Some(Box::new(Model {
                        value,
                        left: None,
                        right: None,
                    }))
                }
            }
        }

        fn pre_order<'a>(&'a self, values: &mut Vec<&'a T>) {
            values.push(&self.value);
            for child in [&self.left, &self.right].into_iter().flatten() {
                child.pre_order(values);
            }
        }
    }

    quickcheck::quickcheck! {
        fn placement_matches_a_boxed_reference(xs: Vec<i8>) -> bool {
            let mut values = xs.clone().into_iter();
            let Some(first) = values.next() else {
                return BinarySearchTree::from_values(xs).is_err();
            };
            let mut model = Model {
                value: first,
                left: None,
                right: None,
            };
            for x in values {
                model.insert(x);
            }

            let tree = BinarySearchTree::from_values(xs.iter().copied()).unwrap();
            let mut expected = Vec::new();
            model.pre_order(&mut expected);
            tree.traverse() == expected
        }
    }

    quickcheck::quickcheck! {
        fn every_subtree_is_ordered(xs: Vec<i8>) -> bool {
            let Ok(tree) = BinarySearchTree::from_values(xs.iter().copied()) else {
                return xs.is_empty();
            };
            tree.nodes().all(|node| {
                let value = node.value();
                let left_ok = node
                    .left()
                    .map_or(true, |left| left.subtree().iter().all(|v| v <= value));
                let right_ok = node
                    .right()
                    .map_or(true, |right| right.subtree().iter().all(|v| v > value));
                left_ok && right_ok
            })
        }
    }

    quickcheck::quickcheck! {
        fn keeps_every_value(xs: Vec<i8>) -> bool {
            let Ok(tree) = BinarySearchTree::try_from(&xs[..]) else {
                return xs.is_empty();
            };
            let mut stored: Vec<_> = tree.iter().copied().collect();
            let mut expected = xs.clone();
            stored.sort();
            expected.sort();
            tree.size() == xs.len() && stored == expected
        }
    }
}
