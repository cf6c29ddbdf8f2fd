//! This crate exposes a small family of generic trees.
//!
//! ## Trees
//!
//! A tree is a set of nodes, each storing a value and linking to zero or more child nodes.
//! Exactly one node, the root, has no parent; every other node has exactly one. Two node
//! shapes are provided:
//!
//! * [`BinaryNode`]s have a left and a right slot, either of which may be empty. They make up a
//!   [`BinaryTree`].
//! * [`GenericNode`]s have an ordered list of any number of children. They make up an
//!   [`NTree`].
//!
//! A [`BinarySearchTree`] is a [`BinaryTree`] built once from a sequence of values, where
//! everything in a node's left subtree is less than or equal to it and everything in its right
//! subtree greater.
//!
//! > Note that nodes with no children are called "leaf nodes".
//!
//! The height of a node is the number of edges on the longest path from it down to a leaf, so a
//! leaf has height `0`. The size of a node is the number of nodes in its subtree, itself
//! included.
//!
//! ## Nodes and handles
//!
//! Every tree owns all of its nodes. Nodes are reached through handles borrowed from the tree:
//! [`NodeRef`] for reading and navigating (see the [`Node`] trait), and [`NodeMut`] for growing
//! the tree and changing values (see the [`EditNode`] trait). Handles know their parent, so a
//! tree can be walked upwards as well as downwards.
//!
//! ```
//! use canopy::{EditNode, NTree, Node, Tree};
//!
//! let mut tree = NTree::with_root("root");
//! let mut root = tree.root_mut().unwrap();
//! root.add("left").unwrap();
//! root.add("right").unwrap();
//!
//! let right = tree.root().unwrap().visit(1).unwrap().unwrap();
//! assert_eq!(right.parent(), tree.root());
//! assert_eq!(tree.size(), 3);
//! assert_eq!(tree.height(), Some(1));
//! ```
//!
//! ## Traversals
//!
//! Each tree can be walked in pre-order (a node, then each child's subtree in order) or
//! level by level. Both walks are iterative, so even a degenerate tree as deep as it is large
//! can be walked without running out of stack.
//!
//! ```
//! use canopy::{BinarySearchTree, Tree};
//!
//! let tree = BinarySearchTree::from_values([5, 3, 8, 1, 4, 9]).unwrap();
//! assert_eq!(tree.traverse(), [&5, &3, &1, &4, &8, &9]);
//! assert_eq!(tree.traverse_breadth_first(), [&5, &3, &8, &1, &4, &9]);
//! ```
//!
//! ## Logging
//!
//! Structural changes are logged through the [`log`](https://docs.rs/log) facade: every new
//! node and updated value at `trace`, every finished search tree at `debug`. Nothing is printed
//! unless the application installs a logger.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
mod binary;
mod error;
mod generic;
mod node;
mod search;
mod traverse;
mod tree;


pub use binary::{BinaryMut, BinaryNode, BinaryRef, BinaryTree};
pub use error::{Result, Slot, TreeError};
pub use generic::{GenericMut, GenericNode, GenericRef, NTree};
pub use node::{EditNode, Node, NodeMut, NodeRef};
pub use search::BinarySearchTree;
pub use traverse::{Iter, Nodes};
pub use tree::{Subtree, Tree};
