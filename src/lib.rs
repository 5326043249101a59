//! This crate exposes a persistent, self-balancing Binary Search Tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of key and will sometimes have child `Node`s. The most
//! important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)`. An AVL tree keeps the
//! height at `O(lg N)` by requiring that, at every `Node`, the heights of the
//! two subtrees differ by at most one, and by rotating subtrees whenever an
//! insert or delete would break that rule.
//!
//! ## Persistence
//!
//! A [`Tree`] is never modified. [`Tree::insert`] and [`Tree::delete`] return
//! a new tree that rebuilds only the nodes on the path to the changed key and
//! shares every other node with the original. Nodes are reference counted
//! with [`Arc`](std::sync::Arc), so old and new versions can be read from any
//! number of threads.
//!
//! ```
//! use avltree::Tree;
//!
//! let v1: Tree<_> = (1..=5).collect();
//! let v2 = v1.delete(&3).insert(6);
//!
//! assert_eq!(v1.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(v2.iter().copied().collect::<Vec<_>>(), vec![1, 2, 4, 5, 6]);
//! assert!(v2.validate().is_ok());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
mod error;
pub mod iter;
mod node;
mod tree;
mod validate;

pub use compare::{Comparator, Natural};
pub use error::InvalidStructure;
pub use node::Node;
pub use tree::Tree;
