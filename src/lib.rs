//! An ordered Binary Search Tree with unrestricted deletion.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! may have child `Node`s. The invariants kept by [`Tree`] are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Equal values are always
//!    inserted to the right, so duplicates are kept and placed consistently.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` (where `height` is the longest path
//! from the root `Node` to a leaf `Node`). This tree does not rebalance itself,
//! so its height depends entirely on insertion order: sorted input produces a
//! tree shaped like a linked list. BSTs naturally support sorted iteration by
//! visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Deletion
//!
//! Deleting a value rewrites the single slot (the root, or a parent's left or
//! right child) that owns the node being removed:
//!
//! - a leaf is simply detached,
//! - a node with one child is replaced by that child's whole subtree,
//! - a node with two children is replaced by the leftmost node of its right
//!   subtree (its in-order successor), which adopts both of its subtrees.
//!
//! Root and non-root nodes go through the same code, and no stored value other
//! than the deleted one is ever lost.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree: Tree<i64> = vec![8, 4, 12, 2, 6, 10, 14, 1].into_iter().collect();
//!
//! tree.delete(&4);
//!
//! assert_eq!(tree.to_sorted_string(), "1 2 6 8 10 12 14");
//! assert!(tree.validate().is_ok());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
mod node;
pub mod tree;

pub use error::InvariantViolation;
pub use tree::Tree;

#[cfg(test)]
mod test;
