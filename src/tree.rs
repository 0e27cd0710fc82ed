//! An unbalanced, owned BST. Every node exclusively owns its children through `Box`es so the
//! structure is always a tree: no parent pointers, no sharing and no `unsafe`.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.insert(1);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Equal values are kept and placed to the right of the existing one.
//! tree.insert(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Deleting removes one occurrence and returns it.
//! assert_eq!(tree.delete(&1), Some(1));
//! assert_eq!(tree.delete(&1), Some(1));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::error::InvariantViolation;
use crate::iter::{Iter, PreOrder};
use crate::node::{Link, Node};

/// A Binary Search Tree of totally ordered values. This can be used for inserting, finding, and
/// deleting values, and for walking them in sorted or pre-order.
///
/// No rebalancing is performed: the shape of the tree, and so the cost of every operation, is
/// decided by insertion order. Inserting sorted input builds a list.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Dropping the root directly would recurse once per level, which overflows the stack for
    // list-shaped trees.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// Copies node by node, so the clone has the same shape and costs linear time even for
    /// list-shaped trees.
    fn clone(&self) -> Self {
        let mut pre_order: Vec<&Node<T>> = Vec::with_capacity(self.len);
        let mut pending: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = pending.pop() {
            pre_order.push(node);
            pending.extend(node.right());
            pending.extend(node.left());
        }

        // Walking pre-order backwards finishes a node's right subtree, then its left subtree,
        // before reaching the node itself, so both copies are on top of `copied`.
        let mut copied: Vec<Box<Node<T>>> = Vec::with_capacity(pre_order.len());
        for node in pre_order.into_iter().rev() {
            let mut copy = Node::new_boxed(node.value.clone());
            if node.left.is_some() {
                copy.left = copied.pop();
            }
            if node.right.is_some() {
                copy.right = copied.pop();
            }
            copied.push(copy);
        }

        Self {
            root: copied.pop(),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the values in sorted order separated by single spaces. See
/// [`Tree::to_sorted_string`].
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().format(" "))
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values stored in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            debug!(len = self.len, "clearing tree");
        }
        *self = Self::new();
    }

    /// Potentially finds the stored value equal to `target`. If no node holds such a value,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, target: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match target.cmp(&node.value) {
                Ordering::Less => current = node.left(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => current = node.right(),
            }
        }
        None
    }

    /// Whether some node holds a value equal to `target`.
    pub fn contains(&self, target: &T) -> bool
    where
        T: Ord,
    {
        self.find(target).is_some()
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree. With duplicates, this is the most recently inserted of
    /// the largest values.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }

    /// Inserts the given value into the tree. Values less than a node go into its left subtree
    /// and every other value, including one equal to it, goes into its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.to_pre_order_string(), "2 1 2");
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = slot {
            let side = node.side_for(&value);
            slot = node.child_mut(side);
            depth += 1;
        }
        *slot = Some(Node::new_boxed(value));
        self.len += 1;

        trace!(depth, len = self.len, "inserted value");
    }

    /// Deletes one node holding a value equal to `target` and returns the stored value. If the
    /// tree doesn't contain such a value, nothing happens.
    ///
    /// A node with two children is replaced by the smallest value of its right subtree, so the
    /// result of a sequence of deletions is fully determined by the sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree: Tree<i64> = vec![5, 2, 8, 1, 3, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&5), Some(5));
    /// assert_eq!(tree.to_sorted_string(), "1 2 3 7 8 9");
    ///
    /// // 7 took the root's place.
    /// assert_eq!(tree.to_pre_order_string(), "7 2 1 3 8 9");
    ///
    /// assert_eq!(tree.delete(&42), None);
    /// ```
    pub fn delete(&mut self, target: &T) -> Option<T>
    where
        T: Ord,
    {
        let removed = Node::unlink(self.slot_of(target))?;
        self.len -= 1;

        trace!(len = self.len, "deleted value");
        Some(removed)
    }

    /// Finds the slot owning the topmost node equal to `target`, or the empty slot where it
    /// would have been.
    fn slot_of(&mut self, target: &T) -> &mut Link<T>
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        loop {
            let side = match slot.as_deref() {
                Some(node) if *target != node.value => node.side_for(target),
                _ => return slot,
            };
            slot = match slot {
                Some(node) => node.child_mut(side),
                None => return slot,
            };
        }
    }

    /// Walks the values in sorted order. See [`Iter`].
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Walks the values in pre-order. See [`PreOrder`].
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root.as_deref(), self.len)
    }

    /// The in-order traversal as a string of space-separated values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<i64> = vec![5, 2, 8, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.to_sorted_string(), "1 2 3 5 8");
    /// assert_eq!(Tree::<i64>::new().to_sorted_string(), "");
    /// ```
    pub fn to_sorted_string(&self) -> String
    where
        T: fmt::Display,
    {
        self.iter().join(" ")
    }

    /// The pre-order traversal as a string of space-separated values.
    pub fn to_pre_order_string(&self) -> String
    where
        T: fmt::Display,
    {
        self.pre_order().join(" ")
    }

    /// Checks every ordering invariant of the tree and that its recorded length matches its
    /// contents, reporting the first violation found.
    ///
    /// Every node is checked against the tightest bounds set by its ancestors: values it sits
    /// left of are exclusive upper bounds and values it sits right of are inclusive lower bounds.
    pub fn validate(&self) -> Result<(), InvariantViolation<T>>
    where
        T: Ord + Clone,
    {
        let mut pending: Vec<(&Node<T>, Option<&T>, Option<&T>)> = self
            .root
            .as_deref()
            .map(|root| (root, None, None))
            .into_iter()
            .collect();
        let mut counted = 0;

        while let Some((node, lower, upper)) = pending.pop() {
            counted += 1;
            if let Some(upper) = upper {
                if node.value >= *upper {
                    return Err(InvariantViolation::LeftNotLess {
                        ancestor: upper.clone(),
                        value: node.value.clone(),
                    });
                }
            }
            if let Some(lower) = lower {
                if node.value < *lower {
                    return Err(InvariantViolation::RightLess {
                        ancestor: lower.clone(),
                        value: node.value.clone(),
                    });
                }
            }

            if let Some(left) = node.left() {
                pending.push((left, lower, Some(&node.value)));
            }
            if let Some(right) = node.right() {
                pending.push((right, Some(&node.value), upper));
            }
        }

        if counted != self.len {
            return Err(InvariantViolation::LenMismatch {
                recorded: self.len,
                counted,
            });
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
