//! Lazy traversals over a [`Tree`][crate::Tree].
//!
//! Both iterators keep an explicit stack of pending nodes instead of recursing, so walking a
//! list-shaped tree costs heap memory proportional to its depth rather than call stack. Each
//! call to [`Tree::iter`][crate::Tree::iter] or [`Tree::pre_order`][crate::Tree::pre_order]
//! starts a fresh walk.

use std::iter::FusedIterator;

use crate::node::Node;

/// In-order traversal: left subtree, then the node, then the right subtree. For a valid tree
/// this yields values in non-decreasing order.
///
/// # Examples
///
/// ```
/// use ordered_tree::Tree;
///
/// let tree: Tree<i64> = vec![5, 2, 8, 1, 3].into_iter().collect();
///
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 5, 8]);
/// ```
pub struct Iter<'a, T> {
    /// Nodes whose left subtree has been queued but whose own value hasn't been yielded yet.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

/// Manual implementation of `Clone` so cloning the iterator doesn't require `T: Clone`.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Pre-order traversal: the node, then its left subtree, then its right subtree.
///
/// Re-inserting a tree's pre-order sequence into an empty tree rebuilds the same shape.
///
/// # Examples
///
/// ```
/// use ordered_tree::Tree;
///
/// let tree: Tree<i64> = vec![5, 2, 8, 1, 3].into_iter().collect();
///
/// assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), vec![5, 2, 1, 3, 8]);
/// ```
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<T> Clone for PreOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped (and so visited) before it.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PreOrder<'_, T> {}

impl<T> FusedIterator for PreOrder<'_, T> {}
