use std::cmp::Ordering;

use tracing::trace;

/// A place that may own a subtree. This is either the tree's root or one of a `Node`'s children,
/// and it is the unit the deletion algorithm rewrites.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Which child of a `Node` a search continues into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// The side `value` belongs on relative to this node. Values equal to this node's value go
    /// right, which keeps the placement of duplicates reproducible.
    pub(crate) fn side_for(&self, value: &T) -> Side
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => Side::Left,
            Ordering::Equal | Ordering::Greater => Side::Right,
        }
    }

    /// Removes the node owned by `slot` and returns its value. Whatever children it had are
    /// rewired into `slot` so no other value is lost. An empty `slot` is left untouched.
    ///
    /// When the node has two children, its replacement is the leftmost node of its right subtree
    /// (its in-order successor):
    ///
    /// ```text
    ///      slot                  slot                       slot                slot
    ///       |                     |                          |                   |
    ///       N                     R                          N                   R
    ///      / \      ->           / \                        / \      ->         / \
    ///     a   R                 a   r                      a   x               a   x
    ///          \                                              /                   /
    ///           r                                           ...                 ...
    ///                                                       /                   /
    ///                                                      R                   r
    ///                                                       \
    ///                                                        r
    /// ```
    pub(crate) fn unlink(slot: &mut Link<T>) -> Option<T>
    where
        T: Ord,
    {
        let mut node = slot.take()?;
        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => {
                trace!("removed leaf");
                None
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!("hoisted only child");
                Some(child)
            }
            (Some(left), Some(mut right)) => match Self::take_leftmost(&mut right.left) {
                // `right` has no left child so it is the successor itself.
                None => {
                    trace!("promoted adjacent successor");
                    right.left = Some(left);
                    Some(right)
                }
                Some(mut successor) => {
                    trace!("promoted deep successor");
                    successor.left = Some(left);
                    successor.right = Some(right);
                    Some(successor)
                }
            },
        };

        if let Some(replacement) = slot.as_deref() {
            replacement.assert_local_order();
        }
        Some(node.value)
    }

    /// Detaches the leftmost node of the subtree owned by `slot`, splicing that node's right
    /// subtree into the place it occupied. Returns `None` if `slot` is empty.
    fn take_leftmost(slot: &mut Link<T>) -> Link<T> {
        let mut slot = slot;
        while slot.as_deref().map_or(false, |node| node.left.is_some()) {
            slot = match slot {
                Some(node) => &mut node.left,
                None => break,
            };
        }

        let mut leftmost = slot.take()?;
        *slot = leftmost.right.take();
        Some(leftmost)
    }

    /// Debug-only consistency assertion on the ordering between this node and its direct
    /// children. Compiled out of release builds.
    fn assert_local_order(&self)
    where
        T: Ord,
    {
        if let Some(left) = self.left() {
            debug_assert!(left.value < self.value, "left child not less than its parent");
        }
        if let Some(right) = self.right() {
            debug_assert!(right.value >= self.value, "right child less than its parent");
        }
    }
}
