//! Errors reported by [`Tree::validate`][crate::Tree::validate].

use thiserror::Error;

/// A broken structural invariant found while validating a tree. None of these can be produced
/// through the public API; they exist so tests and callers can check a tree cheaply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation<T> {
    /// A value sits in the left subtree of `ancestor` but is not strictly less than it.
    #[error("{value:?} is in the left subtree of {ancestor:?} but is not less than it")]
    LeftNotLess {
        /// The tightest upper bound imposed by the value's ancestors.
        ancestor: T,
        /// The misplaced value.
        value: T,
    },

    /// A value sits in the right subtree of `ancestor` but is less than it.
    #[error("{value:?} is in the right subtree of {ancestor:?} but is less than it")]
    RightLess {
        /// The tightest lower bound imposed by the value's ancestors.
        ancestor: T,
        /// The misplaced value.
        value: T,
    },

    /// The tree's recorded length disagrees with the number of nodes it owns.
    #[error("tree records {recorded} values but holds {counted}")]
    LenMismatch {
        /// The length the tree reports from [`Tree::len`][crate::Tree::len].
        recorded: usize,
        /// The number of nodes found by walking the tree.
        counted: usize,
    },
}
