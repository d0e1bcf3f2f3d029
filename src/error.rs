//! Error types for the container and its iterators.
//!
//! Every fallible operation in this crate reports a [`ContainerError`].
//! Errors are plain values: they carry enough context to explain the failure
//! and never leave the container in a partially updated state.

use crate::iterator::Traversal;

/// Represents every failure the container or an iterator can report.
///
/// # Examples
///
/// ```rust
/// use magical_container::{ContainerError, MagicalContainer};
///
/// let mut container = MagicalContainer::new();
/// container.add_element(3);
///
/// assert_eq!(
///     container.remove_element(4),
///     Err(ContainerError::ElementNotFound(4))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    /// `remove_element` was called with a value the container does not hold.
    #[error("element {0} not found in container")]
    ElementNotFound(i32),

    /// Two iterators walking different orderings were compared through
    /// [`ContainerIterator`](crate::ContainerIterator).
    #[error("cannot compare {expected} iterator with {found} iterator")]
    IteratorTypeMismatch {
        /// The traversal of the iterator the comparison was called on.
        expected: Traversal,
        /// The traversal of the iterator passed as the argument.
        found: Traversal,
    },

    /// Two iterators bound to different container instances were compared
    /// or assigned.
    #[error("iterators are bound to different containers")]
    IteratorContainerMismatch,

    /// An iterator was dereferenced or advanced at or past the end of its
    /// ordering.
    #[error("iterator position {position} is out of range for ordering of length {length}")]
    IteratorOutOfRange {
        /// The cursor position at the time of the call.
        position: usize,
        /// The live length of the ordering at the time of the call.
        length: usize,
    },

    /// The iterator is detached (created through `Default`) and has no
    /// container to read from.
    #[error("iterator is not bound to a container")]
    IteratorNotBound,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ContainerError>;
