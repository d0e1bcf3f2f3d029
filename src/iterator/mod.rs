//! Cursor iterators over the derived orderings of a [`MagicalContainer`].
//!
//! Every ordering is walked by the same generic cursor, [`OrderIterator`],
//! parameterized by a zero-sized marker that selects the ordering:
//!
//! | Marker        | Alias                 | Ordering                              |
//! |---------------|-----------------------|---------------------------------------|
//! | [`Ascending`] | [`AscendingIterator`] | all elements, smallest first          |
//! | [`SideCross`] | [`SideCrossIterator`] | smallest, largest, next smallest, ... |
//! | [`Prime`]     | [`PrimeIterator`]     | prime elements, smallest first        |
//!
//! A cursor is a position in `[0, length]` where `length` is read from the
//! container on every call. The position equal to `length` is the end
//! sentinel: it can be compared but not dereferenced or advanced.
//!
//! Cursors of the same variant compare by position through the typed
//! `try_*` methods. Cursors of any variant compare through the object-safe
//! [`ContainerIterator`] trait, which first checks that both sides walk the
//! same ordering.
//!
//! # Examples
//!
//! ```rust
//! use magical_container::{MagicalContainer, SideCrossIterator};
//!
//! let container: MagicalContainer = (1..=5).collect();
//!
//! let mut iterator = SideCrossIterator::new(&container);
//! let end = iterator.end();
//! let mut visited = Vec::new();
//! while iterator.try_ne(&end)? {
//!     visited.push(iterator.value()?);
//!     iterator.advance()?;
//! }
//! assert_eq!(visited, vec![1, 5, 2, 4, 3]);
//! # Ok::<(), magical_container::ContainerError>(())
//! ```

mod cursor;

use std::cmp::Ordering;

use crate::container::MagicalContainer;
use crate::error::{ContainerError, Result};

pub use cursor::OrderIterator;

/// Identifies which derived ordering an iterator walks.
///
/// This is the runtime tag checked by the polymorphic comparisons of
/// [`ContainerIterator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// All elements, smallest first.
    Ascending,
    /// Alternating smallest and largest remaining element.
    SideCross,
    /// Prime elements, smallest first.
    Prime,
}

impl std::fmt::Display for Traversal {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ascending => "ascending",
            Self::SideCross => "side-cross",
            Self::Prime => "prime",
        };
        formatter.write_str(name)
    }
}

/// Selects the ordering an [`OrderIterator`] walks.
///
/// Implemented by the zero-sized markers [`Ascending`], [`SideCross`] and
/// [`Prime`].
pub trait Order: Copy + std::fmt::Debug + Send + Sync + 'static {
    /// The runtime tag of this ordering.
    const TRAVERSAL: Traversal;

    /// Returns this ordering as stored in `container`.
    #[inline]
    fn sequence(container: &MagicalContainer) -> &[i32] {
        container.order(Self::TRAVERSAL)
    }
}

macro_rules! declare_traversal {
    ($($(#[$meta:meta])* $name:ident => $label:tt;)*) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
                pub struct $name;

                impl Order for $name {
                    const TRAVERSAL: Traversal = Traversal::$name;
                }

                #[doc = "Cursor over the " $label " ordering of a [`MagicalContainer`]."]
                pub type [<$name Iterator>]<'a> = OrderIterator<'a, $name>;
            )*
        }
    };
}

declare_traversal! {
    /// Marker selecting the ascending ordering.
    Ascending => "ascending";
    /// Marker selecting the side-cross ordering.
    SideCross => "side-cross";
    /// Marker selecting the prime ordering.
    Prime => "prime";
}

/// Comparison surface shared by every iterator variant.
///
/// The trait is object safe, so iterators of different variants can be
/// compared through `&dyn ContainerIterator`. Comparisons check, in order:
///
/// 1. both iterators walk the same ordering
///    ([`ContainerError::IteratorTypeMismatch`] otherwise),
/// 2. both iterators are bound ([`ContainerError::IteratorNotBound`]),
/// 3. both are bound to the same container instance
///    ([`ContainerError::IteratorContainerMismatch`]),
///
/// and then compare positions.
///
/// # Examples
///
/// ```rust
/// use magical_container::{
///     AscendingIterator, ContainerError, ContainerIterator, MagicalContainer, PrimeIterator,
/// };
///
/// let container: MagicalContainer = (1..=10).collect();
/// let ascending = AscendingIterator::new(&container);
/// let prime = PrimeIterator::new(&container);
///
/// assert!(ascending.dyn_eq(&ascending.begin())?);
/// assert!(matches!(
///     ascending.dyn_eq(&prime),
///     Err(ContainerError::IteratorTypeMismatch { .. })
/// ));
/// # Ok::<(), ContainerError>(())
/// ```
pub trait ContainerIterator {
    /// Returns the ordering this iterator walks.
    fn traversal(&self) -> Traversal;

    /// Returns the cursor position.
    fn index(&self) -> usize;

    /// Returns the container this iterator is bound to, if any.
    fn container(&self) -> Option<&MagicalContainer>;

    /// Compares the positions of two iterators.
    ///
    /// # Errors
    ///
    /// Fails with [`ContainerError::IteratorTypeMismatch`],
    /// [`ContainerError::IteratorNotBound`] or
    /// [`ContainerError::IteratorContainerMismatch`] as described on the trait.
    fn dyn_cmp(&self, other: &dyn ContainerIterator) -> Result<Ordering> {
        if self.traversal() != other.traversal() {
            return Err(ContainerError::IteratorTypeMismatch {
                expected: self.traversal(),
                found: other.traversal(),
            });
        }
        ensure_same_container(self.container(), other.container())?;
        Ok(self.index().cmp(&other.index()))
    }

    /// Returns `true` if both iterators are at the same position.
    ///
    /// # Errors
    ///
    /// See [`dyn_cmp`](Self::dyn_cmp).
    fn dyn_eq(&self, other: &dyn ContainerIterator) -> Result<bool> {
        self.dyn_cmp(other).map(Ordering::is_eq)
    }

    /// Returns `true` if the iterators are at different positions.
    ///
    /// # Errors
    ///
    /// See [`dyn_cmp`](Self::dyn_cmp).
    fn dyn_ne(&self, other: &dyn ContainerIterator) -> Result<bool> {
        self.dyn_cmp(other).map(Ordering::is_ne)
    }

    /// Returns `true` if this iterator is before `other`.
    ///
    /// # Errors
    ///
    /// See [`dyn_cmp`](Self::dyn_cmp).
    fn dyn_lt(&self, other: &dyn ContainerIterator) -> Result<bool> {
        self.dyn_cmp(other).map(Ordering::is_lt)
    }

    /// Returns `true` if this iterator is after `other`.
    ///
    /// # Errors
    ///
    /// See [`dyn_cmp`](Self::dyn_cmp).
    fn dyn_gt(&self, other: &dyn ContainerIterator) -> Result<bool> {
        self.dyn_cmp(other).map(Ordering::is_gt)
    }
}

/// Checks that two bindings refer to the same container instance.
///
/// Identity is by address, so two containers with equal contents are still
/// different containers.
pub(crate) fn ensure_same_container(
    left: Option<&MagicalContainer>,
    right: Option<&MagicalContainer>,
) -> Result<()> {
    match (left, right) {
        (Some(left), Some(right)) if std::ptr::eq(left, right) => Ok(()),
        (Some(_), Some(_)) => Err(ContainerError::IteratorContainerMismatch),
        _ => Err(ContainerError::IteratorNotBound),
    }
}

impl<'a> IntoIterator for &'a MagicalContainer {
    type Item = i32;
    type IntoIter = AscendingIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        AscendingIterator::new(self)
    }
}
