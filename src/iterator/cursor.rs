//! The generic cursor behind every iterator variant.

use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{ContainerIterator, Order, Traversal, ensure_same_container};
use crate::container::MagicalContainer;
use crate::error::{ContainerError, Result};

/// A checked cursor over one derived ordering of a [`MagicalContainer`].
///
/// The cursor holds a shared borrow of its container and a position. The
/// position ranges over `[0, length]`, where `length` is the live length of
/// the ordering selected by `O`; `length` itself is the end sentinel.
///
/// Use the aliases [`AscendingIterator`](super::AscendingIterator),
/// [`SideCrossIterator`](super::SideCrossIterator) and
/// [`PrimeIterator`](super::PrimeIterator) rather than naming the marker.
///
/// A cursor created through [`Default`] is detached: it has no container and
/// every checked operation on it fails with
/// [`ContainerError::IteratorNotBound`].
///
/// Besides the checked cursor API, the type implements [`Iterator`], yielding
/// the remaining values of its ordering.
///
/// # Examples
///
/// ```rust
/// use magical_container::{ContainerError, MagicalContainer, PrimeIterator};
///
/// let container: MagicalContainer = (1..=10).collect();
/// let mut iterator = PrimeIterator::new(&container);
///
/// assert_eq!(iterator.value()?, 2);
/// assert_eq!(iterator.advance()?.advance()?.value()?, 5);
///
/// let end = iterator.end();
/// assert!(iterator.try_lt(&end)?);
/// assert_eq!(
///     end.value(),
///     Err(ContainerError::IteratorOutOfRange { position: 4, length: 4 })
/// );
/// # Ok::<(), ContainerError>(())
/// ```
#[derive(Clone)]
pub struct OrderIterator<'a, O: Order> {
    container: Option<&'a MagicalContainer>,
    position: usize,
    order: PhantomData<O>,
}

impl<'a, O: Order> OrderIterator<'a, O> {
    /// Creates a cursor at the first position of `container`'s ordering.
    #[inline]
    #[must_use]
    pub const fn new(container: &'a MagicalContainer) -> Self {
        Self::at(container, 0)
    }

    pub(crate) const fn at(container: &'a MagicalContainer, position: usize) -> Self {
        Self {
            container: Some(container),
            position,
            order: PhantomData,
        }
    }

    /// Returns a cursor at the first position, bound to the same container.
    #[inline]
    #[must_use]
    pub const fn begin(&self) -> Self {
        Self {
            container: self.container,
            position: 0,
            order: PhantomData,
        }
    }

    /// Returns the end sentinel, bound to the same container.
    ///
    /// The sentinel position is the length of the ordering at the time of
    /// the call. A detached cursor yields a detached sentinel at position 0.
    #[must_use]
    pub fn end(&self) -> Self {
        Self {
            container: self.container,
            position: self.container.map_or(0, |container| O::sequence(container).len()),
            order: PhantomData,
        }
    }

    /// Returns the cursor position.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.position
    }

    /// Returns the ordering this cursor walks.
    #[inline]
    #[must_use]
    pub const fn traversal(&self) -> Traversal {
        O::TRAVERSAL
    }

    /// Returns `true` if the cursor is bound to a container.
    #[inline]
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.container.is_some()
    }

    /// Returns the number of values between the cursor and the end sentinel.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.container.map_or(0, |container| {
            O::sequence(container).len().saturating_sub(self.position)
        })
    }

    /// Returns the value at the cursor.
    ///
    /// # Errors
    ///
    /// - [`ContainerError::IteratorNotBound`] if the cursor is detached.
    /// - [`ContainerError::IteratorOutOfRange`] if the cursor is at or past
    ///   the end of the ordering.
    pub fn value(&self) -> Result<i32> {
        let sequence = self.sequence()?;
        sequence
            .get(self.position)
            .copied()
            .ok_or(ContainerError::IteratorOutOfRange {
                position: self.position,
                length: sequence.len(),
            })
    }

    /// Moves the cursor one position forward and returns it for chaining.
    ///
    /// # Errors
    ///
    /// - [`ContainerError::IteratorNotBound`] if the cursor is detached.
    /// - [`ContainerError::IteratorOutOfRange`] if the cursor is already at
    ///   or past the end of the ordering. The position is left unchanged.
    pub fn advance(&mut self) -> Result<&mut Self> {
        let length = self.sequence()?.len();
        if self.position >= length {
            return Err(ContainerError::IteratorOutOfRange {
                position: self.position,
                length,
            });
        }
        self.position += 1;
        Ok(self)
    }

    /// Copies `other`'s binding and position into this cursor.
    ///
    /// A detached cursor takes on `other`'s binding. Assigning from a
    /// detached cursor detaches this one.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IteratorContainerMismatch`] if both cursors
    /// are bound to different container instances. This cursor is left
    /// unchanged in that case.
    pub fn assign_from(&mut self, other: &Self) -> Result<()> {
        if let (Some(current), Some(incoming)) = (self.container, other.container)
            && !std::ptr::eq(current, incoming)
        {
            return Err(ContainerError::IteratorContainerMismatch);
        }
        self.container = other.container;
        self.position = other.position;
        Ok(())
    }

    /// Compares the positions of two cursors over the same ordering.
    ///
    /// # Errors
    ///
    /// - [`ContainerError::IteratorNotBound`] if either cursor is detached.
    /// - [`ContainerError::IteratorContainerMismatch`] if the cursors are
    ///   bound to different containers.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        ensure_same_container(self.container, other.container)?;
        Ok(self.position.cmp(&other.position))
    }

    /// Returns `true` if both cursors are at the same position.
    ///
    /// # Errors
    ///
    /// See [`try_cmp`](Self::try_cmp).
    pub fn try_eq(&self, other: &Self) -> Result<bool> {
        self.try_cmp(other).map(Ordering::is_eq)
    }

    /// Returns `true` if the cursors are at different positions.
    ///
    /// # Errors
    ///
    /// See [`try_cmp`](Self::try_cmp).
    pub fn try_ne(&self, other: &Self) -> Result<bool> {
        self.try_cmp(other).map(Ordering::is_ne)
    }

    /// Returns `true` if this cursor is before `other`.
    ///
    /// # Errors
    ///
    /// See [`try_cmp`](Self::try_cmp).
    pub fn try_lt(&self, other: &Self) -> Result<bool> {
        self.try_cmp(other).map(Ordering::is_lt)
    }

    /// Returns `true` if this cursor is after `other`.
    ///
    /// # Errors
    ///
    /// See [`try_cmp`](Self::try_cmp).
    pub fn try_gt(&self, other: &Self) -> Result<bool> {
        self.try_cmp(other).map(Ordering::is_gt)
    }

    fn sequence(&self) -> Result<&'a [i32]> {
        self.container
            .map(O::sequence)
            .ok_or(ContainerError::IteratorNotBound)
    }
}

impl<O: Order> Default for OrderIterator<'_, O> {
    fn default() -> Self {
        Self {
            container: None,
            position: 0,
            order: PhantomData,
        }
    }
}

impl<O: Order> std::fmt::Debug for OrderIterator<'_, O> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("OrderIterator")
            .field("traversal", &O::TRAVERSAL)
            .field("position", &self.position)
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl<O: Order> ContainerIterator for OrderIterator<'_, O> {
    fn traversal(&self) -> Traversal {
        O::TRAVERSAL
    }

    fn index(&self) -> usize {
        self.position
    }

    fn container(&self) -> Option<&MagicalContainer> {
        self.container
    }
}

impl<O: Order> Iterator for OrderIterator<'_, O> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value().ok()?;
        self.position += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<O: Order> ExactSizeIterator for OrderIterator<'_, O> {}

impl<O: Order> FusedIterator for OrderIterator<'_, O> {}

static_assertions::assert_impl_all!(super::AscendingIterator<'static>: Clone, Send, Sync, Default);
static_assertions::assert_impl_all!(super::SideCrossIterator<'static>: Clone, Send, Sync, Default);
static_assertions::assert_impl_all!(super::PrimeIterator<'static>: Clone, Send, Sync, Default);
static_assertions::assert_impl_all!(MagicalContainer: Clone, Send, Sync, Default);
static_assertions::assert_obj_safe!(ContainerIterator);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterator::{AscendingIterator, PrimeIterator, SideCrossIterator};
    use rstest::rstest;

    fn sample() -> MagicalContainer {
        (1..=6).collect()
    }

    #[rstest]
    fn test_new_starts_at_zero() {
        let container = sample();
        let iterator = AscendingIterator::new(&container);
        assert_eq!(iterator.index(), 0);
        assert!(iterator.is_bound());
    }

    #[rstest]
    fn test_at_places_cursor() {
        let container = sample();
        let iterator = SideCrossIterator::at(&container, 3);
        assert_eq!(iterator.index(), 3);
        assert_eq!(iterator.value(), Ok(5));
    }

    #[rstest]
    fn test_end_reads_live_length_per_ordering() {
        let container = sample();
        assert_eq!(AscendingIterator::new(&container).end().index(), 6);
        assert_eq!(SideCrossIterator::new(&container).end().index(), 6);
        assert_eq!(PrimeIterator::new(&container).end().index(), 3);
    }

    #[rstest]
    fn test_begin_resets_position() {
        let container = sample();
        let mut iterator = PrimeIterator::new(&container);
        iterator.advance().unwrap();
        assert_eq!(iterator.begin().index(), 0);
        assert_eq!(iterator.index(), 1);
    }

    #[rstest]
    fn test_advance_at_end_keeps_position() {
        let container = sample();
        let mut end = PrimeIterator::new(&container).end();
        assert_eq!(
            end.advance().map(|iterator| iterator.index()),
            Err(ContainerError::IteratorOutOfRange {
                position: 3,
                length: 3
            })
        );
        assert_eq!(end.index(), 3);
    }

    #[rstest]
    fn test_remaining_counts_down() {
        let container = sample();
        let mut iterator = AscendingIterator::new(&container);
        assert_eq!(iterator.remaining(), 6);
        iterator.advance().unwrap().advance().unwrap();
        assert_eq!(iterator.remaining(), 4);
        assert_eq!(iterator.end().remaining(), 0);
    }

    #[rstest]
    fn test_detached_cursor_fails_every_checked_operation() {
        let container = sample();
        let mut detached = AscendingIterator::default();
        let bound = AscendingIterator::new(&container);

        assert!(!detached.is_bound());
        assert_eq!(detached.value(), Err(ContainerError::IteratorNotBound));
        assert_eq!(
            detached.advance().map(|iterator| iterator.index()),
            Err(ContainerError::IteratorNotBound)
        );
        assert_eq!(detached.try_eq(&bound), Err(ContainerError::IteratorNotBound));
        assert_eq!(bound.try_eq(&detached), Err(ContainerError::IteratorNotBound));
        assert_eq!(detached.end().index(), 0);
        assert_eq!(detached.remaining(), 0);
        assert_eq!(detached.next(), None);
    }

    #[rstest]
    fn test_assign_from_binds_detached_cursor() {
        let container = sample();
        let mut source = AscendingIterator::new(&container);
        source.advance().unwrap();

        let mut target = AscendingIterator::default();
        assert_eq!(target.assign_from(&source), Ok(()));
        assert!(target.is_bound());
        assert_eq!(target.try_eq(&source), Ok(true));
    }

    #[rstest]
    fn test_assign_from_other_container_is_rejected() {
        let first = sample();
        let second = sample();
        let mut target = AscendingIterator::new(&first);
        let mut source = AscendingIterator::new(&second);
        source.advance().unwrap();

        assert_eq!(
            target.assign_from(&source),
            Err(ContainerError::IteratorContainerMismatch)
        );
        assert_eq!(target.index(), 0);
        assert_eq!(target.value(), Ok(1));
    }

    #[rstest]
    fn test_dyn_comparison_reports_both_tags() {
        let container = sample();
        let prime = PrimeIterator::new(&container);
        let side_cross = SideCrossIterator::new(&container);
        assert_eq!(
            prime.dyn_cmp(&side_cross),
            Err(ContainerError::IteratorTypeMismatch {
                expected: Traversal::Prime,
                found: Traversal::SideCross,
            })
        );
    }

    #[rstest]
    fn test_dyn_comparison_checks_type_before_binding() {
        let container = sample();
        let detached = PrimeIterator::default();
        let ascending = AscendingIterator::new(&container);
        assert!(matches!(
            ascending.dyn_eq(&detached),
            Err(ContainerError::IteratorTypeMismatch { .. })
        ));
    }

    #[rstest]
    fn test_iterator_size_hint_is_exact() {
        let container = sample();
        let mut iterator = SideCrossIterator::new(&container);
        assert_eq!(iterator.len(), 6);
        iterator.next();
        assert_eq!(iterator.size_hint(), (5, Some(5)));
    }

    #[rstest]
    fn test_debug_shows_traversal_and_position() {
        let container = sample();
        let iterator = PrimeIterator::new(&container);
        assert_eq!(
            format!("{iterator:?}"),
            "OrderIterator { traversal: Prime, position: 0, bound: true }"
        );
    }
}
