//! The integer container and its derived orderings.
//!
//! This module provides [`MagicalContainer`], a set of unique `i32` values that
//! keeps three read-only orderings in step with every mutation:
//!
//! - **ascending**: every element, smallest first
//! - **side-cross**: smallest, largest, second smallest, second largest, ...
//! - **prime**: only the prime elements, smallest first
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `add_element`    | O(n)       |
//! | `remove_element` | O(n)       |
//! | `contains`       | O(log n)   |
//! | `size`           | O(1)       |
//! | `*_order`        | O(1)       |
//!
//! Set membership is tracked in a `BTreeSet`, so the duplicate check and the
//! removal lookup are logarithmic. The ascending and prime orderings are kept
//! sorted by binary-search insertion; the side-cross ordering is rebuilt from
//! the ascending ordering after each successful mutation.
//!
//! # Examples
//!
//! ```rust
//! use magical_container::MagicalContainer;
//!
//! let mut container = MagicalContainer::new();
//! for element in [2, 3, 4, 5] {
//!     container.add_element(element);
//! }
//!
//! assert_eq!(container.size(), 4);
//! assert_eq!(container.ascending_order(), &[2, 3, 4, 5]);
//! assert_eq!(container.side_cross_order(), &[2, 5, 3, 4]);
//! assert_eq!(container.prime_order(), &[2, 3, 5]);
//! ```

use std::collections::BTreeSet;

use crate::error::{ContainerError, Result};
use crate::iterator::Traversal;
use crate::primality::is_prime;

/// A set of unique integers with ascending, side-cross and prime orderings.
///
/// Adding a value that is already present is a no-op. Removing a value that
/// is absent fails with [`ContainerError::ElementNotFound`] and leaves the
/// container unchanged.
///
/// Iterators over the orderings borrow the container, so the container cannot
/// be mutated or dropped while any iterator is alive.
///
/// # Examples
///
/// ```rust
/// use magical_container::{AscendingIterator, MagicalContainer};
///
/// let container: MagicalContainer = [5, 1, 4, 1, 3].into_iter().collect();
/// assert_eq!(container.size(), 4);
///
/// let values: Vec<i32> = AscendingIterator::new(&container).collect();
/// assert_eq!(values, vec![1, 3, 4, 5]);
/// ```
#[derive(Clone, Default)]
pub struct MagicalContainer {
    elements: BTreeSet<i32>,
    ascending: Vec<i32>,
    side_cross: Vec<i32>,
    prime: Vec<i32>,
}

impl MagicalContainer {
    /// Creates a new empty container.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: BTreeSet::new(),
            ascending: Vec::new(),
            side_cross: Vec::new(),
            prime: Vec::new(),
        }
    }

    /// Adds `element` to the container.
    ///
    /// If the element is already present nothing changes. Otherwise every
    /// derived ordering is updated before this method returns.
    ///
    /// # Complexity
    ///
    /// O(log n) for the membership check, O(n) for the ordering updates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magical_container::MagicalContainer;
    ///
    /// let mut container = MagicalContainer::new();
    /// container.add_element(7);
    /// container.add_element(7);
    /// assert_eq!(container.size(), 1);
    /// ```
    pub fn add_element(&mut self, element: i32) {
        if !self.elements.insert(element) {
            return;
        }

        insert_sorted(&mut self.ascending, element);
        if is_prime(element) {
            insert_sorted(&mut self.prime, element);
        }
        self.rebuild_side_cross();

        #[cfg(feature = "tracing")]
        tracing::trace!(element, size = self.size(), "element added");
    }

    /// Removes `element` from the container.
    ///
    /// The remaining elements keep their relative order in the ascending and
    /// prime orderings; the side-cross ordering is rebuilt.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ElementNotFound`] if the element is absent.
    /// The container is not modified in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use magical_container::{ContainerError, MagicalContainer};
    ///
    /// let mut container: MagicalContainer = [1, 2, 3].into_iter().collect();
    /// assert_eq!(container.remove_element(2), Ok(()));
    /// assert_eq!(container.ascending_order(), &[1, 3]);
    /// assert_eq!(
    ///     container.remove_element(2),
    ///     Err(ContainerError::ElementNotFound(2))
    /// );
    /// ```
    pub fn remove_element(&mut self, element: i32) -> Result<()> {
        if !self.elements.remove(&element) {
            #[cfg(feature = "tracing")]
            tracing::debug!(element, "attempted to remove missing element");
            return Err(ContainerError::ElementNotFound(element));
        }

        remove_sorted(&mut self.ascending, element);
        if is_prime(element) {
            remove_sorted(&mut self.prime, element);
        }
        self.rebuild_side_cross();

        #[cfg(feature = "tracing")]
        tracing::trace!(element, size = self.size(), "element removed");

        Ok(())
    }

    /// Returns the number of elements in the container.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements in the container.
    ///
    /// Same as [`size`](Self::size).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if the container holds `element`.
    #[inline]
    #[must_use]
    pub fn contains(&self, element: i32) -> bool {
        self.elements.contains(&element)
    }

    /// Returns every element in ascending order.
    #[inline]
    #[must_use]
    pub fn ascending_order(&self) -> &[i32] {
        &self.ascending
    }

    /// Returns every element in side-cross order.
    ///
    /// ```rust
    /// use magical_container::MagicalContainer;
    ///
    /// let container: MagicalContainer = (1..=5).collect();
    /// assert_eq!(container.side_cross_order(), &[1, 5, 2, 4, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn side_cross_order(&self) -> &[i32] {
        &self.side_cross
    }

    /// Returns the prime elements in ascending order.
    #[inline]
    #[must_use]
    pub fn prime_order(&self) -> &[i32] {
        &self.prime
    }

    /// Returns the ordering walked by `traversal`.
    #[must_use]
    pub fn order(&self, traversal: Traversal) -> &[i32] {
        match traversal {
            Traversal::Ascending => self.ascending_order(),
            Traversal::SideCross => self.side_cross_order(),
            Traversal::Prime => self.prime_order(),
        }
    }

    fn rebuild_side_cross(&mut self) {
        fill_side_cross(&self.ascending, &mut self.side_cross);
    }
}

impl std::fmt::Debug for MagicalContainer {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("MagicalContainer")
            .field("ascending", &self.ascending)
            .field("side_cross", &self.side_cross)
            .field("prime", &self.prime)
            .finish()
    }
}

impl FromIterator<i32> for MagicalContainer {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut container = Self::new();
        container.extend(iter);
        container
    }
}

impl Extend<i32> for MagicalContainer {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for element in iter {
            self.add_element(element);
        }
    }
}

/// Inserts `element` at its sorted position unless it is already present.
fn insert_sorted(order: &mut Vec<i32>, element: i32) {
    if let Err(position) = order.binary_search(&element) {
        order.insert(position, element);
    }

    debug_assert!(is_strictly_sorted(order), "{}", SORTED_INVARIANT_PANIC_MESSAGE);
}

/// Removes `element` if present, preserving the order of the rest.
fn remove_sorted(order: &mut Vec<i32>, element: i32) {
    if let Ok(position) = order.binary_search(&element) {
        order.remove(position);
    }
}

/// Writes the side-cross arrangement of `ascending` into `side_cross`.
///
/// Takes the smallest remaining element, then the largest remaining element,
/// until none remain. A single element appears once.
fn fill_side_cross(ascending: &[i32], side_cross: &mut Vec<i32>) {
    side_cross.clear();
    side_cross.reserve(ascending.len());

    let mut remaining = ascending.iter().copied();
    while let Some(smallest) = remaining.next() {
        side_cross.push(smallest);
        if let Some(largest) = remaining.next_back() {
            side_cross.push(largest);
        }
    }
}

const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "derived orderings must stay strictly increasing (sorted + deduplicated)";

fn is_strictly_sorted(slice: &[i32]) -> bool {
    slice.windows(2).all(|window| window[0] < window[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn side_cross_of(ascending: &[i32]) -> Vec<i32> {
        let mut side_cross = Vec::new();
        fill_side_cross(ascending, &mut side_cross);
        side_cross
    }

    #[rstest]
    #[case(&[], &[])]
    #[case(&[7], &[7])]
    #[case(&[1, 2], &[1, 2])]
    #[case(&[1, 2, 3], &[1, 3, 2])]
    #[case(&[1, 2, 3, 4], &[1, 4, 2, 3])]
    #[case(&[1, 2, 3, 4, 5], &[1, 5, 2, 4, 3])]
    #[case(&[-3, 0, 8, 10, 11, 20], &[-3, 20, 0, 11, 8, 10])]
    fn test_fill_side_cross(#[case] ascending: &[i32], #[case] expected: &[i32]) {
        assert_eq!(side_cross_of(ascending), expected);
    }

    #[rstest]
    fn test_fill_side_cross_reuses_buffer() {
        let mut side_cross = vec![99, 98, 97, 96, 95, 94];
        fill_side_cross(&[1, 2], &mut side_cross);
        assert_eq!(side_cross, vec![1, 2]);
    }

    #[rstest]
    fn test_insert_sorted_keeps_order_and_ignores_duplicates() {
        let mut order = Vec::new();
        for element in [5, 1, 3, 5, 1] {
            insert_sorted(&mut order, element);
        }
        assert_eq!(order, vec![1, 3, 5]);
    }

    #[rstest]
    fn test_remove_sorted_ignores_missing() {
        let mut order = vec![1, 3, 5];
        remove_sorted(&mut order, 4);
        assert_eq!(order, vec![1, 3, 5]);
        remove_sorted(&mut order, 3);
        assert_eq!(order, vec![1, 5]);
    }

    #[rstest]
    fn test_new_is_empty() {
        let container = MagicalContainer::new();
        assert!(container.is_empty());
        assert_eq!(container.size(), 0);
        assert!(container.ascending_order().is_empty());
        assert!(container.side_cross_order().is_empty());
        assert!(container.prime_order().is_empty());
    }

    #[rstest]
    fn test_add_then_remove_everything_leaves_empty_orderings() {
        let mut container: MagicalContainer = [4, 2, 9, 3].into_iter().collect();
        for element in [2, 3, 4, 9] {
            assert_eq!(container.remove_element(element), Ok(()));
        }
        assert!(container.is_empty());
        assert!(container.side_cross_order().is_empty());
        assert!(container.prime_order().is_empty());
    }

    #[rstest]
    #[case(Traversal::Ascending, &[1, 2, 3, 4, 5, 6])]
    #[case(Traversal::SideCross, &[1, 6, 2, 5, 3, 4])]
    #[case(Traversal::Prime, &[2, 3, 5])]
    fn test_order_selects_by_traversal(#[case] traversal: Traversal, #[case] expected: &[i32]) {
        let container: MagicalContainer = (1..=6).collect();
        assert_eq!(container.order(traversal), expected);
    }

    #[rstest]
    fn test_debug_lists_orderings() {
        let container: MagicalContainer = [3, 1, 2].into_iter().collect();
        assert_eq!(
            format!("{container:?}"),
            "MagicalContainer { ascending: [1, 2, 3], side_cross: [1, 3, 2], prime: [2, 3] }"
        );
    }
}
