//! # magical-container
//!
//! An integer container that exposes three traversal orders through checked
//! cursor iterators.
//!
//! ## Overview
//!
//! [`MagicalContainer`] stores a set of unique `i32` values and keeps three
//! derived orderings consistent as elements are added and removed:
//!
//! - **Ascending**: every element, smallest first
//! - **Side-cross**: smallest, largest, second smallest, second largest, ...
//! - **Prime**: only the prime elements, smallest first
//!
//! Each ordering is walked by its own iterator type ([`AscendingIterator`],
//! [`SideCrossIterator`], [`PrimeIterator`]). The iterators are cursors: they
//! can be dereferenced, advanced, and compared by position, and every one of
//! those operations is bounds checked and reports a [`ContainerError`]
//! instead of panicking.
//!
//! ## Feature Flags
//!
//! - `tracing` (default): emit `tracing` events when elements are added or
//!   removed
//!
//! ## Example
//!
//! ```rust
//! use magical_container::{AscendingIterator, MagicalContainer, PrimeIterator, SideCrossIterator};
//!
//! let mut container = MagicalContainer::new();
//! for element in [2, 3, 4, 5] {
//!     container.add_element(element);
//! }
//!
//! let ascending: Vec<i32> = AscendingIterator::new(&container).collect();
//! let side_cross: Vec<i32> = SideCrossIterator::new(&container).collect();
//! let prime: Vec<i32> = PrimeIterator::new(&container).collect();
//!
//! assert_eq!(ascending, vec![2, 3, 4, 5]);
//! assert_eq!(side_cross, vec![2, 5, 3, 4]);
//! assert_eq!(prime, vec![2, 3, 5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod container;
mod error;
pub mod iterator;
mod primality;

pub use container::MagicalContainer;
pub use error::{ContainerError, Result};
pub use iterator::{
    Ascending, AscendingIterator, ContainerIterator, Order, OrderIterator, Prime, PrimeIterator,
    SideCross, SideCrossIterator, Traversal,
};
pub use primality::is_prime;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use magical_container::prelude::*;
///
/// let container: MagicalContainer = (1..=3).collect();
/// assert_eq!(AscendingIterator::new(&container).count(), 3);
/// ```
pub mod prelude {
    pub use crate::{
        AscendingIterator, ContainerError, ContainerIterator, MagicalContainer, PrimeIterator,
        SideCrossIterator, Traversal,
    };
}
