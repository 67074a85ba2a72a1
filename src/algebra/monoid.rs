//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a semigroup with an identity element `empty()`:
//!
//! # Laws
//!
//! For all `a`:
//!
//! ```text
//! T::empty().combine(a) == a    (left identity)
//! a.combine(T::empty()) == a    (right identity)
//! ```
//!
//! plus associativity inherited from [`Semigroup`].
//!
//! # Examples
//!
//! ```rust
//! use openset::algebra::{Monoid, Semigroup};
//! use openset::OpenHashSet;
//!
//! let set: OpenHashSet<i32> = [1, 2].into_iter().collect();
//! let identity = OpenHashSet::empty();
//!
//! assert_eq!(identity.combine(set.clone()), set);
//! ```

use std::hash::Hash;

use super::semigroup::Semigroup;
use crate::set::OpenHashSet;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// In addition to the `Semigroup` associativity law, all implementations
/// must satisfy, for all `a`:
///
/// ```text
/// Self::empty().combine(a) == a
/// a.combine(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::algebra::Monoid;
    /// use openset::OpenHashSet;
    ///
    /// assert!(OpenHashSet::<i32>::empty().is_empty());
    /// assert_eq!(String::empty(), "");
    /// ```
    fn empty() -> Self;

    /// Combines all elements of an iterator, starting from the identity.
    ///
    /// Unlike [`Semigroup::reduce_all`], this always produces a value:
    /// the identity element for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::algebra::Monoid;
    /// use openset::OpenHashSet;
    ///
    /// let sets: Vec<OpenHashSet<i32>> = vec![
    ///     [1, 2].into_iter().collect(),
    ///     [2, 3].into_iter().collect(),
    /// ];
    ///
    /// let combined = OpenHashSet::combine_all(sets);
    /// assert_eq!(combined.len(), 3);
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

// =============================================================================
// OpenHashSet Implementation
// =============================================================================

/// The empty set is the identity for union.
impl<T: Hash + Eq> Monoid for OpenHashSet<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Standard Type Implementations
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// `Option` forms a monoid with `None` as identity when its inner type
/// is a semigroup.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

// =============================================================================
// Tests
// =============================================================================
