//! Foldable type class - generic folding over a container's elements.
//!
//! # Fold order
//!
//! `fold_left` visits elements in the container's own iteration order.
//! For [`OpenHashSet`] that is slot-array order, which is deterministic
//! for a given internal state but otherwise unspecified; folds over a set
//! are only order-independent for functions that are associative and
//! commutative in the accumulator. That precondition is documented, not
//! enforced.
//!
//! # Examples
//!
//! ```rust
//! use openset::algebra::Foldable;
//! use openset::OpenHashSet;
//!
//! let set: OpenHashSet<i32> = (1..=4).collect();
//! let sum = set.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 10);
//! ```

use std::hash::Hash;

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use super::semigroup::Semigroup;
use crate::set::OpenHashSet;

/// A type class for containers that can be folded to a summary value.
pub trait Foldable: TypeConstructor {
    /// Folds the container from the left with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::algebra::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let sum = values.fold_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 6);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the container from the right with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::algebra::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let result = values.fold_right(String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(result, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a [`Monoid`] and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::algebra::Foldable;
    ///
    /// let words = vec!["a", "b", "c"];
    /// let joined: String = words.fold_map(str::to_string);
    /// assert_eq!(joined, "abc");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns the number of elements in the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::algebra::Foldable;
    ///
    /// assert_eq!(vec![1, 2, 3].length(), 3);
    /// assert_eq!(None::<i32>.length(), 0);
    /// ```
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects all elements into a `Vec` in fold order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::algebra::Foldable;
    ///
    /// assert_eq!(Some(42).to_list(), vec![42]);
    /// ```
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns `true` if any element satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::algebra::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// assert!(values.exists(|element| *element > 2));
    /// assert!(!values.exists(|element| *element > 5));
    /// ```
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone()
            .fold_left(false, |found, element| found || predicate(&element))
    }

    /// Returns `true` if every element satisfies the predicate.
    ///
    /// An empty container satisfies any predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::algebra::Foldable;
    ///
    /// let values = vec![2, 4, 6];
    /// assert!(values.for_all(|element| element % 2 == 0));
    /// ```
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// OpenHashSet Implementation
// =============================================================================

impl<T: Hash + Eq> Foldable for OpenHashSet<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        let elements: Vec<T> = self.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }
}

// =============================================================================
// Standard Type Implementations
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(value) => function(value, init),
            None => init,
        }
    }
}

impl<A> Foldable for Vec<A> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }
}

// =============================================================================
// Tests
// =============================================================================
