//! Semigroup type class - types with an associative combine operation.
//!
//! A type `T` is a semigroup if it has an associative binary operation
//! `combine: (T, T) -> T`.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use openset::algebra::Semigroup;
//! use openset::OpenHashSet;
//!
//! let left: OpenHashSet<i32> = [1, 2].into_iter().collect();
//! let right: OpenHashSet<i32> = [2, 3].into_iter().collect();
//!
//! let combined = left.combine(right);
//! assert_eq!(combined.len(), 3);
//! ```

use std::hash::Hash;

use crate::set::OpenHashSet;

/// A type class for types with an associative combine operation.
///
/// # Laws
///
/// All implementations must satisfy associativity: for all `a`, `b`, `c`,
///
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one, consuming both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::algebra::Semigroup;
    ///
    /// let combined = String::from("hello, ").combine(String::from("world"));
    /// assert_eq!(combined, "hello, world");
    /// ```
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, cloning as needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::algebra::Semigroup;
    ///
    /// let left = vec![1, 2];
    /// let right = vec![3];
    /// assert_eq!(left.combine_ref(&right), vec![1, 2, 3]);
    /// ```
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone + Sized,
    {
        self.clone().combine(other.clone())
    }

    /// Combines all elements of a non-empty iterator, or returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::algebra::Semigroup;
    ///
    /// let words = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(words), Some(String::from("ab")));
    ///
    /// let none: Vec<String> = vec![];
    /// assert_eq!(String::reduce_all(none), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

// =============================================================================
// OpenHashSet Implementation
// =============================================================================

/// Sets combine by union. Associative, and commutative as membership.
impl<T: Hash + Eq> Semigroup for OpenHashSet<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

// =============================================================================
// Standard Type Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `Option` combines the inner values when both sides are `Some`;
/// `None` is absorbed from either side.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (value, None) | (None, value) => value,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn set_combine_is_union() {
        let left: OpenHashSet<i32> = [1, 2].into_iter().collect();
        let right: OpenHashSet<i32> = [2, 3].into_iter().collect();

        let expected: OpenHashSet<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn set_combine_ref_leaves_operands_usable() {
        let left: OpenHashSet<i32> = [1].into_iter().collect();
        let right: OpenHashSet<i32> = [2].into_iter().collect();

        let combined = left.combine_ref(&right);
        assert_eq!(combined.len(), 2);
        assert_eq!(left.len(), 1);
        assert_eq!(right.len(), 1);
    }

    #[rstest]
    fn string_combine_concatenates() {
        assert_eq!(
            String::from("ab").combine(String::from("cd")),
            String::from("abcd")
        );
    }

    #[rstest]
    fn option_none_is_absorbed() {
        let value = Some(String::from("x"));
        assert_eq!(value.clone().combine(None), value.clone());
        assert_eq!(None.combine(value.clone()), value);
    }

    #[rstest]
    fn reduce_all_of_empty_iterator_is_none() {
        let empty: Vec<String> = vec![];
        assert_eq!(String::reduce_all(empty), None);
    }
}
