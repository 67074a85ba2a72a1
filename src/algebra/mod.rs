//! Type classes backing the functional layer.
//!
//! This module defines the small algebraic vocabulary the set's
//! functional API is expressed in:
//!
//! - [`Semigroup`]: an associative `combine` (for sets: union)
//! - [`Monoid`]: a semigroup with an identity element (the empty set)
//! - [`Foldable`]: generic folding over a container's elements
//! - [`TypeConstructor`]: the higher-kinded plumbing `Foldable` needs
//!
//! Instances are provided for [`OpenHashSet`](crate::OpenHashSet) and for
//! a few standard types (`String`, `Vec`, `Option`) where the laws hold.
//!
//! # Laws
//!
//! For the set instance, with `combine` as union and `empty()` the empty
//! set, the monoid laws are membership equalities:
//!
//! ```text
//! empty().combine(s)          == s
//! s.combine(empty())          == s
//! (a.combine(b)).combine(c)   == a.combine(b.combine(c))
//! ```
//!
//! and union is additionally commutative, because duplicate suppression
//! is symmetric.

mod foldable;
mod higher;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
