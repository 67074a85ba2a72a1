//! # openset
//!
//! A hash set built directly on open addressing with linear probing,
//! exposing both imperative mutation and a functional, monoid-style API.
//!
//! ## Overview
//!
//! The central type is [`OpenHashSet`], a set that stores its members in a
//! single flat slot array. Collisions are resolved by linear probing,
//! removals leave tombstones so that colliding keys stay reachable, and the
//! table doubles its capacity whenever the load factor (occupied plus
//! tombstoned slots over capacity) would exceed 7/10.
//!
//! On top of the imperative core (`insert`/`remove`/`contains`), the crate
//! provides a functional layer:
//!
//! - `filter`, `map`, `fold` and `union` as non-mutating operations that
//!   build new sets
//! - [`Semigroup`](algebra::Semigroup)/[`Monoid`](algebra::Monoid)
//!   instances (`union` with the empty set as identity)
//! - a [`Foldable`](algebra::Foldable) instance for generic folding
//!
//! ## Feature Flags
//!
//! - `algebra` (default): the type class layer (`Semigroup`, `Monoid`,
//!   `Foldable`)
//! - `fxhash`: hash with `rustc-hash` instead of the standard hasher
//! - `ahash`: hash with `ahash` instead of the standard hasher
//!
//! ## Example
//!
//! ```rust
//! use openset::OpenHashSet;
//!
//! let mut set = OpenHashSet::new();
//! set.insert(1);
//! set.insert(2);
//! set.insert(2); // duplicate, no effect
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(&1));
//!
//! let doubled = set.map(|element| element * 2);
//! assert!(doubled.contains(&4));
//! ```
//!
//! ## Concurrency
//!
//! `OpenHashSet` is single-threaded by design: no operation blocks or
//! yields, resizing happens inline inside the triggering `insert`, and a
//! set exclusively owns its backing storage. Sharing a set across threads
//! requires external synchronization.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use openset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;

    #[cfg(feature = "algebra")]
    pub use crate::algebra::*;
}

pub(crate) mod table;

pub mod set;

#[cfg(feature = "algebra")]
pub mod algebra;

pub use set::OpenHashSet;
