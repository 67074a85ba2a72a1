//! The open-addressing hash set and its iterators.
//!
//! This module provides [`OpenHashSet`], a mutable hash set stored in a
//! single flat slot array with linear probing, and its borrowed and
//! owning iterators.
//!
//! # Layering
//!
//! The set core (`insert`/`remove`/`contains`/`len` and resizing) is the
//! only code that talks to the slot store. The functional layer
//! (`filter`/`map`/`fold`/`union`) is built purely from iteration and
//! `insert`, so it can never violate the table invariants.
//!
//! # Examples
//!
//! ```rust
//! use openset::set::OpenHashSet;
//!
//! let mut set: OpenHashSet<i32> = (1..=4).collect();
//! set.remove(&3);
//!
//! let evens = set.filter(|element| element % 2 == 0);
//! assert_eq!(evens.len(), 2);
//! ```

mod hash_set;
mod iter;

pub use hash_set::OpenHashSet;
pub use iter::{OpenHashSetIntoIterator, OpenHashSetIterator};
