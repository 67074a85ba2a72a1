//! Hash computation and the linear probe sequence.

use std::hash::{Hash, Hasher};

#[cfg(feature = "fxhash")]
use rustc_hash::FxHasher as SelectedHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
use ahash::AHasher as SelectedHasher;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
use std::collections::hash_map::DefaultHasher as SelectedHasher;

// =============================================================================
// Hash computation
// =============================================================================

/// Computes the hash of a key with the configured hasher.
///
/// The hasher is constructed via `Default`, so equal keys hash equally for
/// the lifetime of the process. That determinism is all the table needs:
/// probe sequences are a pure function of the hash and the capacity.
pub(crate) fn compute_hash<K: Hash + ?Sized>(key: &K) -> u64 {
    let mut hasher = SelectedHasher::default();
    key.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// ProbeSequence Definition
// =============================================================================

/// The deterministic sequence of candidate slot indices for one key.
///
/// Linear probing over a table of `capacity` slots: the walk starts at
/// `hash % capacity` and advances one slot at a time, wrapping at the end
/// of the array. The sequence is finite with length exactly `capacity`,
/// visiting every index once, so every probe walk terminates even on a
/// table with no empty slot left.
#[derive(Clone, Debug)]
pub(crate) struct ProbeSequence {
    index: usize,
    remaining: usize,
    capacity: usize,
}

impl ProbeSequence {
    /// Starts a probe sequence for `hash` over a table of `capacity` slots.
    pub(crate) fn new(hash: u64, capacity: usize) -> Self {
        debug_assert!(capacity > 0, "cannot probe a zero-capacity table");
        #[allow(clippy::cast_possible_truncation)]
        let start = (hash % capacity as u64) as usize;
        Self {
            index: start,
            remaining: capacity,
            capacity,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.index;
        self.index = (self.index + 1) % self.capacity;
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

impl std::iter::FusedIterator for ProbeSequence {}

// =============================================================================
// Tests
// =============================================================================
