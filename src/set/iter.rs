//! Iterators over the occupied slots of an [`OpenHashSet`].
//!
//! Both iterators walk the slot array in order, skipping empty and
//! tombstoned slots, so they yield members in the set's slot-array order.
//!
//! [`OpenHashSet`]: super::OpenHashSet

use std::iter::FusedIterator;

use crate::table::Slot;

// =============================================================================
// Borrowed Iterator
// =============================================================================

/// A borrowed iterator over the members of an
/// [`OpenHashSet`](super::OpenHashSet).
pub struct OpenHashSetIterator<'a, T> {
    slots: std::slice::Iter<'a, Slot<T>>,
    remaining: usize,
}

impl<'a, T> OpenHashSetIterator<'a, T> {
    pub(crate) fn new(slots: std::slice::Iter<'a, Slot<T>>, remaining: usize) -> Self {
        Self { slots, remaining }
    }
}

impl<'a, T> Iterator for OpenHashSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.slots.by_ref().find_map(Slot::key)?;
        self.remaining -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for OpenHashSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for OpenHashSetIterator<'_, T> {}

// =============================================================================
// Owning Iterator
// =============================================================================

/// An owning iterator over the members of an
/// [`OpenHashSet`](super::OpenHashSet).
pub struct OpenHashSetIntoIterator<T> {
    slots: std::vec::IntoIter<Slot<T>>,
    remaining: usize,
}

impl<T> OpenHashSetIntoIterator<T> {
    pub(crate) fn new(slots: std::vec::IntoIter<Slot<T>>, remaining: usize) -> Self {
        Self { slots, remaining }
    }
}

impl<T> Iterator for OpenHashSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.slots.by_ref().find_map(Slot::into_key)?;
        self.remaining -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for OpenHashSetIntoIterator<T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for OpenHashSetIntoIterator<T> {}

// =============================================================================
// Tests
// =============================================================================
