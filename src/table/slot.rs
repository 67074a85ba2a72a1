//! Slot states and the fixed-size backing array.

// =============================================================================
// Slot Definition
// =============================================================================

/// One cell of the backing array.
///
/// The three states drive probe-walk termination:
///
/// - `Empty`: never occupied since the last resize; ends a probe search
///   (the key is absent).
/// - `Occupied`: holds exactly one member key.
/// - `Tombstone`: previously occupied, now removed. It does not end a
///   probe search, because a colliding key may have been placed beyond it,
///   but it is reusable by later insertions.
///
/// An explicit tagged state, rather than a sentinel value, keeps removal
/// well-defined for every key type.
#[derive(Clone, Debug, Default)]
pub(crate) enum Slot<T> {
    /// Never occupied since the last resize; terminates probing.
    #[default]
    Empty,
    /// Holds one member key.
    Occupied(T),
    /// Removed but not reclaimed; skipped while probing, reusable on insert.
    Tombstone,
}

impl<T> Slot<T> {
    /// Returns the contained key, if this slot is occupied.
    pub(crate) const fn key(&self) -> Option<&T> {
        match self {
            Self::Occupied(key) => Some(key),
            Self::Empty | Self::Tombstone => None,
        }
    }

    /// Consumes the slot, returning the contained key if occupied.
    pub(crate) fn into_key(self) -> Option<T> {
        match self {
            Self::Occupied(key) => Some(key),
            Self::Empty | Self::Tombstone => None,
        }
    }

    /// Returns `true` for the `Empty` state.
    pub(crate) const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` for the `Occupied` state.
    pub(crate) const fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }

    /// Returns `true` for the `Tombstone` state.
    pub(crate) const fn is_tombstone(&self) -> bool {
        matches!(self, Self::Tombstone)
    }
}

// =============================================================================
// SlotStore Definition
// =============================================================================

/// The fixed-size backing array of a set.
///
/// `SlotStore` is the only code that indexes storage directly. Its
/// capacity is set at construction and never changes; growing a set means
/// building a fresh store and rehashing into it.
#[derive(Clone, Debug)]
pub(crate) struct SlotStore<T> {
    slots: Box<[Slot<T>]>,
}

impl<T> SlotStore<T> {
    /// Creates a store of `capacity` empty slots.
    ///
    /// Capacity zero is never valid; callers clamp before construction.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "slot store capacity must be at least 1");
        Self {
            slots: (0..capacity).map(|_| Slot::Empty).collect(),
        }
    }

    /// Returns the number of slots.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the slot at `index`.
    pub(crate) fn slot(&self, index: usize) -> &Slot<T> {
        &self.slots[index]
    }

    /// Replaces the slot at `index`, returning the previous state.
    pub(crate) fn replace(&mut self, index: usize, slot: Slot<T>) -> Slot<T> {
        std::mem::replace(&mut self.slots[index], slot)
    }

    /// Iterates all slots in array order.
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Slot<T>> {
        self.slots.iter()
    }

    /// Consumes the store, yielding all slots in array order.
    pub(crate) fn into_slots(self) -> std::vec::IntoIter<Slot<T>> {
        self.slots.into_vec().into_iter()
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
    fn slot_default_is_empty() {
        let slot: Slot<i32> = Slot::default();
        assert!(slot.is_empty());
        assert!(!slot.is_occupied());
        assert!(!slot.is_tombstone());
    }

    #[rstest]
    fn slot_key_only_for_occupied() {
        assert_eq!(Slot::Occupied(7).key(), Some(&7));
        assert_eq!(Slot::<i32>::Empty.key(), None);
        assert_eq!(Slot::<i32>::Tombstone.key(), None);
    }

    #[rstest]
    fn slot_into_key_only_for_occupied() {
        assert_eq!(Slot::Occupied(7).into_key(), Some(7));
        assert_eq!(Slot::<i32>::Tombstone.into_key(), None);
    }

    #[rstest]
    fn store_starts_all_empty() {
        let store: SlotStore<i32> = SlotStore::with_capacity(8);
        assert_eq!(store.capacity(), 8);
        assert!(store.iter().all(Slot::is_empty));
    }

    #[rstest]
    fn store_replace_returns_previous_state() {
        let mut store: SlotStore<i32> = SlotStore::with_capacity(4);
        assert!(store.replace(2, Slot::Occupied(9)).is_empty());
        assert_eq!(store.slot(2).key(), Some(&9));

        let previous = store.replace(2, Slot::Tombstone);
        assert_eq!(previous.into_key(), Some(9));
        assert!(store.slot(2).is_tombstone());
    }

    #[rstest]
    fn store_into_slots_preserves_array_order() {
        let mut store: SlotStore<i32> = SlotStore::with_capacity(3);
        store.replace(1, Slot::Occupied(5));

        let keys: Vec<Option<i32>> = store.into_slots().map(Slot::into_key).collect();
        assert_eq!(keys, vec![None, Some(5), None]);
    }
}
