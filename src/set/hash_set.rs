//! A mutable hash set over open addressing with linear probing.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;
use std::mem;

use crate::table::{ProbeSequence, Slot, SlotStore, compute_hash};

use super::iter::{OpenHashSetIntoIterator, OpenHashSetIterator};

// =============================================================================
// Constants
// =============================================================================

/// Capacity of a freshly created set.
const DEFAULT_CAPACITY: usize = 8;

/// Factor by which the table grows on resize.
const GROWTH_FACTOR: usize = 2;

/// Load factor threshold as a fraction: resize when
/// `(occupied + tombstones) / capacity` exceeds 7/10.
const LOAD_FACTOR_NUMERATOR: usize = 7;
const LOAD_FACTOR_DENOMINATOR: usize = 10;

// =============================================================================
// Probe outcome
// =============================================================================

/// Outcome of an insertion probe walk.
enum Location {
    /// The key already occupies a slot.
    Present,
    /// First slot the key may be placed in: the first tombstone along the
    /// probe sequence, or the terminating empty slot when there is none.
    Reusable(usize),
    /// Every slot is occupied or tombstoned and none holds the key. Only
    /// reachable transiently; the load-factor bound keeps empty slots
    /// available in steady state.
    Saturated,
}

// =============================================================================
// OpenHashSet Definition
// =============================================================================

/// A hash set implemented directly over open addressing with linear
/// probing.
///
/// All members live in a single flat slot array. A slot is either empty,
/// occupied, or a tombstone left behind by a removal. Lookups walk the
/// probe sequence of the key until they hit the key or an empty slot;
/// tombstones are skipped so colliding keys placed beyond them stay
/// reachable, and are reused by later insertions.
///
/// The table doubles its capacity whenever the load factor — occupied plus
/// tombstoned slots over capacity — would exceed 7/10 after an insertion.
/// Resizing rehashes the occupied slots only, so tombstones never survive
/// a resize. Removal never shrinks the table.
///
/// It is a logic error for a key to be mutated in a way that changes its
/// hash while it is in the set; the API therefore never hands out mutable
/// references to members.
///
/// # Time Complexity
///
/// | Operation  | Complexity        |
/// |------------|-------------------|
/// | `new`      | O(1)              |
/// | `contains` | O(1) amortized    |
/// | `insert`   | O(1) amortized*   |
/// | `remove`   | O(1) amortized    |
/// | `len`      | O(1)              |
/// | `union`    | O(n + m)          |
/// | `filter`   | O(n)              |
/// | `map`      | O(n)              |
///
/// \* O(n) when the insertion triggers a resize.
///
/// # Examples
///
/// ```rust
/// use openset::OpenHashSet;
///
/// let mut set = OpenHashSet::new();
/// assert!(set.insert(1));
/// assert!(set.insert(2));
/// assert!(!set.insert(2)); // already present
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&1));
///
/// assert!(set.remove(&1));
/// assert!(!set.contains(&1));
/// ```
#[derive(Clone)]
pub struct OpenHashSet<T> {
    store: SlotStore<T>,
    occupied: usize,
    tombstones: usize,
}

impl<T> OpenHashSet<T> {
    /// Creates an empty set with the default capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::OpenHashSet;
    ///
    /// let set: OpenHashSet<i32> = OpenHashSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty set with at least the given capacity.
    ///
    /// A capacity of zero is clamped to one; the backing array is never
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::OpenHashSet;
    ///
    /// let set: OpenHashSet<i32> = OpenHashSet::with_capacity(32);
    /// assert_eq!(set.capacity(), 32);
    ///
    /// let clamped: OpenHashSet<i32> = OpenHashSet::with_capacity(0);
    /// assert_eq!(clamped.capacity(), 1);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: SlotStore::with_capacity(capacity.max(1)),
            occupied: 0,
            tombstones: 0,
        }
    }

    /// Returns the number of members in the set.
    ///
    /// # Complexity
    ///
    /// O(1); the count is tracked, not recomputed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::OpenHashSet;
    ///
    /// let set: OpenHashSet<i32> = [1, 2, 2, 3].into_iter().collect();
    /// assert_eq!(set.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.occupied
    }

    /// Returns `true` if the set contains no members.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::OpenHashSet;
    ///
    /// let set: OpenHashSet<i32> = OpenHashSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Returns the current capacity of the backing array.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Returns an iterator over the members of the set.
    ///
    /// Members are yielded in slot-array order. That order is
    /// deterministic for a given internal state but otherwise
    /// unspecified; in particular it is not insertion order and may
    /// change across a resize.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::OpenHashSet;
    ///
    /// let set: OpenHashSet<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(set.iter().count(), 3);
    /// ```
    #[must_use]
    pub fn iter(&self) -> OpenHashSetIterator<'_, T> {
        OpenHashSetIterator::new(self.store.iter(), self.occupied)
    }
}

impl<T: Hash + Eq> OpenHashSet<T> {
    /// Creates a set containing a single member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::OpenHashSet;
    ///
    /// let set = OpenHashSet::singleton(42);
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(&42));
    /// ```
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::new();
        set.insert(element);
        set
    }

    /// Returns `true` if the set contains the given element.
    ///
    /// The element may be any borrowed form of the set's member type, as
    /// long as `Hash` and `Eq` on the borrowed form match the member
    /// type's.
    ///
    /// # Complexity
    ///
    /// O(1) amortized; the probe walk ends at the first empty slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::OpenHashSet;
    ///
    /// let mut set = OpenHashSet::new();
    /// set.insert("hello".to_string());
    ///
    /// // Look up with &str, no allocation needed
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_occupied(element).is_some()
    }

    /// Adds an element to the set.
    ///
    /// Returns whether the set changed: `false` if the element was
    /// already present (the set is untouched), `true` if it was placed in
    /// the first empty or tombstoned slot along its probe sequence. When
    /// the insertion pushes the load factor past 7/10 the table doubles
    /// its capacity before this method returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::OpenHashSet;
    ///
    /// let mut set = OpenHashSet::new();
    /// assert!(set.insert(7));
    /// assert!(!set.insert(7));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        match self.locate(&element) {
            Location::Present => false,
            Location::Reusable(index) => {
                let displaced = self.store.replace(index, Slot::Occupied(element));
                self.occupied += 1;
                if displaced.is_tombstone() {
                    self.tombstones -= 1;
                }
                if self.over_load_limit() {
                    self.grow();
                }
                true
            }
            Location::Saturated => {
                // Every slot occupied, key absent. Grow first; the fresh
                // table has empty slots again.
                self.grow();
                self.insert(element)
            }
        }
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present. The slot is overwritten
    /// with a tombstone rather than emptied, so members that collided
    /// past it remain reachable. Removal never triggers a resize.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::OpenHashSet;
    ///
    /// let mut set: OpenHashSet<i32> = [1, 2, 3].into_iter().collect();
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&2)); // already gone
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(index) = self.find_occupied(element) else {
            return false;
        };

        self.store.replace(index, Slot::Tombstone);
        self.occupied -= 1;
        self.tombstones += 1;
        true
    }

    /// Returns a new set containing the members of both sets.
    ///
    /// Neither receiver is mutated; the result owns fresh backing
    /// storage. Union is associative, has the empty set as identity, and
    /// produces the same membership regardless of operand order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::OpenHashSet;
    ///
    /// let set_a: OpenHashSet<i32> = [1, 2].into_iter().collect();
    /// let set_b: OpenHashSet<i32> = [2, 3].into_iter().collect();
    ///
    /// let union = set_a.union(&set_b);
    /// assert_eq!(union.len(), 3);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut result = self.clone();
        result.extend(other.iter().cloned());
        result
    }

    /// Returns a new set with the members satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::OpenHashSet;
    ///
    /// let set: OpenHashSet<i32> = (1..=4).collect();
    /// let evens = set.filter(|element| element % 2 == 0);
    ///
    /// assert_eq!(evens.len(), 2);
    /// assert!(evens.contains(&2));
    /// assert!(evens.contains(&4));
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// Returns a new set with `function` applied to every member.
    ///
    /// The function need not be injective: members that map to the same
    /// result collapse into one, so the result may be strictly smaller
    /// than the source. That is correct set behavior, not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::OpenHashSet;
    ///
    /// let set: OpenHashSet<i32> = [1, 2, 3].into_iter().collect();
    /// let parities = set.map(|element| element % 2);
    ///
    /// assert_eq!(parities.len(), 2); // {0, 1}
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> OpenHashSet<U>
    where
        U: Hash + Eq,
        F: FnMut(&T) -> U,
    {
        self.iter().map(function).collect()
    }

    /// Folds `function` over the members, starting from `init`.
    ///
    /// Members are visited in slot-array order, which is unspecified
    /// (see [`iter`](Self::iter)). The result is therefore only
    /// order-independent for functions that are associative and
    /// commutative in the accumulator; that is a documented precondition,
    /// not something this method enforces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openset::OpenHashSet;
    ///
    /// let set: OpenHashSet<i32> = (1..=4).collect();
    /// let sum = set.fold(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 10);
    /// ```
    pub fn fold<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(init, function)
    }
}

// =============================================================================
// Internal table operations
// =============================================================================

impl<T: Hash + Eq> OpenHashSet<T> {
    /// Starts the probe sequence for `element` over the current capacity.
    fn probe<Q: Hash + ?Sized>(&self, element: &Q) -> ProbeSequence {
        ProbeSequence::new(compute_hash(element), self.store.capacity())
    }

    /// Finds the slot index currently holding `element`, if any.
    ///
    /// Walks the probe sequence, skipping tombstones and foreign keys,
    /// stopping at the first empty slot. Exhausting the sequence without
    /// a hit means the element is absent.
    fn find_occupied<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        for index in self.probe(element) {
            match self.store.slot(index) {
                Slot::Occupied(key) if key.borrow() == element => return Some(index),
                Slot::Empty => return None,
                Slot::Occupied(_) | Slot::Tombstone => {}
            }
        }
        None
    }

    /// Classifies the probe walk for an insertion.
    ///
    /// Remembers the first tombstone seen so it can be reused, but keeps
    /// walking to the first empty slot to rule out a duplicate placed
    /// beyond the tombstone.
    fn locate(&self, element: &T) -> Location {
        let mut reusable = None;

        for index in self.probe(element) {
            match self.store.slot(index) {
                Slot::Occupied(key) if key == element => return Location::Present,
                Slot::Occupied(_) => {}
                Slot::Tombstone => {
                    if reusable.is_none() {
                        reusable = Some(index);
                    }
                }
                Slot::Empty => return Location::Reusable(reusable.unwrap_or(index)),
            }
        }

        reusable.map_or(Location::Saturated, Location::Reusable)
    }

    /// True when the load factor exceeds the resize threshold.
    fn over_load_limit(&self) -> bool {
        (self.occupied + self.tombstones) * LOAD_FACTOR_DENOMINATOR
            > self.store.capacity() * LOAD_FACTOR_NUMERATOR
    }

    /// Doubles the capacity and rehashes all occupied slots.
    ///
    /// Tombstones are dropped, not carried over; after a grow the
    /// tombstone count is zero. The swap is not observable mid-way: the
    /// old store is consumed only after the new one is in place, and
    /// nothing reads the set while this runs.
    fn grow(&mut self) {
        let new_capacity = self.store.capacity() * GROWTH_FACTOR;
        let old_store = mem::replace(&mut self.store, SlotStore::with_capacity(new_capacity));
        self.occupied = 0;
        self.tombstones = 0;

        for element in old_store.into_slots().filter_map(Slot::into_key) {
            self.place(element);
        }
    }

    /// Places a key known to be absent into a table with empty slots.
    ///
    /// Used only while rehashing: the fresh table has no tombstones and
    /// the keys being replayed are unique, so the probe walk always ends
    /// at an empty slot.
    fn place(&mut self, element: T) {
        if let Location::Reusable(index) = self.locate(&element) {
            self.store.replace(index, Slot::Occupied(element));
            self.occupied += 1;
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for OpenHashSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for OpenHashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq> Extend<T> for OpenHashSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Hash + Eq> IntoIterator for OpenHashSet<T> {
    type Item = T;
    type IntoIter = OpenHashSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        OpenHashSetIntoIterator::new(self.store.into_slots(), self.occupied)
    }
}

impl<'a, T> IntoIterator for &'a OpenHashSet<T> {
    type Item = &'a T;
    type IntoIter = OpenHashSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Membership equality: two sets are equal when they contain the same
/// members, regardless of capacity, tombstones, or slot layout.
impl<T: Hash + Eq> PartialEq for OpenHashSet<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter().all(|element| other.contains(element))
    }
}

impl<T: Hash + Eq> Eq for OpenHashSet<T> {}

impl<T: Hash + Eq + fmt::Debug> fmt::Debug for OpenHashSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq + fmt::Display> fmt::Display for OpenHashSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests (internal invariants; the public surface is tested in `tests/`)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn occupied_slot_count<T>(set: &OpenHashSet<T>) -> usize {
        set.store.iter().filter(|slot| slot.is_occupied()).count()
    }

    fn tombstone_slot_count<T>(set: &OpenHashSet<T>) -> usize {
        set.store.iter().filter(|slot| slot.is_tombstone()).count()
    }

    fn within_load_limit<T>(set: &OpenHashSet<T>) -> bool {
        (set.occupied + set.tombstones) * LOAD_FACTOR_DENOMINATOR
            <= set.capacity() * LOAD_FACTOR_NUMERATOR
    }

    #[rstest]
    fn remove_leaves_a_tombstone() {
        let mut set: OpenHashSet<i32> = [1, 2, 3].into_iter().collect();
        set.remove(&2);

        assert_eq!(set.tombstones, 1);
        assert_eq!(tombstone_slot_count(&set), 1);
        assert_eq!(occupied_slot_count(&set), 2);
    }

    #[rstest]
    fn insert_reuses_a_tombstoned_slot() {
        let mut set: OpenHashSet<i32> = [1, 2, 3].into_iter().collect();
        set.remove(&2);
        set.insert(2);

        assert_eq!(set.tombstones, 0);
        assert_eq!(tombstone_slot_count(&set), 0);
        assert_eq!(set.len(), 3);
    }

    #[rstest]
    fn grow_doubles_capacity_and_drops_tombstones() {
        let mut set: OpenHashSet<i32> = OpenHashSet::with_capacity(8);
        set.extend(0..4);
        set.remove(&0);
        set.remove(&1);

        // 2 occupied + 2 tombstones; pushing to 6 non-empty slots on an
        // 8-slot table crosses 7/10 and forces a grow.
        set.extend(10..14);

        assert_eq!(set.capacity(), 16);
        assert_eq!(set.tombstones, 0);
        assert_eq!(tombstone_slot_count(&set), 0);
        assert_eq!(set.len(), 6);
    }

    #[rstest]
    fn capacity_one_table_grows_immediately() {
        let mut set: OpenHashSet<i32> = OpenHashSet::with_capacity(1);
        assert!(set.insert(1));
        assert!(set.insert(2));

        assert!(set.contains(&1));
        assert!(set.contains(&2));
        assert!(within_load_limit(&set));
    }

    proptest! {
        // `occupied` always equals the number of occupied slots, and the
        // load factor bound holds after every mutation.
        #[test]
        fn prop_counters_match_slots_after_mutation(
            inserts in prop::collection::vec(any::<i16>(), 0..100),
            removes in prop::collection::vec(any::<i16>(), 0..100)
        ) {
            let mut set = OpenHashSet::new();

            for element in inserts {
                set.insert(element);
                prop_assert_eq!(set.occupied, occupied_slot_count(&set));
                prop_assert!(within_load_limit(&set));
            }

            for element in &removes {
                set.remove(element);
                prop_assert_eq!(set.occupied, occupied_slot_count(&set));
                prop_assert_eq!(set.tombstones, tombstone_slot_count(&set));
                prop_assert!(within_load_limit(&set));
            }
        }

        // No key ever occupies two slots.
        #[test]
        fn prop_members_are_unique_in_storage(
            elements in prop::collection::vec(any::<i8>(), 0..200)
        ) {
            let set: OpenHashSet<i8> = elements.into_iter().collect();

            let mut seen: Vec<i8> = set.store.iter().filter_map(|slot| slot.key().copied()).collect();
            let total = seen.len();
            seen.sort_unstable();
            seen.dedup();

            prop_assert_eq!(seen.len(), total);
            prop_assert_eq!(total, set.len());
        }
    }
}
