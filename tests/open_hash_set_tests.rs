//! Unit tests for `OpenHashSet`.
//!
//! These tests cover the imperative core (insert/remove/contains),
//! the functional layer (filter/map/fold/union), trait implementations,
//! and the resize behavior of the open-addressing table.

use openset::OpenHashSet;
use rstest::rstest;

// =============================================================================
// Creation
// =============================================================================

#[rstest]
fn test_new_creates_empty_set() {
    let set: OpenHashSet<i32> = OpenHashSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}

#[rstest]
fn test_default_creates_empty_set() {
    let set: OpenHashSet<i32> = OpenHashSet::default();
    assert!(set.is_empty());
}

#[rstest]
fn test_with_capacity_clamps_zero_to_one() {
    let set: OpenHashSet<i32> = OpenHashSet::with_capacity(0);
    assert_eq!(set.capacity(), 1);
}

#[rstest]
fn test_singleton_creates_single_member_set() {
    let set = OpenHashSet::singleton(42);
    assert_eq!(set.len(), 1);
    assert!(set.contains(&42));
}

// =============================================================================
// Insert and contains
// =============================================================================

#[rstest]
fn test_insert_reports_membership_change() {
    let mut set = OpenHashSet::new();
    assert!(set.insert(10));
    assert!(set.insert(20));
    assert!(!set.insert(10));
}

#[rstest]
fn test_contains_finds_inserted_members() {
    let mut set = OpenHashSet::new();
    set.insert(10);
    set.insert(20);

    assert!(set.contains(&10));
    assert!(set.contains(&20));
    assert!(!set.contains(&30));
}

#[rstest]
fn test_insert_duplicate_does_not_change_length() {
    let mut set = OpenHashSet::new();
    set.insert(42);
    set.insert(42);

    assert_eq!(set.len(), 1);
}

#[rstest]
fn test_contains_with_borrowed_key() {
    let mut set = OpenHashSet::new();
    set.insert("hello".to_string());
    set.insert("world".to_string());

    assert!(set.contains("hello"));
    assert!(set.contains("world"));
    assert!(!set.contains("other"));
}

// =============================================================================
// Remove
// =============================================================================

#[rstest]
fn test_remove_drops_membership() {
    let mut set = OpenHashSet::new();
    set.insert(10);
    set.insert(20);

    assert!(set.remove(&10));
    assert!(!set.contains(&10));
    assert!(set.contains(&20));
}

#[rstest]
fn test_remove_absent_member_is_noop() {
    let mut set: OpenHashSet<i32> = [1, 2].into_iter().collect();
    assert!(!set.remove(&3));
    assert_eq!(set.len(), 2);
}

#[rstest]
fn test_remove_then_reinsert() {
    let mut set: OpenHashSet<i32> = [1, 2, 3].into_iter().collect();
    set.remove(&2);
    assert!(set.insert(2));

    assert_eq!(set.len(), 3);
    assert!(set.contains(&2));
}

#[rstest]
fn test_removed_member_stays_findable_past_collisions() {
    // Many keys in a small table force probe chains through shared slots;
    // removing members must not cut later members out of their chains.
    let mut set: OpenHashSet<i32> = OpenHashSet::with_capacity(8);
    set.extend(0..50);

    for element in (0..50).step_by(2) {
        assert!(set.remove(&element));
    }

    for element in (1..50).step_by(2) {
        assert!(set.contains(&element), "lost member {element}");
    }
    assert_eq!(set.len(), 25);
}

// =============================================================================
// Length
// =============================================================================

#[rstest]
fn test_len_tracks_mutation() {
    let mut set = OpenHashSet::new();
    assert_eq!(set.len(), 0);
    set.insert(10);
    set.insert(20);
    assert_eq!(set.len(), 2);
    set.remove(&10);
    assert_eq!(set.len(), 1);
}

// =============================================================================
// Construction from iterators and iteration
// =============================================================================

#[rstest]
fn test_from_iterator_collapses_duplicates() {
    let set: OpenHashSet<i32> = [1, 2, 2, 3].into_iter().collect();

    assert_eq!(set.len(), 3);
    assert!(set.contains(&1));
    assert!(set.contains(&2));
    assert!(set.contains(&3));
}

#[rstest]
fn test_iter_yields_every_member_once() {
    let set: OpenHashSet<i32> = [10, 20].into_iter().collect();
    let mut elements: Vec<i32> = set.iter().copied().collect();
    elements.sort_unstable();

    assert_eq!(elements, vec![10, 20]);
}

#[rstest]
fn test_into_iterator_consumes_set() {
    let set: OpenHashSet<i32> = [1, 2, 3].into_iter().collect();
    let mut elements: Vec<i32> = set.into_iter().collect();
    elements.sort_unstable();

    assert_eq!(elements, vec![1, 2, 3]);
}

#[rstest]
fn test_extend_adds_members() {
    let mut set: OpenHashSet<i32> = [1].into_iter().collect();
    set.extend([2, 3, 3]);

    assert_eq!(set.len(), 3);
}

// =============================================================================
// Resize behavior
// =============================================================================

#[rstest]
fn test_growth_preserves_membership() {
    // Enough distinct keys to force several doublings from capacity 8.
    let mut set = OpenHashSet::new();
    for element in 0..1000 {
        assert!(set.insert(element));
    }

    assert_eq!(set.len(), 1000);
    assert!(set.capacity() > 8);
    for element in 0..1000 {
        assert!(set.contains(&element), "lost member {element}");
    }
}

#[rstest]
fn test_growth_does_not_resurrect_removed_members() {
    let mut set = OpenHashSet::new();
    set.extend(0..100);
    for element in 0..50 {
        set.remove(&element);
    }

    // Push past the next resize.
    set.extend(100..300);

    for element in 0..50 {
        assert!(!set.contains(&element));
    }
    for element in 50..300 {
        assert!(set.contains(&element));
    }
}

// =============================================================================
// Union
// =============================================================================

#[rstest]
fn test_union_contains_members_of_both() {
    let set_a: OpenHashSet<i32> = [1, 2].into_iter().collect();
    let set_b: OpenHashSet<i32> = [2, 3].into_iter().collect();

    let union = set_a.union(&set_b);

    assert_eq!(union.len(), 3);
    assert!(union.contains(&1));
    assert!(union.contains(&2));
    assert!(union.contains(&3));
}

#[rstest]
fn test_union_does_not_mutate_operands() {
    let set_a: OpenHashSet<i32> = [1].into_iter().collect();
    let set_b: OpenHashSet<i32> = [2].into_iter().collect();

    let _union = set_a.union(&set_b);

    assert_eq!(set_a.len(), 1);
    assert_eq!(set_b.len(), 1);
}

// =============================================================================
// Filter, map, fold
// =============================================================================

#[rstest]
fn test_filter_keeps_matching_members() {
    let set: OpenHashSet<i32> = (1..=10).collect();
    let evens = set.filter(|element| element % 2 == 0);

    assert_eq!(evens.len(), 5);
    assert!(evens.contains(&2));
    assert!(!evens.contains(&3));
    assert_eq!(set.len(), 10); // source untouched
}

#[rstest]
fn test_map_changes_member_type() {
    let set: OpenHashSet<i32> = [1, 2, 3].into_iter().collect();
    let strings = set.map(|element| element.to_string());

    assert_eq!(strings.len(), 3);
    assert!(strings.contains("2"));
}

#[rstest]
fn test_map_collapses_colliding_results() {
    let set: OpenHashSet<i32> = [1, 2, 3, 4].into_iter().collect();
    let parities = set.map(|element| element % 2);

    assert_eq!(parities.len(), 2);
    assert!(parities.contains(&0));
    assert!(parities.contains(&1));
}

#[rstest]
fn test_fold_accumulates_members() {
    let set: OpenHashSet<i32> = (1..=5).collect();
    let sum = set.fold(0, |accumulator, element| accumulator + element);

    assert_eq!(sum, 15);
}

// =============================================================================
// Equality and formatting
// =============================================================================

#[rstest]
fn test_equality_ignores_internal_layout() {
    // Same membership reached along different mutation histories.
    let set_a: OpenHashSet<i32> = [1, 2, 3].into_iter().collect();

    let mut set_b: OpenHashSet<i32> = OpenHashSet::with_capacity(64);
    set_b.extend([3, 7, 2, 1]);
    set_b.remove(&7);

    assert_eq!(set_a, set_b);
}

#[rstest]
fn test_inequality_on_different_membership() {
    let set_a: OpenHashSet<i32> = [1, 2].into_iter().collect();
    let set_b: OpenHashSet<i32> = [1, 3].into_iter().collect();

    assert_ne!(set_a, set_b);
}

#[rstest]
fn test_clone_is_independent() {
    let original: OpenHashSet<i32> = [1, 2].into_iter().collect();
    let mut cloned = original.clone();
    cloned.insert(3);

    assert_eq!(original.len(), 2);
    assert_eq!(cloned.len(), 3);
}

#[rstest]
fn test_debug_uses_set_notation() {
    let set = OpenHashSet::singleton(1);
    assert_eq!(format!("{set:?}"), "{1}");
}

#[rstest]
fn test_display_is_brace_delimited() {
    let set = OpenHashSet::singleton(7);
    assert_eq!(set.to_string(), "{7}");

    let empty: OpenHashSet<i32> = OpenHashSet::new();
    assert_eq!(empty.to_string(), "{}");
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[rstest]
fn test_scenario_duplicates_collapse() {
    let set: OpenHashSet<i32> = [1, 2, 2, 3].into_iter().collect();

    assert_eq!(set.len(), 3);
    let mut elements: Vec<i32> = set.iter().copied().collect();
    elements.sort_unstable();
    assert_eq!(elements, vec![1, 2, 3]);
}

#[rstest]
fn test_scenario_remove_updates_membership_and_size() {
    let mut set: OpenHashSet<i32> = [1, 2, 3].into_iter().collect();
    set.remove(&2);

    assert!(!set.contains(&2));
    assert_eq!(set.len(), 2);
}

#[rstest]
fn test_scenario_parity_map() {
    let set: OpenHashSet<i32> = [1, 2, 3].into_iter().collect();
    let parities = set.map(|element| element % 2);

    assert_eq!(parities.len(), 2);
    assert!(parities.contains(&0));
    assert!(parities.contains(&1));
}

#[rstest]
fn test_scenario_filter_evens() {
    let set: OpenHashSet<i32> = [1, 2, 3, 4].into_iter().collect();
    let evens = set.filter(|element| element % 2 == 0);

    let expected: OpenHashSet<i32> = [2, 4].into_iter().collect();
    assert_eq!(evens, expected);
}

#[rstest]
fn test_scenario_fold_sums() {
    let set: OpenHashSet<i32> = [1, 2, 3, 4].into_iter().collect();
    assert_eq!(set.fold(0, |accumulator, element| accumulator + element), 10);
}
