//! Intersection Algebra Tests
//!
//! Tests for `Index::and`:
//! - Result is the set intersection, ascending, no duplicates
//! - Commutative and associative in the set it yields
//! - Repeatable traversal

use std::collections::BTreeSet;

use proptest::prelude::*;
use rowdex::index::{IndexError, RangeIndex};
use rowdex::{Index, Position, SortedIndex, Store};

// =============================================================================
// Helper Functions
// =============================================================================

fn collect(index: &impl Index) -> Vec<Position> {
    index.positions().collect()
}

fn arb_sorted() -> impl Strategy<Value = Vec<Position>> {
    prop::collection::btree_set(0usize..300, 0..80).prop_map(|set| set.into_iter().collect())
}

fn set_intersection(a: &[Position], b: &[Position]) -> Vec<Position> {
    let b: BTreeSet<_> = b.iter().copied().collect();
    a.iter().copied().filter(|p| b.contains(p)).collect()
}

// =============================================================================
// Scenario Tests
// =============================================================================

/// [1,2,3,4] and [2,4,7] meet at [2,4].
#[test]
fn test_wrapped_lists() {
    let index = SortedIndex::of(vec![1, 2, 3, 4]).and(SortedIndex::of(vec![2, 4, 7]));
    assert_eq!(collect(&index), vec![2, 4]);
}

/// Traversing an intersection twice yields the same sequence.
#[test]
fn test_repeatable() {
    let index = SortedIndex::of(vec![0, 5, 10, 15]).and(RangeIndex::new(3..12));
    assert_eq!(collect(&index), vec![5, 10]);
    assert_eq!(collect(&index), vec![5, 10]);
}

/// Intersecting with a selector re-catches it up on every traversal.
#[test]
fn test_selector_operand_catches_up_per_traversal() {
    let store = Store::new();
    store.extend(0..10u32);
    let even = store.add_selector(|i: &u32| i % 2 == 0);
    let index = (&even).and(SortedIndex::of(vec![2, 3, 10, 12]));

    assert_eq!(collect(&index), vec![2]);
    store.extend(10..13);
    assert_eq!(collect(&index), vec![2, 10, 12]);
}

/// Validated construction rejects unsorted input.
#[test]
fn test_try_of_rejects_unsorted() {
    let err = SortedIndex::try_of(vec![4, 2]).unwrap_err();
    assert!(matches!(err, IndexError::NotAscending { slot: 1, previous: 4, current: 2 }));
    assert_eq!(err.code(), "ROWDEX_INDEX_NOT_ASCENDING");
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// The merge yields exactly the set intersection, ascending.
    #[test]
    fn prop_matches_set_intersection(a in arb_sorted(), b in arb_sorted()) {
        let merged = collect(&SortedIndex::of(a.clone()).and(SortedIndex::of(b.clone())));
        prop_assert_eq!(&merged, &set_intersection(&a, &b));
        prop_assert!(merged.windows(2).all(|pair| pair[0] < pair[1]));
    }

    /// a ∧ b = b ∧ a
    #[test]
    fn prop_commutative(a in arb_sorted(), b in arb_sorted()) {
        let ab = collect(&SortedIndex::of(a.clone()).and(SortedIndex::of(b.clone())));
        let ba = collect(&SortedIndex::of(b).and(SortedIndex::of(a)));
        prop_assert_eq!(ab, ba);
    }

    /// (a ∧ b) ∧ c = a ∧ (b ∧ c) = (c ∧ a) ∧ b
    #[test]
    fn prop_associative(a in arb_sorted(), b in arb_sorted(), c in arb_sorted()) {
        let (a, b, c) = (SortedIndex::of(a), SortedIndex::of(b), SortedIndex::of(c));
        let left = collect(&a.clone().and(b.clone()).and(c.clone()));
        let right = collect(&a.clone().and(b.clone().and(c.clone())));
        let rotated = collect(&c.and(a).and(b));
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(&left, &rotated);
    }
}
