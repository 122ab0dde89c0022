//! Integration tests for comparison, hashing and formatting
//!
//! Tests index-first ordering and how valueless variants compare.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use vessel_foundation::Monostate;
use vessel_variant::Variant;

use crate::support::make_valueless;

type Small = Variant<(i8, i16)>;

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn valueless_sorts_before_everything() {
    let mut empty = Small::new(0i8);
    make_valueless::<_, 1>(&mut empty);
    let low = Small::new(i8::MIN);
    assert!(empty < low);
    assert!(empty <= low);
    assert!(low > empty);
    assert!(low >= empty);
    assert!(empty != low);
}

#[test]
fn two_valueless_are_equal() {
    let mut a = Small::new(1i8);
    let mut b = Small::new(2i16);
    make_valueless::<_, 0>(&mut a);
    make_valueless::<_, 1>(&mut b);
    assert_eq!(a, b);
    assert!(a <= b && a >= b);
}

#[test]
fn variants_sort_in_collections() {
    let set: BTreeSet<Variant<(u8, String)>> = [
        Variant::new(String::from("b")),
        Variant::new(200u8),
        Variant::new(String::from("a")),
        Variant::new(3u8),
    ]
    .into_iter()
    .collect();
    let rendered: Vec<String> = set.iter().map(|v| format!("{v:?}")).collect();
    assert_eq!(
        rendered,
        [
            "Variant(0, 3)",
            "Variant(0, 200)",
            "Variant(1, \"a\")",
            "Variant(1, \"b\")"
        ]
    );
}

// =============================================================================
// Hashing
// =============================================================================

#[test]
fn equal_values_at_different_indices_are_distinct_keys() {
    let mut set = HashSet::new();
    set.insert(Variant::<(u8, u8, Monostate)>::with_index::<0>(1));
    set.insert(Variant::<(u8, u8, Monostate)>::with_index::<1>(1));
    set.insert(Variant::<(u8, u8, Monostate)>::with_index::<1>(1));
    assert_eq!(set.len(), 2);
}

proptest! {
    #[test]
    fn index_first_ordering(a in any::<i8>(), b in any::<i16>()) {
        prop_assert!(Small::new(a) < Small::new(b));
        prop_assert_ne!(Small::new(a), Small::new(b));
    }

    #[test]
    fn copy_then_compare(a in any::<i16>()) {
        let v = Small::new(a);
        let w = v.clone();
        prop_assert_eq!(&w, &v);
        prop_assert_eq!(w.copied(), v);
    }

    #[test]
    fn same_alternative_orders_by_value(a in any::<i8>(), b in any::<i8>()) {
        prop_assert_eq!(Small::new(a).partial_cmp(&Small::new(b)), a.partial_cmp(&b));
    }
}
