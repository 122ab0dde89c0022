//! Integration tests for value-changing operations
//!
//! Tests assignment, emplacement and swapping, including the state left
//! behind when they panic.

use std::panic::{self, AssertUnwindSafe};

use proptest::prelude::*;
use vessel_variant::Variant;

use crate::support::{CloneBomb, make_valueless};

/// `clone_from` mutates, then panics.
#[derive(Debug, PartialEq)]
struct HalfAssign(Vec<u8>);

impl Clone for HalfAssign {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.0.clear();
        self.0.extend_from_slice(&source.0[..1]);
        panic!("partial assignment");
    }
}

// =============================================================================
// Copy Assignment
// =============================================================================

#[test]
fn clone_from_valueless_source_empties_target() {
    let mut source: Variant<(u8, String)> = Variant::new(1u8);
    make_valueless::<_, 1>(&mut source);
    let mut target: Variant<(u8, String)> = Variant::new(String::from("x"));
    target.clone_from(&source);
    assert!(target.valueless_by_exception());
}

#[test]
fn clone_from_between_valueless_is_noop() {
    let mut source: Variant<(u8, String)> = Variant::new(1u8);
    let mut target = source.clone();
    make_valueless::<_, 1>(&mut source);
    make_valueless::<_, 1>(&mut target);
    target.clone_from(&source);
    assert!(target.valueless_by_exception());
}

#[test]
fn clone_from_into_valueless_target_recovers() {
    let source: Variant<(u8, String)> = Variant::new(String::from("back"));
    let mut target: Variant<(u8, String)> = Variant::new(1u8);
    make_valueless::<_, 0>(&mut target);
    target.clone_from(&source);
    assert_eq!(target.get::<1>().map(String::as_str), Ok("back"));
}

#[test]
fn same_alternative_panic_keeps_partial_state() {
    let source: Variant<(u8, HalfAssign)> = Variant::new(HalfAssign(vec![7, 8, 9]));
    let mut target: Variant<(u8, HalfAssign)> = Variant::new(HalfAssign(vec![1, 2]));
    let result = panic::catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
    assert!(result.is_err());
    assert!(!target.valueless_by_exception());
    assert_eq!(target.get::<1>(), Ok(&HalfAssign(vec![7])));
}

#[test]
fn failed_side_copy_keeps_destination() {
    let source: Variant<(String, CloneBomb)> = Variant::new(CloneBomb(1));
    let mut target: Variant<(String, CloneBomb)> = Variant::new(String::from("safe"));
    let result = panic::catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
    assert!(result.is_err());
    assert_eq!(target.get::<0>().map(String::as_str), Ok("safe"));
}

// =============================================================================
// Value Assignment
// =============================================================================

#[test]
fn assign_same_type_in_place() {
    let mut v: Variant<(u8, Vec<u32>)> = Variant::new(Vec::<u32>::with_capacity(64));
    let before = v.get::<1>().map(Vec::as_ptr).unwrap();
    v.get_mut::<1>().unwrap().push(1);
    v.assign(vec![5u32]);
    assert_eq!(v.get::<1>(), Ok(&vec![5]));
    assert_ne!(v.get::<1>().map(Vec::as_ptr).unwrap(), before);
}

#[test]
fn assign_converted_best_match() {
    let mut v: Variant<(String, i64)> = Variant::new(String::new());
    v.assign_converted(12u8);
    assert_eq!(v.get::<1>(), Ok(&12));
    v.assign_converted("text");
    assert_eq!(v.get::<0>().map(String::as_str), Ok("text"));
}

#[test]
fn emplace_recovers_valueless() {
    let mut v: Variant<(u8, String)> = Variant::new(1u8);
    make_valueless::<_, 1>(&mut v);
    v.emplace_as(String::from("again"));
    assert_eq!(v.index(), 1);
}

#[test]
fn try_emplace_error_is_returned() {
    let mut v: Variant<(u8, u32)> = Variant::new(1u8);
    let result = v.try_emplace_with::<1, _, _>(|| "12x".parse::<u32>());
    assert!(result.is_err());
    assert!(v.valueless_by_exception());
    let result = v.try_emplace_with::<1, _, _>(|| "12".parse::<u32>());
    assert_eq!(result.map(|n| *n), Ok(12));
}

// =============================================================================
// Swap
// =============================================================================

#[test]
fn swap_different_alternatives() {
    let mut a: Variant<(u8, String)> = Variant::new(4u8);
    let mut b: Variant<(u8, String)> = Variant::new(String::from("four"));
    a.swap(&mut b);
    assert_eq!(a.get::<1>().map(String::as_str), Ok("four"));
    assert_eq!(b.get::<0>(), Ok(&4));
}

#[test]
fn swap_moves_valueless_state() {
    let mut a: Variant<(u8, String)> = Variant::new(4u8);
    let mut b: Variant<(u8, String)> = Variant::new(5u8);
    make_valueless::<_, 1>(&mut b);
    a.swap(&mut b);
    assert!(a.valueless_by_exception());
    assert_eq!(b.get::<0>(), Ok(&4));
}

type Small = Variant<(i8, String)>;

fn small() -> impl Strategy<Value = Small> {
    prop_oneof![
        any::<i8>().prop_map(Small::new),
        "[a-z]{0,12}".prop_map(Small::new),
    ]
}

proptest! {
    #[test]
    fn swap_is_an_involution(a in small(), b in small()) {
        let (mut x, mut y) = (a.clone(), b.clone());
        x.swap(&mut y);
        prop_assert_eq!(&x, &b);
        prop_assert_eq!(&y, &a);
        y.swap(&mut x);
        prop_assert_eq!(&x, &a);
        prop_assert_eq!(&y, &b);
    }

    #[test]
    fn emplace_is_idempotent(start in small(), text in "[a-z]{0,12}") {
        let mut once = start.clone();
        once.emplace::<1>(text.clone());
        let mut twice = start;
        twice.emplace::<1>(text.clone());
        twice.emplace::<1>(text);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn clone_from_equals_source(target in small(), source in small()) {
        let mut target = target;
        target.clone_from(&source);
        prop_assert_eq!(target, source);
    }
}
