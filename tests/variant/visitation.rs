//! Integration tests for visitation
//!
//! Tests single, multi and mutable visits, and the empty visitor.

use vessel_foundation::Monostate;
use vessel_variant::{Variant, Visitor, visit};

use crate::support::{Anchored, Magnitude, make_valueless};

/// Divides the first magnitude by the second, then swaps them.
struct DivideAndSwap;

impl<A: Magnitude, B: Magnitude> Visitor<(&mut A, &mut B)> for DivideAndSwap {
    type Output = i64;

    fn visit(self, (a, b): (&mut A, &mut B)) -> i64 {
        let quotient = a.magnitude() / b.magnitude();
        std::mem::swap(a.magnitude_mut(), b.magnitude_mut());
        quotient
    }
}

/// Formats the active alternative with `Debug`.
struct Describe;

impl<T: std::fmt::Debug> Visitor<(&T,)> for Describe {
    type Output = String;

    fn visit(self, (value,): (&T,)) -> String {
        format!("{value:?}")
    }
}

/// Sums a shared and a mutable reference into the mutable one.
struct Accumulate;

impl<A: Magnitude, B: Magnitude> Visitor<(&A, &mut B)> for Accumulate {
    type Output = ();

    fn visit(self, (a, b): (&A, &mut B)) {
        *b.magnitude_mut() += a.magnitude();
    }
}

/// Folds three shared magnitudes into the fourth.
struct Gather;

impl<A, B, C, D> Visitor<(&A, &B, &C, &mut D)> for Gather
where
    A: Magnitude,
    B: Magnitude,
    C: Magnitude,
    D: Magnitude,
{
    type Output = i64;

    fn visit(self, (a, b, c, d): (&A, &B, &C, &mut D)) -> i64 {
        *d.magnitude_mut() += a.magnitude() * 100 + b.magnitude() * 10 + c.magnitude();
        d.magnitude()
    }
}

// =============================================================================
// Shared Visits
// =============================================================================

#[test]
fn single_visit_method() {
    let v: Variant<(u8, String, Monostate)> = Variant::new(String::from("hi"));
    assert_eq!(v.visit(Describe), Ok(String::from("\"hi\"")));
    let w: Variant<(u8, String, Monostate)> = Variant::default();
    assert_eq!(visit((&w,), Describe), Ok(String::from("0")));
}

#[test]
fn empty_visitor() {
    assert_eq!(visit((), || 42), Ok(42));
}

// =============================================================================
// Mutable Visits
// =============================================================================

#[test]
fn mutable_visit_swaps_values() {
    let mut a: Variant<(Anchored, i64, Anchored)> =
        Variant::with_index::<2>(Anchored::new(654_321));
    let mut b: Variant<(i64, Anchored)> = Variant::with_index::<0>(1234);
    let quotient = visit((&mut a, &mut b), DivideAndSwap);
    assert_eq!(quotient, Ok(530));
    assert_eq!(a.get::<2>().map(|x| x.value), Ok(1234));
    assert_eq!(b.get::<0>(), Ok(&654_321));
}

#[test]
fn mixed_shared_and_mutable() {
    let a: Variant<(i64, Anchored)> = Variant::with_index::<0>(5);
    let mut b: Variant<(Anchored, i64)> = Variant::with_index::<0>(Anchored::new(10));
    visit((&a, &mut b), Accumulate).unwrap();
    assert_eq!(b.get::<0>().map(|x| x.value), Ok(15));
}

#[test]
fn valueless_variant_fails_visit() {
    let a: Variant<(i64, Anchored)> = Variant::with_index::<0>(5);
    let mut b: Variant<(Anchored, i64)> = Variant::with_index::<1>(3);
    make_valueless::<_, 0>(&mut b);
    let err = visit((&a, &mut b), Accumulate).unwrap_err();
    assert!(err.is_valueless());
}

#[test]
fn four_variants_in_one_visit() {
    let a: Variant<(i64, Anchored)> = Variant::with_index::<1>(Anchored::new(1));
    let b: Variant<(Anchored, i64)> = Variant::with_index::<1>(2);
    let c: Variant<(i64,)> = Variant::new(3i64);
    let mut d: Variant<(Anchored, i64, Anchored)> =
        Variant::with_index::<2>(Anchored::new(4000));
    assert_eq!(visit((&a, &b, &c, &mut d), Gather), Ok(4123));
    assert_eq!(d.get::<2>().map(|x| x.value), Ok(4123));
}
