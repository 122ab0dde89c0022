//! Integration tests for alternative-list descriptors
//!
//! Tests counts, classification, lookups and arena layout.

use std::mem::{align_of, size_of};

use vessel_foundation::{
    Alternatives, Append, Monostate, Triviality, converting_index, index_of,
};

type Arena<L> = <L as Alternatives>::Arena;

// =============================================================================
// Classification
// =============================================================================

#[test]
fn destroy_is_trivial_only_without_drop_glue() {
    assert!(<(u8, Monostate, f64) as Alternatives>::DESTROY.is_trivial());
    assert_eq!(
        <(u8, Vec<u8>) as Alternatives>::DESTROY,
        Triviality::NonTrivial
    );
}

#[test]
fn moves_never_panic() {
    assert!(<(String, Vec<u8>) as Alternatives>::NOTHROW_MOVE);
    assert!(<(String, Vec<u8>) as Alternatives>::NOTHROW_SWAP);
    assert_eq!(<(String,) as Alternatives>::MOVE, Triviality::Trivial);
}

// =============================================================================
// Lookups
// =============================================================================

#[test]
fn exact_and_converting_positions() {
    type L = (Monostate, u32, String);
    assert_eq!(index_of::<L, Monostate, _>(), 0);
    assert_eq!(index_of::<L, u32, _>(), 1);
    assert_eq!(converting_index::<L, u16, _>(), 1);
    assert_eq!(converting_index::<L, &str, _>(), 2);
}

#[test]
fn converting_skips_narrowing() {
    // Only i32 losslessly holds an i16; i8 cannot.
    assert_eq!(converting_index::<(i8, i32), i16, _>(), 1);
    // u64 does not fit in f32 or i32.
    assert_eq!(converting_index::<(f32, i32, u128), u64, _>(), 2);
}

// =============================================================================
// Arena Layout
// =============================================================================

#[test]
fn arena_fits_largest_and_strictest() {
    assert_eq!(size_of::<Arena<(u8, [u8; 13], u32)>>(), 16);
    assert_eq!(align_of::<Arena<(u8, [u8; 13], u32)>>(), 4);
    assert_eq!(size_of::<Arena<(Monostate,)>>(), 0);
}

#[test]
fn append_builds_argument_tuples() {
    let args = ().append(&1u8).append(&'x');
    assert_eq!(args, (&1u8, &'x'));
}
