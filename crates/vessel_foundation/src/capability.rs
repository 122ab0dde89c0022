//! Per-capability operations over an alternative list.
//!
//! Each trait here is implemented for an alternative list exactly when every
//! alternative supports the corresponding standard trait. A missing impl is
//! how an aggregate operation becomes unavailable: the variant simply does
//! not implement `Clone`, `PartialEq`, ... for that list.
//!
//! The operations work on raw arena pointers and route through [`Dispatch`]
//! with private handlers; safe wrappers live in the variant layer.
//!
//! [`Dispatch`]: crate::dispatch::Dispatch

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ptr;

use crate::dispatch::Handle;
use crate::typelist::Alternatives;

/// Copy construction and copy assignment of every alternative.
pub trait CloneAlternatives: Alternatives {
    /// Clones the live alternative `index` at `src` into `dst`.
    ///
    /// # Safety
    ///
    /// `src` must point at a live value of alternative `index`; `dst` must
    /// be arena storage of the same list holding no live value.
    unsafe fn clone_at(index: usize, src: *const u8, dst: *mut u8);

    /// Assigns alternative `index` at `src` onto the live one at `dst` with
    /// `Clone::clone_from`.
    ///
    /// # Safety
    ///
    /// Both pointers must point at live values of alternative `index`.
    unsafe fn clone_from_at(index: usize, src: *const u8, dst: *mut u8);
}

/// Marker: every alternative is `Copy`, so copying the arena bit for bit is a
/// valid copy of the variant.
pub trait CopyAlternatives: CloneAlternatives {}

/// Equality of every alternative.
pub trait PartialEqAlternatives: Alternatives {
    /// Compares two live values of alternative `index`.
    ///
    /// # Safety
    ///
    /// Both pointers must point at live values of alternative `index`.
    unsafe fn eq_at(index: usize, a: *const u8, b: *const u8) -> bool;
}

/// Marker: every alternative is `Eq`.
pub trait EqAlternatives: PartialEqAlternatives {}

/// Partial ordering of every alternative.
pub trait PartialOrdAlternatives: PartialEqAlternatives {
    /// Orders two live values of alternative `index`.
    ///
    /// # Safety
    ///
    /// Both pointers must point at live values of alternative `index`.
    unsafe fn partial_cmp_at(index: usize, a: *const u8, b: *const u8) -> Option<Ordering>;
}

/// Total ordering of every alternative.
pub trait OrdAlternatives: PartialOrdAlternatives + EqAlternatives {
    /// Orders two live values of alternative `index`.
    ///
    /// # Safety
    ///
    /// Both pointers must point at live values of alternative `index`.
    unsafe fn cmp_at(index: usize, a: *const u8, b: *const u8) -> Ordering;
}

/// Hashing of every alternative.
pub trait HashAlternatives: Alternatives {
    /// Feeds the live alternative `index` into `state`.
    ///
    /// # Safety
    ///
    /// `value` must point at a live value of alternative `index`.
    unsafe fn hash_at<S: Hasher>(index: usize, value: *const u8, state: &mut S);
}

/// Debug formatting of every alternative.
pub trait DebugAlternatives: Alternatives {
    /// Formats the live alternative `index`.
    ///
    /// # Safety
    ///
    /// `value` must point at a live value of alternative `index`.
    unsafe fn fmt_at(index: usize, value: *const u8, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

// Handlers. Only this crate can build them, and only the unsafe entry points
// above do, so the raw pointers they carry are always valid for the
// alternative they are dispatched to.

pub(crate) struct DropAt(pub(crate) *mut u8);

impl<T> Handle<T> for DropAt {
    type Output = ();

    fn handle(self, _index: usize) {
        unsafe { ptr::drop_in_place(self.0.cast::<T>()) }
    }
}

pub(crate) struct SwapAt {
    pub(crate) a: *mut u8,
    pub(crate) b: *mut u8,
}

impl<T> Handle<T> for SwapAt {
    type Output = ();

    fn handle(self, _index: usize) {
        unsafe { mem::swap(&mut *self.a.cast::<T>(), &mut *self.b.cast::<T>()) }
    }
}

pub(crate) struct CloneInto {
    pub(crate) src: *const u8,
    pub(crate) dst: *mut u8,
}

impl<T: Clone> Handle<T> for CloneInto {
    type Output = ();

    fn handle(self, _index: usize) {
        unsafe {
            let value = (*self.src.cast::<T>()).clone();
            self.dst.cast::<T>().write(value);
        }
    }
}

pub(crate) struct CloneOnto {
    pub(crate) src: *const u8,
    pub(crate) dst: *mut u8,
}

impl<T: Clone> Handle<T> for CloneOnto {
    type Output = ();

    fn handle(self, _index: usize) {
        unsafe { (*self.dst.cast::<T>()).clone_from(&*self.src.cast::<T>()) }
    }
}

pub(crate) struct EqAt {
    pub(crate) a: *const u8,
    pub(crate) b: *const u8,
}

impl<T: PartialEq> Handle<T> for EqAt {
    type Output = bool;

    fn handle(self, _index: usize) -> bool {
        unsafe { *self.a.cast::<T>() == *self.b.cast::<T>() }
    }
}

pub(crate) struct PartialCmpAt {
    pub(crate) a: *const u8,
    pub(crate) b: *const u8,
}

impl<T: PartialOrd> Handle<T> for PartialCmpAt {
    type Output = Option<Ordering>;

    fn handle(self, _index: usize) -> Option<Ordering> {
        unsafe { (*self.a.cast::<T>()).partial_cmp(&*self.b.cast::<T>()) }
    }
}

pub(crate) struct CmpAt {
    pub(crate) a: *const u8,
    pub(crate) b: *const u8,
}

impl<T: Ord> Handle<T> for CmpAt {
    type Output = Ordering;

    fn handle(self, _index: usize) -> Ordering {
        unsafe { (*self.a.cast::<T>()).cmp(&*self.b.cast::<T>()) }
    }
}

pub(crate) struct HashAt<'s, S> {
    pub(crate) value: *const u8,
    pub(crate) state: &'s mut S,
}

impl<S: Hasher, T: Hash> Handle<T> for HashAt<'_, S> {
    type Output = ();

    fn handle(self, _index: usize) {
        unsafe { (*self.value.cast::<T>()).hash(self.state) }
    }
}

pub(crate) struct FmtAt<'f, 'a> {
    pub(crate) value: *const u8,
    pub(crate) f: &'f mut fmt::Formatter<'a>,
}

impl<T: fmt::Debug> Handle<T> for FmtAt<'_, '_> {
    type Output = fmt::Result;

    fn handle(self, index: usize) -> fmt::Result {
        let value = unsafe { &*self.value.cast::<T>() };
        self.f.debug_tuple("Variant").field(&index).field(value).finish()
    }
}
