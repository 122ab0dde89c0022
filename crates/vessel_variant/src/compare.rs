//! Comparison, hashing and formatting.
//!
//! Variants order by active index first and by value only when the indices
//! match. A valueless variant ranks below every alternative and two valueless
//! variants are equal.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use vessel_foundation::{
    Alternatives, DebugAlternatives, EqAlternatives, HashAlternatives, OrdAlternatives,
    PartialEqAlternatives, PartialOrdAlternatives,
};

use crate::variant::Variant;

/// Rank of the active index; `NPOS` wraps to 0, below every alternative.
#[inline]
const fn rank<L: Alternatives>(variant: &Variant<L>) -> usize {
    variant.index().wrapping_add(1)
}

impl<L: PartialEqAlternatives> PartialEq for Variant<L> {
    fn eq(&self, other: &Self) -> bool {
        let index = self.index();
        if index != other.index() {
            return false;
        }
        if self.valueless_by_exception() {
            return true;
        }
        unsafe { L::eq_at(index, self.storage().as_ptr(), other.storage().as_ptr()) }
    }
}

impl<L: EqAlternatives> Eq for Variant<L> {}

impl<L: PartialOrdAlternatives> PartialOrd for Variant<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match rank(self).cmp(&rank(other)) {
            Ordering::Equal if !self.valueless_by_exception() => unsafe {
                L::partial_cmp_at(self.index(), self.storage().as_ptr(), other.storage().as_ptr())
            },
            ordering => Some(ordering),
        }
    }
}

impl<L: OrdAlternatives> Ord for Variant<L> {
    fn cmp(&self, other: &Self) -> Ordering {
        match rank(self).cmp(&rank(other)) {
            Ordering::Equal if !self.valueless_by_exception() => unsafe {
                L::cmp_at(self.index(), self.storage().as_ptr(), other.storage().as_ptr())
            },
            ordering => ordering,
        }
    }
}

impl<L: HashAlternatives> Hash for Variant<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index().hash(state);
        if !self.valueless_by_exception() {
            unsafe { L::hash_at(self.index(), self.storage().as_ptr(), state) }
        }
    }
}

impl<L: DebugAlternatives> fmt::Debug for Variant<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valueless_by_exception() {
            return write!(f, "Variant(<valueless>)");
        }
        unsafe { L::fmt_at(self.index(), self.storage().as_ptr(), f) }
    }
}
