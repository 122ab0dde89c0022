//! The empty alternative.

use std::fmt;

/// A unit alternative.
///
/// Placing it first in a list whose other alternatives have no sensible
/// default makes the variant default-constructible. All instances compare
/// equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Monostate;

impl fmt::Display for Monostate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "monostate")
    }
}
