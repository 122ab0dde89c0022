//! Descriptors for a fixed list of alternative types.
//!
//! An alternative list is a tuple `(A, B, ...)` of arity 1 through 12. Every
//! property a discriminated union needs about its alternatives is derived here
//! at compile time: how many there are, what type lives at each position,
//! which position a given type occupies, and how the special operations
//! (copy, move, destroy) classify across the whole list.

use std::fmt;

/// Index value meaning "no alternative is active".
pub const NPOS: usize = usize::MAX;

/// Three-way classification of an operation aggregated over all alternatives.
///
/// Higher layers fully delegate to default behavior when an operation is
/// [`Trivial`](Self::Trivial), route through the dispatch table when it is
/// [`NonTrivial`](Self::NonTrivial), and refuse to provide it when it is
/// [`Unavailable`](Self::Unavailable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Triviality {
    /// At least one alternative lacks the operation.
    Unavailable,
    /// Every alternative performs the operation as a plain bit copy or no-op.
    Trivial,
    /// The operation is available but needs per-alternative code.
    NonTrivial,
}

impl Triviality {
    /// Folds the classification of one more alternative into an aggregate.
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Unavailable, _) | (_, Self::Unavailable) => Self::Unavailable,
            (Self::NonTrivial, _) | (_, Self::NonTrivial) => Self::NonTrivial,
            (Self::Trivial, Self::Trivial) => Self::Trivial,
        }
    }

    /// Classifies destruction of `T`.
    #[must_use]
    pub const fn of_drop<T>() -> Self {
        if std::mem::needs_drop::<T>() {
            Self::NonTrivial
        } else {
            Self::Trivial
        }
    }

    /// Returns true for [`Triviality::Trivial`].
    #[must_use]
    pub const fn is_trivial(self) -> bool {
        matches!(self, Self::Trivial)
    }

    /// Returns true unless the operation is [`Triviality::Unavailable`].
    #[must_use]
    pub const fn is_available(self) -> bool {
        !matches!(self, Self::Unavailable)
    }
}

impl fmt::Display for Triviality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "unavailable"),
            Self::Trivial => write!(f, "trivial"),
            Self::NonTrivial => write!(f, "non-trivial"),
        }
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A fixed, ordered list of alternative types.
///
/// Implemented for tuples of arity 1 through 12 and sealed; the arena layout
/// and dispatch tables are generated alongside each implementation.
pub trait Alternatives: sealed::Sealed + Sized {
    /// Number of alternatives.
    const COUNT: usize;

    /// Destruction classification across all alternatives.
    ///
    /// Never [`Triviality::Unavailable`]: every Rust type can be dropped.
    const DESTROY: Triviality;

    /// Move classification. Moves are bitwise copies in Rust.
    ///
    /// Assignment moves a side copy into place after destroying the old
    /// value and relies on this staying trivial.
    const MOVE: Triviality = Triviality::Trivial;

    /// Whether moving any alternative is free of panics. Checked on the
    /// move-in path of assignment.
    const NOTHROW_MOVE: bool = true;

    /// Whether swapping two values of the same alternative is free of panics.
    /// Checked by swap, which never leaves either side valueless.
    const NOTHROW_SWAP: bool = true;

    /// Storage large and aligned enough for any alternative.
    type Arena;

    /// Drops the live alternative `index` stored at `arena`.
    ///
    /// # Safety
    ///
    /// `arena` must point at a live value of alternative `index`, which is
    /// treated as moved-out afterwards.
    unsafe fn drop_at(index: usize, arena: *mut u8);

    /// Swaps two live values of alternative `index`.
    ///
    /// # Safety
    ///
    /// Both pointers must point at distinct live values of alternative `index`.
    unsafe fn swap_at(index: usize, a: *mut u8, b: *mut u8);
}

/// Positional access: the type stored at position `I`.
pub trait At<const I: usize>: Alternatives {
    /// The alternative at position `I`.
    type Type;
}

/// The alternative type at position `I` of list `L`.
pub type AlternativeAt<L, const I: usize> = <L as At<I>>::Type;

/// Type-level position marker used to infer where a type sits in a list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position<const I: usize>;

/// Exact type lookup.
///
/// `L: Holds<T, P>` holds when `T` appears in `L`; `P` is inferred as the
/// [`Position`] of `T`. If `T` appears more than once the position cannot be
/// inferred and the program does not compile.
pub trait Holds<T, P>: Alternatives {
    /// Position of `T` in the list.
    const INDEX: usize;
}

/// Best-match converting lookup.
///
/// `L: Converts<T, P>` holds when exactly one alternative `U` of `L`
/// satisfies `U: From<T>`; `P` is inferred as that alternative's [`Position`].
/// Standard `From` conversions are lossless, so narrowing numeric conversions
/// never participate. Zero or several candidates fail to compile.
pub trait Converts<T, P>: Alternatives {
    /// Position of the selected alternative.
    const INDEX: usize;

    /// The selected alternative.
    type Target: From<T>;
}

/// Returns the position of `T` in list `L`.
#[must_use]
pub const fn index_of<L, T, P>() -> usize
where
    L: Holds<T, P>,
{
    L::INDEX
}

/// Returns the position of the alternative a `T` converts into.
#[must_use]
pub const fn converting_index<L, T, P>() -> usize
where
    L: Converts<T, P>,
{
    L::INDEX
}
