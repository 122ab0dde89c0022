//! The recursive arena union.
//!
//! An alternative list `(A, B, C)` is stored in
//! `Cell<A, Cell<B, Cell<C, Empty>>>`: each cell overlays one alternative on
//! top of the cell holding the rest of the list. The arena never runs a
//! destructor of its own; whoever owns it tracks which alternative is live.

use std::mem::ManuallyDrop;

/// Terminator of the arena union.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct Empty;

/// One level of the arena: the head alternative overlaid on the tail cell.
///
/// `repr(C)` places every field at offset 0, so a pointer to the arena is a
/// pointer to whichever alternative is currently live in it.
#[repr(C)]
pub union Cell<Head, Tail> {
    /// The alternative at this level.
    pub head: ManuallyDrop<Head>,
    /// The remaining alternatives.
    pub tail: ManuallyDrop<Tail>,
}

impl<Head, Tail> Cell<Head, Tail> {
    /// Creates a cell holding `value` as its head alternative.
    #[must_use]
    pub const fn with_head(value: Head) -> Self {
        Self {
            head: ManuallyDrop::new(value),
        }
    }

    /// Creates a cell whose live value sits somewhere in the tail.
    #[must_use]
    pub const fn with_tail(tail: Tail) -> Self {
        Self {
            tail: ManuallyDrop::new(tail),
        }
    }

    /// Pointer to the head alternative.
    #[must_use]
    pub const fn head_ptr(this: *const Self) -> *const Head {
        this.cast()
    }

    /// Pointer to the tail cell.
    #[must_use]
    pub const fn tail_ptr(this: *const Self) -> *const Tail {
        this.cast()
    }
}

/// Expands to the arena type for a list of alternative type names.
macro_rules! arena {
    () => { $crate::arena::Empty };
    ($head:ty $(, $tail:ty)*) => {
        $crate::arena::Cell<$head, $crate::arena::arena!($($tail),*)>
    };
}

pub(crate) use arena;
