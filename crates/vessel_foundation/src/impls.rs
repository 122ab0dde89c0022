//! Per-arity implementations for alternative lists.
//!
//! Every tuple of arity 1 through 12 gets: the descriptor, its arena type,
//! the dispatch table, positional/type lookups and the capability tables.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::arena::arena;
use crate::capability::{
    CloneAlternatives, CloneInto, CloneOnto, CmpAt, CopyAlternatives, DebugAlternatives, DropAt,
    EqAlternatives, EqAt, FmtAt, HashAlternatives, HashAt, OrdAlternatives, PartialCmpAt,
    PartialEqAlternatives, PartialOrdAlternatives, SwapAt,
};
use crate::dispatch::{Dispatch, Handle, entry, out_of_range};
use crate::typelist::sealed::Sealed;
use crate::typelist::{Alternatives, At, Converts, Holds, Position, Triviality};

/// Lookups for the alternative `$name` at `$index` within the list `$all`.
macro_rules! position {
    ([$($all:ident),+]; $index:tt $name:ident) => {
        impl<$($all),+> At<$index> for ($($all,)+) {
            type Type = $name;
        }

        impl<$($all),+> Holds<$name, Position<$index>> for ($($all,)+) {
            const INDEX: usize = $index;
        }

        impl<Src, $($all),+> Converts<Src, Position<$index>> for ($($all,)+)
        where
            $name: From<Src>,
        {
            const INDEX: usize = $index;
            type Target = $name;
        }
    };
}

macro_rules! alternatives {
    ($count:literal; $all:tt; $($index:tt $name:ident),+) => {
        impl<$($name),+> Sealed for ($($name,)+) {}

        impl<$($name),+> Alternatives for ($($name,)+) {
            const COUNT: usize = $count;
            const DESTROY: Triviality =
                Triviality::Trivial $(.combine(Triviality::of_drop::<$name>()))+;

            type Arena = arena!($($name),+);

            unsafe fn drop_at(index: usize, arena: *mut u8) {
                <Self as Dispatch<DropAt>>::dispatch(index, DropAt(arena));
            }

            unsafe fn swap_at(index: usize, a: *mut u8, b: *mut u8) {
                <Self as Dispatch<SwapAt>>::dispatch(index, SwapAt { a, b });
            }
        }

        impl<Hd, Out, $($name),+> Dispatch<Hd> for ($($name,)+)
        where
            $(Hd: Handle<$name, Output = Out>,)+
        {
            type Output = Out;

            #[inline]
            fn dispatch(index: usize, handler: Hd) -> Out {
                let table: [fn(Hd) -> Out; $count] = [$(entry::<Hd, $name, $index>),+];
                match table.get(index) {
                    Some(call) => call(handler),
                    None => out_of_range(index, $count),
                }
            }
        }

        $(position!($all; $index $name);)+

        impl<$($name: Clone),+> CloneAlternatives for ($($name,)+) {
            unsafe fn clone_at(index: usize, src: *const u8, dst: *mut u8) {
                <Self as Dispatch<CloneInto>>::dispatch(index, CloneInto { src, dst });
            }

            unsafe fn clone_from_at(index: usize, src: *const u8, dst: *mut u8) {
                <Self as Dispatch<CloneOnto>>::dispatch(index, CloneOnto { src, dst });
            }
        }

        impl<$($name: Copy),+> CopyAlternatives for ($($name,)+) {}

        impl<$($name: PartialEq),+> PartialEqAlternatives for ($($name,)+) {
            unsafe fn eq_at(index: usize, a: *const u8, b: *const u8) -> bool {
                <Self as Dispatch<EqAt>>::dispatch(index, EqAt { a, b })
            }
        }

        impl<$($name: Eq),+> EqAlternatives for ($($name,)+) {}

        impl<$($name: PartialOrd),+> PartialOrdAlternatives for ($($name,)+) {
            unsafe fn partial_cmp_at(
                index: usize,
                a: *const u8,
                b: *const u8,
            ) -> Option<std::cmp::Ordering> {
                <Self as Dispatch<PartialCmpAt>>::dispatch(index, PartialCmpAt { a, b })
            }
        }

        impl<$($name: Ord),+> OrdAlternatives for ($($name,)+) {
            unsafe fn cmp_at(index: usize, a: *const u8, b: *const u8) -> std::cmp::Ordering {
                <Self as Dispatch<CmpAt>>::dispatch(index, CmpAt { a, b })
            }
        }

        impl<$($name: Hash),+> HashAlternatives for ($($name,)+) {
            unsafe fn hash_at<S: Hasher>(index: usize, value: *const u8, state: &mut S) {
                <Self as Dispatch<HashAt<'_, S>>>::dispatch(index, HashAt { value, state });
            }
        }

        impl<$($name: fmt::Debug),+> DebugAlternatives for ($($name,)+) {
            unsafe fn fmt_at(
                index: usize,
                value: *const u8,
                f: &mut fmt::Formatter<'_>,
            ) -> fmt::Result {
                <Self as Dispatch<FmtAt<'_, '_>>>::dispatch(index, FmtAt { value, f })
            }
        }
    };
}

alternatives!(1; [A]; 0 A);
alternatives!(2; [A, B]; 0 A, 1 B);
alternatives!(3; [A, B, C]; 0 A, 1 B, 2 C);
alternatives!(4; [A, B, C, D]; 0 A, 1 B, 2 C, 3 D);
alternatives!(5; [A, B, C, D, E]; 0 A, 1 B, 2 C, 3 D, 4 E);
alternatives!(6; [A, B, C, D, E, F]; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
alternatives!(7; [A, B, C, D, E, F, G]; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
alternatives!(8; [A, B, C, D, E, F, G, H]; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
alternatives!(9; [A, B, C, D, E, F, G, H, I]; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I);
alternatives!(10; [A, B, C, D, E, F, G, H, I, J]; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J);
alternatives!(
    11; [A, B, C, D, E, F, G, H, I, J, K];
    0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K
);
alternatives!(
    12; [A, B, C, D, E, F, G, H, I, J, K, L];
    0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K, 11 L
);
