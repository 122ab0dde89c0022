//! Runtime index to compile-time type dispatch.
//!
//! A [`Handle`] is code written once, generically, for "some alternative
//! `T`". [`Dispatch`] turns a runtime alternative index into a call of the
//! right monomorphized handler: each alternative list owns a fixed table of
//! `COUNT` thin function pointers, entry `i` being the handler instantiated
//! for the `i`-th alternative with `i` baked in as a constant. Dispatch is a
//! single bounds-checked load plus one indirect call, whatever the arity.
//!
//! The same primitive backs destruction, copy construction, copy assignment,
//! swapping, comparison, hashing, formatting and visitation.

use crate::typelist::Alternatives;

/// Code instantiated per alternative type.
pub trait Handle<T> {
    /// Result of handling; must be the same for every alternative.
    type Output;

    /// Runs the handler for alternative type `T` at position `index`.
    fn handle(self, index: usize) -> Self::Output;
}

/// Converts a runtime alternative index into a typed [`Handle`] call.
///
/// Implemented for every alternative list whose alternatives are all handled
/// by `H` with a common output type.
pub trait Dispatch<H>: Alternatives {
    /// The common handler output.
    type Output;

    /// Invokes the handler entry for alternative `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Alternatives::COUNT`]; an out-of-range
    /// index is a contract violation by the caller.
    fn dispatch(index: usize, handler: H) -> Self::Output;
}

/// Dispatches `handler` over list `L` at the runtime `index`.
///
/// # Panics
///
/// Panics if `index` is out of range for `L`.
#[inline]
pub fn chronomorphize<L, H>(index: usize, handler: H) -> L::Output
where
    L: Dispatch<H>,
{
    L::dispatch(index, handler)
}

/// One dispatch table entry: the handler for alternative `T` at position `I`.
#[inline]
pub(crate) fn entry<H, T, const I: usize>(handler: H) -> <H as Handle<T>>::Output
where
    H: Handle<T>,
{
    handler.handle(I)
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn out_of_range(index: usize, count: usize) -> ! {
    panic!("dispatch index {index} is out of range for {count} alternatives")
}
