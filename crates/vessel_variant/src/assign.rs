//! Copy assignment and swapping.
//!
//! Differing alternatives are always copied off to the side first and then
//! moved in. Rust moves never panic, so a panicking clone leaves the
//! destination holding its previous value and nothing else can fail after
//! the old value is gone, except its own destructor.

use std::mem;

use vessel_foundation::{Alternatives, CloneAlternatives};

use crate::construct::duplicate;
use crate::storage::Storage;

/// Copy-assigns `source` onto `target`.
///
/// | source    | target           | effect                                  |
/// |-----------|------------------|-----------------------------------------|
/// | valueless | any              | target becomes valueless                |
/// | index `i` | index `i`        | `Clone::clone_from` on the alternative  |
/// | index `i` | other / valueless| side copy of `i`, then move into target |
///
/// A panic inside `clone_from` leaves the target holding whatever the
/// alternative left behind; it does not become valueless.
pub(crate) fn assign_from<L: CloneAlternatives>(target: &mut Storage<L>, source: &Storage<L>) {
    if source.is_valueless() {
        target.destroy();
        return;
    }
    let index = source.index();
    if target.index() == index {
        unsafe { L::clone_from_at(index, source.as_ptr(), target.as_mut_ptr()) }
        return;
    }
    tracing::trace!(
        from = target.index(),
        to = index,
        "copy assignment across alternatives, cloning to the side"
    );
    let side = duplicate(source);
    replace_with(target, side);
}

/// Destroys the target's value and moves `replacement` in.
pub(crate) fn replace_with<L: Alternatives>(target: &mut Storage<L>, replacement: Storage<L>) {
    // Nothing may fail between the destroy and the move-in.
    debug_assert!(L::NOTHROW_MOVE && L::MOVE.is_trivial());
    target.destroy();
    *target = replacement;
}

/// Swaps two storages.
///
/// Equal alternatives swap through the alternative itself; otherwise the
/// storages trade places wholesale.
pub(crate) fn swap_with<L: Alternatives>(a: &mut Storage<L>, b: &mut Storage<L>) {
    debug_assert!(L::NOTHROW_SWAP);
    let index = a.index();
    if index != b.index() {
        mem::swap(a, b);
    } else if !a.is_valueless() {
        unsafe { L::swap_at(index, a.as_mut_ptr(), b.as_mut_ptr()) }
    }
}
