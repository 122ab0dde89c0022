//! Copy construction.
//!
//! Move construction needs no rung of its own: moving a `Storage` is a bit
//! copy of the arena and the index, and the source is never observed again.

use std::ptr;

use vessel_foundation::{CloneAlternatives, CopyAlternatives};

use crate::storage::Storage;

/// Copy-constructs `source` by cloning its live alternative.
///
/// If the clone panics the half-built storage is still valueless, so it is
/// released without running any alternative destructor and the panic
/// propagates out of the constructor.
pub(crate) fn duplicate<L: CloneAlternatives>(source: &Storage<L>) -> Storage<L> {
    let mut copy = Storage::valueless();
    if source.is_valueless() {
        return copy;
    }
    let index = source.index();
    unsafe {
        L::clone_at(index, source.as_ptr(), copy.as_mut_ptr());
        copy.assume_init(index);
    }
    copy
}

/// Copy-constructs `source` as a plain bit copy.
pub(crate) fn bitwise_copy<L: CopyAlternatives>(source: &Storage<L>) -> Storage<L> {
    // Every alternative is `Copy`, so the arena bytes are a valid copy of
    // whichever one is live.
    unsafe { ptr::read(source) }
}
