//! Arena plus active index.
//!
//! `Storage` owns the live alternative, if any. `index == NPOS` means no
//! alternative is live and the arena bytes are meaningless.

use std::mem::MaybeUninit;

use vessel_foundation::{Alternatives, NPOS};

#[repr(C)]
pub(crate) struct Storage<L: Alternatives> {
    arena: MaybeUninit<L::Arena>,
    index: usize,
}

impl<L: Alternatives> Storage<L> {
    /// Storage with no live alternative.
    pub(crate) const fn valueless() -> Self {
        Self {
            arena: MaybeUninit::uninit(),
            index: NPOS,
        }
    }

    #[inline]
    pub(crate) const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub(crate) const fn is_valueless(&self) -> bool {
        self.index == NPOS
    }

    #[inline]
    pub(crate) const fn as_ptr(&self) -> *const u8 {
        self.arena.as_ptr().cast()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut u8 {
        self.arena.as_mut_ptr().cast()
    }

    /// Places `value` into the arena as alternative `index`.
    ///
    /// # Safety
    ///
    /// The storage must be valueless and `T` must be the alternative at
    /// `index`.
    #[inline]
    pub(crate) unsafe fn construct<T>(&mut self, index: usize, value: T) -> &mut T {
        debug_assert!(self.is_valueless(), "construct over a live alternative");
        debug_assert!(index < L::COUNT);
        let slot = self.as_mut_ptr().cast::<T>();
        unsafe {
            slot.write(value);
            self.index = index;
            &mut *slot
        }
    }

    /// Marks the arena as holding alternative `index` after it was written
    /// through a raw pointer.
    ///
    /// # Safety
    ///
    /// A live value of alternative `index` must have been written into the
    /// arena.
    #[inline]
    pub(crate) unsafe fn assume_init(&mut self, index: usize) {
        self.index = index;
    }

    /// Drops the live alternative, if any, leaving the storage valueless.
    ///
    /// The index is cleared first: if the alternative's destructor panics the
    /// storage is already valueless and the value is not dropped again.
    pub(crate) fn destroy(&mut self) {
        let index = self.index;
        if index == NPOS {
            return;
        }
        self.index = NPOS;
        if L::DESTROY.is_trivial() {
            return;
        }
        unsafe { L::drop_at(index, self.as_mut_ptr()) }
    }

    /// Moves the live alternative out as `T` and leaves the storage
    /// valueless.
    ///
    /// # Safety
    ///
    /// The storage must hold a live value of type `T`.
    #[inline]
    pub(crate) unsafe fn take<T>(&mut self) -> T {
        self.index = NPOS;
        unsafe { self.as_ptr().cast::<T>().read() }
    }

    /// # Safety
    ///
    /// The storage must hold a live value of type `T`.
    #[inline]
    pub(crate) unsafe fn get_unchecked<T>(&self) -> &T {
        unsafe { &*self.as_ptr().cast::<T>() }
    }

    /// # Safety
    ///
    /// The storage must hold a live value of type `T`.
    #[inline]
    pub(crate) unsafe fn get_unchecked_mut<T>(&mut self) -> &mut T {
        unsafe { &mut *self.as_mut_ptr().cast::<T>() }
    }
}

impl<L: Alternatives> Drop for Storage<L> {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Logs when a value-changing operation unwinds and leaves the storage
/// valueless. Disarm it once the operation completes.
pub(crate) struct UnwindNotice {
    operation: &'static str,
    armed: bool,
}

impl UnwindNotice {
    pub(crate) const fn arm(operation: &'static str) -> Self {
        Self {
            operation,
            armed: true,
        }
    }

    pub(crate) fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for UnwindNotice {
    fn drop(&mut self) {
        if self.armed {
            tracing::debug!(
                operation = self.operation,
                "operation unwound, variant is valueless"
            );
        }
    }
}
