//! The `Variant` facade.

use std::iter::FromIterator;

use vessel_foundation::{
    AlternativeAt, Alternatives, At, BadVariantAccess, CloneAlternatives, Converts,
    CopyAlternatives, Holds, Result, raise,
};

use crate::assign::{assign_from, swap_with};
use crate::construct::{bitwise_copy, duplicate};
use crate::storage::{Storage, UnwindNotice};
use crate::visit::{VisitChain, visit};

/// A value holding exactly one of the alternatives in the tuple `L`.
///
/// The alternative lives inline, in storage sized for the largest
/// alternative, next to the index of the active one. The variant's address is
/// the address of its active alternative.
///
/// Alternatives are selected by position (`get::<1>()`) or by type
/// (`get_as::<String, _>()`). Type-based selection requires the type to
/// appear exactly once in `L`; the trailing `_` is its inferred position.
///
/// # Valueless variants
///
/// A value-changing operation that panics after the old value was destroyed
/// leaves the variant *valueless by exception*: [`index`](Self::index)
/// returns [`NPOS`](vessel_foundation::NPOS) and checked access fails while
/// `get_if` returns `None`. Assigning or emplacing a new value recovers it.
///
/// # Examples
///
/// ```
/// use vessel_foundation::Monostate;
/// use vessel_variant::Variant;
///
/// let mut v: Variant<(i32, char, Monostate)> = Variant::default();
/// assert_eq!(v.index(), 0);
/// assert!(v.holds_alternative::<i32, _>());
///
/// *v.get_mut::<0>().unwrap() = 42;
/// assert_eq!(v.get_as::<i32, _>(), Ok(&42));
///
/// v.emplace::<1>('x');
/// assert_eq!(v.get::<1>(), Ok(&'x'));
/// assert!(v.get::<0>().is_err());
/// ```
#[repr(transparent)]
pub struct Variant<L: Alternatives> {
    storage: Storage<L>,
}

impl<L: Alternatives> Variant<L> {
    /// Number of alternatives.
    pub const COUNT: usize = L::COUNT;

    const fn from_storage(storage: Storage<L>) -> Self {
        Self { storage }
    }

    fn holding<T>(index: usize, value: T) -> Self {
        let mut variant = Self::from_storage(Storage::valueless());
        unsafe { variant.storage.construct(index, value) };
        variant
    }

    /// Creates a variant holding `value`, selected by its exact type.
    #[must_use]
    pub fn new<T, P>(value: T) -> Self
    where
        L: Holds<T, P>,
    {
        Self::holding(L::INDEX, value)
    }

    /// Creates a variant holding the unique alternative `value` converts
    /// into.
    ///
    /// Candidates are the alternatives implementing `From<T>`; there must be
    /// exactly one. Narrowing numeric conversions have no `From` impl and are
    /// never selected.
    ///
    /// ```
    /// use vessel_variant::Variant;
    ///
    /// let v: Variant<(i16, i64, String)> = Variant::convert(7i32);
    /// assert_eq!(v.index(), 1);
    /// let w: Variant<(i16, i64, String)> = Variant::convert("seven");
    /// assert_eq!(w.index(), 2);
    /// ```
    ///
    /// Two candidates do not compile:
    ///
    /// ```compile_fail
    /// use vessel_variant::Variant;
    ///
    /// let v: Variant<(i64, f64)> = Variant::convert(7i32);
    /// ```
    ///
    /// An exact match does not win over a wider conversion either, since
    /// `T: From<T>` always holds. Use [`new`](Self::new) when `T` itself is
    /// an alternative:
    ///
    /// ```compile_fail
    /// use vessel_variant::Variant;
    ///
    /// let v: Variant<(f32, f64)> = Variant::convert(1.5f32);
    /// ```
    #[must_use]
    pub fn convert<T, P>(value: T) -> Self
    where
        L: Converts<T, P>,
    {
        Self::holding(
            <L as Converts<T, P>>::INDEX,
            <L as Converts<T, P>>::Target::from(value),
        )
    }

    /// Creates a variant holding alternative `I`.
    #[must_use]
    pub fn with_index<const I: usize>(value: AlternativeAt<L, I>) -> Self
    where
        L: At<I>,
    {
        Self::holding(I, value)
    }

    /// Creates a variant holding alternative `I` built by `build`.
    ///
    /// A panic in `build` propagates and no variant is created.
    #[must_use]
    pub fn from_fn<const I: usize, F>(build: F) -> Self
    where
        L: At<I>,
        F: FnOnce() -> AlternativeAt<L, I>,
    {
        Self::holding(I, build())
    }

    /// Creates a variant holding the alternative of type `T` built by `build`.
    #[must_use]
    pub fn from_fn_as<T, P, F>(build: F) -> Self
    where
        L: Holds<T, P>,
        F: FnOnce() -> T,
    {
        Self::holding(L::INDEX, build())
    }

    /// Creates a variant holding alternative `I` collected from `items`.
    ///
    /// ```
    /// use vessel_variant::Variant;
    ///
    /// let v: Variant<(u8, Vec<u32>)> = Variant::from_iter_at::<1, _>([1, 2, 3]);
    /// assert_eq!(v.get::<1>().map(Vec::len), Ok(3));
    /// ```
    #[must_use]
    pub fn from_iter_at<const I: usize, It>(items: It) -> Self
    where
        L: At<I>,
        It: IntoIterator,
        AlternativeAt<L, I>: FromIterator<It::Item>,
    {
        Self::holding(I, items.into_iter().collect::<AlternativeAt<L, I>>())
    }

    /// Creates a variant holding the alternative of type `T` collected from
    /// `items`.
    #[must_use]
    pub fn from_iter_as<T, P, It>(items: It) -> Self
    where
        L: Holds<T, P>,
        It: IntoIterator,
        T: FromIterator<It::Item>,
    {
        Self::holding(L::INDEX, items.into_iter().collect::<T>())
    }

    /// Index of the active alternative, or [`NPOS`](vessel_foundation::NPOS) when
    /// valueless.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.storage.index()
    }

    /// Returns true if a failed value-changing operation left no value.
    #[inline]
    #[must_use]
    pub const fn valueless_by_exception(&self) -> bool {
        self.storage.is_valueless()
    }

    /// Returns true if the active alternative has type `T`.
    #[must_use]
    pub fn holds_alternative<T, P>(&self) -> bool
    where
        L: Holds<T, P>,
    {
        self.index() == L::INDEX
    }

    // =========================================================================
    // Assignment
    // =========================================================================

    fn store<T>(&mut self, index: usize, value: T) -> &mut T {
        if self.index() == index {
            let slot = unsafe { self.storage.get_unchecked_mut::<T>() };
            *slot = value;
            return slot;
        }
        self.storage.destroy();
        unsafe { self.storage.construct(index, value) }
    }

    /// Assigns `value` to the alternative of type `T`.
    ///
    /// If `T` is already active the value is assigned in place, otherwise the
    /// old alternative is destroyed and `value` moved in.
    pub fn assign<T, P>(&mut self, value: T) -> &mut T
    where
        L: Holds<T, P>,
    {
        self.store(L::INDEX, value)
    }

    /// Assigns `value` to the unique alternative it converts into.
    ///
    /// The conversion runs first; if it panics the variant is unchanged.
    /// As with [`convert`](Self::convert), a list holding `T` and a wider
    /// `From<T>` target is ambiguous; use [`assign`](Self::assign) there.
    pub fn assign_converted<T, P>(&mut self, value: T) -> &mut <L as Converts<T, P>>::Target
    where
        L: Converts<T, P>,
    {
        let converted = <L as Converts<T, P>>::Target::from(value);
        self.store(<L as Converts<T, P>>::INDEX, converted)
    }

    /// Replaces the value with alternative `I`.
    pub fn emplace<const I: usize>(
        &mut self,
        value: AlternativeAt<L, I>,
    ) -> &mut AlternativeAt<L, I>
    where
        L: At<I>,
    {
        self.storage.destroy();
        unsafe { self.storage.construct(I, value) }
    }

    /// Replaces the value with the alternative of type `T`.
    pub fn emplace_as<T, P>(&mut self, value: T) -> &mut T
    where
        L: Holds<T, P>,
    {
        self.storage.destroy();
        unsafe { self.storage.construct(L::INDEX, value) }
    }

    /// Destroys the current value, then builds alternative `I` with `build`.
    ///
    /// If `build` panics the variant is left valueless.
    pub fn emplace_with<const I: usize, F>(&mut self, build: F) -> &mut AlternativeAt<L, I>
    where
        L: At<I>,
        F: FnOnce() -> AlternativeAt<L, I>,
    {
        self.storage.destroy();
        let notice = UnwindNotice::arm("emplace_with");
        let value = build();
        notice.disarm();
        unsafe { self.storage.construct(I, value) }
    }

    /// Destroys the current value, then builds alternative `I` with a
    /// fallible `build`.
    ///
    /// # Errors
    ///
    /// Returns the builder's error, leaving the variant valueless.
    pub fn try_emplace_with<const I: usize, E, F>(
        &mut self,
        build: F,
    ) -> std::result::Result<&mut AlternativeAt<L, I>, E>
    where
        L: At<I>,
        F: FnOnce() -> std::result::Result<AlternativeAt<L, I>, E>,
    {
        self.storage.destroy();
        let notice = UnwindNotice::arm("try_emplace_with");
        let built = build();
        notice.disarm();
        match built {
            Ok(value) => Ok(unsafe { self.storage.construct(I, value) }),
            Err(error) => {
                tracing::debug!(index = I, "emplace failed, variant is valueless");
                Err(error)
            }
        }
    }

    /// Exchanges the values of two variants.
    ///
    /// Equal alternatives are swapped through the alternative; otherwise the
    /// variants trade their whole contents, valueless states included.
    pub fn swap(&mut self, other: &mut Self) {
        swap_with(&mut self.storage, &mut other.storage);
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// The alternative at `I`.
    ///
    /// # Errors
    ///
    /// Fails if another alternative is active or the variant is valueless.
    pub fn get<const I: usize>(&self) -> Result<&AlternativeAt<L, I>>
    where
        L: At<I>,
    {
        self.get_if::<I>()
            .ok_or_else(|| BadVariantAccess::for_index(I, self.index()).with_operation("get"))
    }

    /// Mutable access to the alternative at `I`.
    ///
    /// # Errors
    ///
    /// Fails if another alternative is active or the variant is valueless.
    pub fn get_mut<const I: usize>(&mut self) -> Result<&mut AlternativeAt<L, I>>
    where
        L: At<I>,
    {
        let active = self.index();
        self.get_if_mut::<I>()
            .ok_or_else(|| BadVariantAccess::for_index(I, active).with_operation("get_mut"))
    }

    /// The alternative of type `T`.
    ///
    /// # Errors
    ///
    /// Fails if another alternative is active or the variant is valueless.
    pub fn get_as<T, P>(&self) -> Result<&T>
    where
        L: Holds<T, P>,
    {
        self.get_if_as::<T, P>().ok_or_else(|| {
            BadVariantAccess::for_index(L::INDEX, self.index()).with_operation("get")
        })
    }

    /// Mutable access to the alternative of type `T`.
    ///
    /// # Errors
    ///
    /// Fails if another alternative is active or the variant is valueless.
    pub fn get_as_mut<T, P>(&mut self) -> Result<&mut T>
    where
        L: Holds<T, P>,
    {
        let active = self.index();
        self.get_if_as_mut::<T, P>()
            .ok_or_else(|| BadVariantAccess::for_index(L::INDEX, active).with_operation("get_mut"))
    }

    /// The alternative at `I`, if active.
    #[must_use]
    pub fn get_if<const I: usize>(&self) -> Option<&AlternativeAt<L, I>>
    where
        L: At<I>,
    {
        (self.index() == I).then(|| unsafe { self.storage.get_unchecked() })
    }

    /// Mutable access to the alternative at `I`, if active.
    #[must_use]
    pub fn get_if_mut<const I: usize>(&mut self) -> Option<&mut AlternativeAt<L, I>>
    where
        L: At<I>,
    {
        if self.index() == I {
            Some(unsafe { self.storage.get_unchecked_mut() })
        } else {
            None
        }
    }

    /// The alternative of type `T`, if active.
    #[must_use]
    pub fn get_if_as<T, P>(&self) -> Option<&T>
    where
        L: Holds<T, P>,
    {
        (self.index() == L::INDEX).then(|| unsafe { self.storage.get_unchecked() })
    }

    /// Mutable access to the alternative of type `T`, if active.
    #[must_use]
    pub fn get_if_as_mut<T, P>(&mut self) -> Option<&mut T>
    where
        L: Holds<T, P>,
    {
        if self.index() == L::INDEX {
            Some(unsafe { self.storage.get_unchecked_mut() })
        } else {
            None
        }
    }

    /// The alternative at `I`, raising a bad access otherwise.
    ///
    /// # Panics
    ///
    /// Panics with a [`BadVariantAccess`] payload, or aborts, per
    /// [`FAILURE_POLICY`](vessel_foundation::FAILURE_POLICY).
    #[track_caller]
    #[must_use]
    pub fn at<const I: usize>(&self) -> &AlternativeAt<L, I>
    where
        L: At<I>,
    {
        match self.get::<I>() {
            Ok(value) => value,
            Err(error) => raise(error),
        }
    }

    /// Mutable access to the alternative at `I`, raising a bad access
    /// otherwise.
    ///
    /// # Panics
    ///
    /// See [`at`](Self::at).
    #[track_caller]
    pub fn at_mut<const I: usize>(&mut self) -> &mut AlternativeAt<L, I>
    where
        L: At<I>,
    {
        match self.get_mut::<I>() {
            Ok(value) => value,
            Err(error) => raise(error),
        }
    }

    /// The alternative of type `T`, raising a bad access otherwise.
    ///
    /// # Panics
    ///
    /// See [`at`](Self::at).
    #[track_caller]
    #[must_use]
    pub fn at_as<T, P>(&self) -> &T
    where
        L: Holds<T, P>,
    {
        match self.get_as::<T, P>() {
            Ok(value) => value,
            Err(error) => raise(error),
        }
    }

    /// Mutable access to the alternative of type `T`, raising a bad access
    /// otherwise.
    ///
    /// # Panics
    ///
    /// See [`at`](Self::at).
    #[track_caller]
    pub fn at_as_mut<T, P>(&mut self) -> &mut T
    where
        L: Holds<T, P>,
    {
        match self.get_as_mut::<T, P>() {
            Ok(value) => value,
            Err(error) => raise(error),
        }
    }

    /// Consumes the variant and returns alternative `I`.
    ///
    /// # Errors
    ///
    /// Returns the variant unchanged if `I` is not active.
    pub fn into_alternative<const I: usize>(
        mut self,
    ) -> std::result::Result<AlternativeAt<L, I>, Self>
    where
        L: At<I>,
    {
        if self.index() == I {
            Ok(unsafe { self.storage.take() })
        } else {
            Err(self)
        }
    }

    // =========================================================================
    // Visitation
    // =========================================================================

    /// Calls `visitor` with a reference to the active alternative.
    ///
    /// # Errors
    ///
    /// Fails if the variant is valueless.
    pub fn visit<'a, V>(&'a self, visitor: V) -> Result<<(&'a Self,) as VisitChain<(), V>>::Output>
    where
        (&'a Self,): VisitChain<(), V>,
    {
        visit((self,), visitor)
    }

    /// Calls `visitor` with a mutable reference to the active alternative.
    ///
    /// # Errors
    ///
    /// Fails if the variant is valueless.
    pub fn visit_mut<'a, V>(
        &'a mut self,
        visitor: V,
    ) -> Result<<(&'a mut Self,) as VisitChain<(), V>>::Output>
    where
        (&'a mut Self,): VisitChain<(), V>,
    {
        visit((self,), visitor)
    }

    pub(crate) const fn storage(&self) -> &Storage<L> {
        &self.storage
    }

    pub(crate) fn storage_mut(&mut self) -> &mut Storage<L> {
        &mut self.storage
    }
}

impl<L: CopyAlternatives> Variant<L> {
    /// Bit-for-bit copy; available when every alternative is `Copy`.
    #[must_use]
    pub fn copied(&self) -> Self {
        Self::from_storage(bitwise_copy(&self.storage))
    }
}

impl<L> Default for Variant<L>
where
    L: At<0>,
    AlternativeAt<L, 0>: Default,
{
    /// Holds the default value of the first alternative.
    fn default() -> Self {
        Self::holding(0, AlternativeAt::<L, 0>::default())
    }
}

impl<L: CloneAlternatives> Clone for Variant<L> {
    fn clone(&self) -> Self {
        Self::from_storage(duplicate(&self.storage))
    }

    /// Same-alternative sources use the alternative's own `clone_from`;
    /// other sources are cloned to the side first, so a panicking clone
    /// leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        assign_from(&mut self.storage, &source.storage);
    }
}
