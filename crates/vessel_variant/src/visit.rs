//! Single and multi-variant visitation.
//!
//! Visiting `(a, b, c)` dispatches once over `a`, binding a typed reference
//! to its active alternative, then continues with `(b, c)` carrying the bound
//! references along. When no variants remain the visitor is called with every
//! bound reference at once. Each step is one table lookup, so visiting `n`
//! variants costs `n` dispatches however many alternatives they have.
//!
//! ```
//! use vessel_variant::{Variant, Visitor, visit};
//!
//! struct Width;
//!
//! impl<A: ToString, B: ToString> Visitor<(&A, &B)> for Width {
//!     type Output = usize;
//!
//!     fn visit(self, (a, b): (&A, &B)) -> usize {
//!         a.to_string().len() + b.to_string().len()
//!     }
//! }
//!
//! let a: Variant<(u32, char)> = Variant::new(1234u32);
//! let b: Variant<(String, bool)> = Variant::new(true);
//! assert_eq!(visit((&a, &b), Width), Ok(8));
//! ```

use std::marker::PhantomData;

use vessel_foundation::{Alternatives, Append, BadVariantAccess, Dispatch, Handle, Result};

use crate::variant::Variant;

/// Code run against the active alternatives of one or more variants.
///
/// `Args` is a tuple with one reference per visited variant, `&T` or
/// `&mut T` matching how that variant was passed. A visitor must accept every
/// combination of alternatives, usually through a generic impl.
pub trait Visitor<Args> {
    /// Result of the visit; the same for every combination.
    type Output;

    /// Runs the visitor.
    fn visit(self, args: Args) -> Self::Output;
}

/// Visiting zero variants calls the closure with nothing.
impl<F, R> Visitor<()> for F
where
    F: FnOnce() -> R,
{
    type Output = R;

    fn visit(self, (): ()) -> R {
        self()
    }
}

/// Something with an active alternative index.
pub trait Indexed {
    /// The active index, or `NPOS`.
    fn active_index(&self) -> usize;
}

impl<L: Alternatives> Indexed for &Variant<L> {
    fn active_index(&self) -> usize {
        self.index()
    }
}

impl<L: Alternatives> Indexed for &mut Variant<L> {
    fn active_index(&self) -> usize {
        self.index()
    }
}

/// A borrowed variant that can bind its active alternative into `P` and
/// continue the visit with `Rest`.
pub trait Visitable<P, Rest, V>: Indexed {
    /// Result of the whole visit.
    type Output;

    /// Dispatches over the active alternative.
    ///
    /// # Panics
    ///
    /// Panics if the variant is valueless.
    fn bind(self, bound: P, rest: Rest, visitor: V) -> Self::Output;
}

/// Dispatch handler binding a shared reference.
pub struct RefStep<'a, P, Rest, V> {
    value: *const u8,
    bound: P,
    rest: Rest,
    visitor: V,
    marker: PhantomData<&'a ()>,
}

/// Dispatch handler binding a mutable reference.
pub struct MutStep<'a, P, Rest, V> {
    value: *mut u8,
    bound: P,
    rest: Rest,
    visitor: V,
    marker: PhantomData<&'a mut ()>,
}

impl<'a, T, P, Rest, V> Handle<T> for RefStep<'a, P, Rest, V>
where
    T: 'a,
    P: Append<&'a T>,
    Rest: VisitChain<<P as Append<&'a T>>::Output, V>,
{
    type Output = Rest::Output;

    fn handle(self, _index: usize) -> Self::Output {
        // Dispatch only selects this entry when `T` is the live alternative.
        let value = unsafe { &*self.value.cast::<T>() };
        self.rest.run(self.bound.append(value), self.visitor)
    }
}

impl<'a, T, P, Rest, V> Handle<T> for MutStep<'a, P, Rest, V>
where
    T: 'a,
    P: Append<&'a mut T>,
    Rest: VisitChain<<P as Append<&'a mut T>>::Output, V>,
{
    type Output = Rest::Output;

    fn handle(self, _index: usize) -> Self::Output {
        let value = unsafe { &mut *self.value.cast::<T>() };
        self.rest.run(self.bound.append(value), self.visitor)
    }
}

impl<'a, L, P, Rest, V> Visitable<P, Rest, V> for &'a Variant<L>
where
    L: Alternatives + Dispatch<RefStep<'a, P, Rest, V>>,
{
    type Output = <L as Dispatch<RefStep<'a, P, Rest, V>>>::Output;

    fn bind(self, bound: P, rest: Rest, visitor: V) -> Self::Output {
        let step = RefStep {
            value: self.storage().as_ptr(),
            bound,
            rest,
            visitor,
            marker: PhantomData,
        };
        L::dispatch(self.index(), step)
    }
}

impl<'a, L, P, Rest, V> Visitable<P, Rest, V> for &'a mut Variant<L>
where
    L: Alternatives + Dispatch<MutStep<'a, P, Rest, V>>,
{
    type Output = <L as Dispatch<MutStep<'a, P, Rest, V>>>::Output;

    fn bind(self, bound: P, rest: Rest, visitor: V) -> Self::Output {
        let index = self.index();
        let step = MutStep {
            value: self.storage_mut().as_mut_ptr(),
            bound,
            rest,
            visitor,
            marker: PhantomData,
        };
        L::dispatch(index, step)
    }
}

/// A tuple of borrowed variants still to be visited, with `P` already bound.
pub trait VisitChain<P, V> {
    /// Result of the whole visit.
    type Output;

    /// Returns true if any remaining variant is valueless.
    fn any_valueless(&self) -> bool;

    /// Binds the remaining variants and calls the visitor.
    ///
    /// # Panics
    ///
    /// Panics if a remaining variant is valueless.
    fn run(self, bound: P, visitor: V) -> Self::Output;
}

impl<P, V: Visitor<P>> VisitChain<P, V> for () {
    type Output = V::Output;

    fn any_valueless(&self) -> bool {
        false
    }

    fn run(self, bound: P, visitor: V) -> V::Output {
        visitor.visit(bound)
    }
}

impl<P, V, X> VisitChain<P, V> for (X,)
where
    X: Visitable<P, (), V>,
{
    type Output = X::Output;

    fn any_valueless(&self) -> bool {
        self.0.active_index() == vessel_foundation::NPOS
    }

    fn run(self, bound: P, visitor: V) -> Self::Output {
        self.0.bind(bound, (), visitor)
    }
}

impl<P, V, X, Y> VisitChain<P, V> for (X, Y)
where
    X: Visitable<P, (Y,), V>,
    Y: Indexed,
{
    type Output = X::Output;

    fn any_valueless(&self) -> bool {
        [self.0.active_index(), self.1.active_index()].contains(&vessel_foundation::NPOS)
    }

    fn run(self, bound: P, visitor: V) -> Self::Output {
        self.0.bind(bound, (self.1,), visitor)
    }
}

impl<P, V, X, Y, Z> VisitChain<P, V> for (X, Y, Z)
where
    X: Visitable<P, (Y, Z), V>,
    Y: Indexed,
    Z: Indexed,
{
    type Output = X::Output;

    fn any_valueless(&self) -> bool {
        [
            self.0.active_index(),
            self.1.active_index(),
            self.2.active_index(),
        ]
        .contains(&vessel_foundation::NPOS)
    }

    fn run(self, bound: P, visitor: V) -> Self::Output {
        self.0.bind(bound, (self.1, self.2), visitor)
    }
}

impl<P, V, X, Y, Z, W> VisitChain<P, V> for (X, Y, Z, W)
where
    X: Visitable<P, (Y, Z, W), V>,
    Y: Indexed,
    Z: Indexed,
    W: Indexed,
{
    type Output = X::Output;

    fn any_valueless(&self) -> bool {
        [
            self.0.active_index(),
            self.1.active_index(),
            self.2.active_index(),
            self.3.active_index(),
        ]
        .contains(&vessel_foundation::NPOS)
    }

    fn run(self, bound: P, visitor: V) -> Self::Output {
        self.0.bind(bound, (self.1, self.2, self.3), visitor)
    }
}

/// Visits up to four variants, passed as a tuple of `&Variant` and
/// `&mut Variant` in any mix.
///
/// `visit((), visitor)` calls a visitor taking no references.
///
/// # Errors
///
/// Fails with a valueless [`BadVariantAccess`] if any variant is valueless;
/// the visitor is not called.
pub fn visit<Vs, V>(variants: Vs, visitor: V) -> Result<Vs::Output>
where
    Vs: VisitChain<(), V>,
{
    if variants.any_valueless() {
        return Err(BadVariantAccess::valueless().with_operation("visit"));
    }
    Ok(variants.run((), visitor))
}
