//! Free accessor functions.
//!
//! Mirrors of the [`Variant`] methods in free-function form. The `get_if`
//! family takes an `Option` so that a missing variant is handled the same way
//! as a wrong alternative.

use vessel_foundation::{AlternativeAt, Alternatives, At, Holds, Result};

use crate::variant::Variant;

/// Returns true if `variant` holds an alternative of type `T`.
#[must_use]
pub fn holds_alternative<T, P, L>(variant: &Variant<L>) -> bool
where
    L: Holds<T, P>,
{
    variant.holds_alternative::<T, P>()
}

/// The alternative at `I`.
///
/// # Errors
///
/// Fails if another alternative is active or the variant is valueless.
pub fn get<const I: usize, L>(variant: &Variant<L>) -> Result<&AlternativeAt<L, I>>
where
    L: At<I>,
{
    variant.get::<I>()
}

/// Mutable access to the alternative at `I`.
///
/// # Errors
///
/// Fails if another alternative is active or the variant is valueless.
pub fn get_mut<const I: usize, L>(variant: &mut Variant<L>) -> Result<&mut AlternativeAt<L, I>>
where
    L: At<I>,
{
    variant.get_mut::<I>()
}

/// The alternative of type `T`.
///
/// # Errors
///
/// Fails if another alternative is active or the variant is valueless.
pub fn get_as<T, P, L>(variant: &Variant<L>) -> Result<&T>
where
    L: Holds<T, P>,
{
    variant.get_as::<T, P>()
}

/// Mutable access to the alternative of type `T`.
///
/// # Errors
///
/// Fails if another alternative is active or the variant is valueless.
pub fn get_as_mut<T, P, L>(variant: &mut Variant<L>) -> Result<&mut T>
where
    L: Holds<T, P>,
{
    variant.get_as_mut::<T, P>()
}

/// The alternative at `I`, or `None` for a missing variant, another active
/// alternative or a valueless variant.
#[must_use]
pub fn get_if<const I: usize, L>(variant: Option<&Variant<L>>) -> Option<&AlternativeAt<L, I>>
where
    L: At<I>,
{
    variant?.get_if::<I>()
}

/// Mutable form of [`get_if`].
#[must_use]
pub fn get_if_mut<const I: usize, L>(
    variant: Option<&mut Variant<L>>,
) -> Option<&mut AlternativeAt<L, I>>
where
    L: At<I>,
{
    variant?.get_if_mut::<I>()
}

/// The alternative of type `T`, or `None`.
#[must_use]
pub fn get_if_as<T, P, L>(variant: Option<&Variant<L>>) -> Option<&T>
where
    L: Holds<T, P>,
{
    variant?.get_if_as::<T, P>()
}

/// Mutable form of [`get_if_as`].
#[must_use]
pub fn get_if_as_mut<T, P, L>(variant: Option<&mut Variant<L>>) -> Option<&mut T>
where
    L: Holds<T, P>,
{
    variant?.get_if_as_mut::<T, P>()
}

/// Number of alternatives in `L`.
#[must_use]
pub const fn variant_size<L: Alternatives>() -> usize {
    L::COUNT
}
