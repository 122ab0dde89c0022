//! Type-level building blocks for Vessel discriminated unions.
//!
//! This crate provides:
//! - [`Alternatives`] - Descriptor of a fixed list of alternative types (a tuple)
//! - [`Cell`] / [`Empty`] - The recursive arena union sized for every alternative
//! - [`Dispatch`] / [`Handle`] - O(1) runtime-index to compile-time-type dispatch
//! - Capability tables ([`CloneAlternatives`], [`PartialEqAlternatives`], ...)
//! - [`BadVariantAccess`] - The error raised by misused accessors
//! - [`FailurePolicy`] - Whether misuse unwinds or aborts

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod capability;
pub mod config;
pub mod dispatch;
pub mod error;
mod impls;
pub mod monostate;
pub mod tuple;
pub mod typelist;

pub use arena::{Cell, Empty};
pub use capability::{
    CloneAlternatives, CopyAlternatives, DebugAlternatives, EqAlternatives, HashAlternatives,
    OrdAlternatives, PartialEqAlternatives, PartialOrdAlternatives,
};
pub use config::{FAILURE_POLICY, FailurePolicy, raise};
pub use dispatch::{Dispatch, Handle, chronomorphize};
pub use error::{AccessErrorKind, BadVariantAccess, Result};
pub use monostate::Monostate;
pub use tuple::Append;
pub use typelist::{
    AlternativeAt, Alternatives, At, Converts, Holds, NPOS, Position, Triviality,
    converting_index, index_of,
};
