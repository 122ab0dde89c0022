//! The Vessel discriminated union.
//!
//! This crate provides:
//! - [`Variant`] - A value holding one of a fixed tuple of alternatives inline
//! - [`visit`] / [`Visitor`] - Dispatch over the active alternatives of up to four variants
//! - Free accessors ([`get`], [`get_if`], [`holds_alternative`], ...)
//!
//! Storage is an arena union plus an index; every per-alternative operation
//! (drop, clone, compare, hash, visit) goes through the constant-time
//! dispatch tables from `vessel_foundation`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod access;
mod assign;
mod compare;
mod construct;
mod storage;
pub mod variant;
pub mod visit;

pub use access::{
    get, get_as, get_as_mut, get_if, get_if_as, get_if_as_mut, get_if_mut, get_mut,
    holds_alternative, variant_size,
};
pub use variant::Variant;
pub use visit::{Indexed, MutStep, RefStep, VisitChain, Visitable, Visitor, visit};
