//! Vessel - Fixed-footprint discriminated unions
//!
//! This crate re-exports all layers of the Vessel system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: vessel_variant    - Storage, copy/assign rungs, Variant facade, visitation
//! Layer 0: vessel_foundation - Alternative lists, arena union, dispatch tables, errors
//! ```

pub use vessel_foundation as foundation;
pub use vessel_variant as variant;

pub use vessel_foundation::{BadVariantAccess, Monostate, NPOS};
pub use vessel_variant::{Variant, Visitor, visit};
