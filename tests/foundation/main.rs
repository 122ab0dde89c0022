//! Integration tests for Layer 0: Foundation
//!
//! Tests for alternative-list descriptors, dispatch tables and the access error.

mod errors;
mod typelist;
