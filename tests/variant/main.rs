//! Integration tests for Layer 1: Variant
//!
//! Tests for construction, assignment, access, visitation and comparison of
//! `Variant`, including its behavior when operations panic.

mod assignment;
mod comparison;
mod visitation;
