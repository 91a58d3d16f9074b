//! Test support
//!
//! Fluent assertion helpers for inspecting parsed trees in tests. Assertion
//! failures panic with the path of the node that missed, so a failing tree
//! test points at the offending element directly.

pub mod assertions;

pub use assertions::assert_fragment;
