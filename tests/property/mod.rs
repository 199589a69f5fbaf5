//! Property-based tests
//!
//! Invariants of the report reductions over arbitrary collections.

pub mod report_proptest;
