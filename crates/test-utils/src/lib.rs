//! This crate provides test-utilities shared by the registry crates.
//!
//! These utilities are mostly used to generate deterministic or arbitrary addresses for testing
//! purposes.

pub mod address;
pub mod prelude;
