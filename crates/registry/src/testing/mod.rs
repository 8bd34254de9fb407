//! Testing utilities for the Node Operators Registry.
//!
//! ## Organization
//!
//! - [`fixtures`] - Registries, roles and operator tables used across tests
//! - [`mocks`] - Setters for state the registry does not mutate itself
//! - [`transition`] - Value-based call testing helpers
//! - [`proptest`] - Property-based testing macros
//!
//! ## Value-Based Testing
//!
//! ```rust,ignore
//! use crate::testing::*;
//!
//! let mut registry = create_registry();
//! test_call(
//!     &mut registry,
//!     CallCase {
//!         caller: manager(),
//!         call: RegistryCall::ActivateNodeOperator { id: 0 },
//!         expected_notifications: vec![/* ... */],
//!     },
//! );
//! ```

pub(crate) mod fixtures;
pub(crate) mod mocks;
pub(crate) mod proptest;
pub(crate) mod transition;

pub(crate) use fixtures::*;
pub(crate) use transition::{test_call, test_rejected_call, CallCase, CallSequence, RejectedCall};
