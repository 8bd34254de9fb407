//! This crate contains the protocol-critical parameters of the node operators registry: the hard
//! limits every deployment must agree on, the defaults used when a configuration leaves a value
//! out, and the staking module type identifier.

mod default;
pub mod errors;
pub mod prelude;
pub mod registry;
pub mod types;
