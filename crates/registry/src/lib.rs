//! This crate implements the node operators registry.
//!
//! The registry is a ledger of staking operators. Each operator owns a pool of validator signing
//! keys that move through a strict lifecycle (added, vetted, deposited, exited), may be flagged as
//! stuck at slashing risk, and takes part in reward distribution unless penalized.
//!
//! All mutation goes through entry points on [`machine::NodeOperatorsRegistry`] that are gated by
//! an external [`auth::Authorizer`]. Every entry point validates its whole input before touching
//! state and returns the ordered list of [`events::RegistryEvent`]s it emitted. The same entry
//! points can be driven through the [`state_machine::StateMachine`] trait with a serializable
//! [`calls::RegistryCall`].

pub mod auth;
pub mod calls;
pub mod clock;
pub mod config;
pub mod errors;
pub mod events;
pub mod machine;
pub mod operator;
pub mod queries;
pub mod rewards;
pub mod state;
pub mod state_machine;
pub mod summary;
pub mod transitions;

#[cfg(test)]
pub(crate) mod testing;
#[cfg(test)]
mod tests;
