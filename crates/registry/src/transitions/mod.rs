//! The mutating entry points of the Node Operators Registry.
//!
//! Every entry point validates its whole input, the caller's capability and the operator's state
//! before it touches anything, so a rejected call leaves the registry unchanged and emits nothing.
//! Input and existence checks come before the capability check, except for the batch updates of
//! the staking router, which check the caller first.

mod operators;
mod penalties;
mod settlement;
mod staking_limit;
