//! Re-exports of the most commonly used generators.

pub use crate::address::{arb_address, arb_nonzero_address, certain_address};
