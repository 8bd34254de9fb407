//! Errors for parsing primitive types.

use thiserror::Error;

use crate::address::ADDRESS_SIZE;

/// Error while parsing an [`Address`](crate::address::Address).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The text is not valid hex.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// The decoded address has the wrong size.
    #[error("address must be exactly {ADDRESS_SIZE} bytes, got {0} bytes")]
    InvalidSize(usize),
}
