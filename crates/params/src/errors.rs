//! Errors for the registry parameters.

use thiserror::Error;

use crate::types::MODULE_TYPE_SIZE;

/// Error while creating or validating a staking module type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleTypeError {
    /// The module type text does not fit the fixed-size identifier.
    ///
    /// One byte is always reserved for the null terminator.
    #[error("module type must be shorter than {MODULE_TYPE_SIZE} bytes, got {0} bytes")]
    TooLong(usize),

    /// The module type text is empty.
    #[error("module type must not be empty")]
    Empty,

    /// The raw identifier is not a null-terminated UTF-8 string.
    #[error("module type is not a null-terminated utf-8 string")]
    Malformed,
}
