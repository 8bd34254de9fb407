//! Scalar types used throughout the registry.

/// Dense, zero-based identifier of a node operator.
pub type NodeOperatorId = u64;

/// Seconds since the unix epoch.
pub type Timestamp = u64;

/// Value of the registry's change counter (a.k.a. keys op index).
pub type Nonce = u64;
