//! Errors raised by the registry's entry points.
//!
//! Every error is a normal rejected call: it is synchronous, it is not retried by the registry, and
//! it leaves the registry exactly as it was before the call.

use nor_params::prelude::RegistryParams;
use nor_primitives::{
    address::Address,
    types::{NodeOperatorId, Timestamp},
};
use thiserror::Error;

use crate::{auth::Capability, rewards::DistributionError};

/// Why an address was refused as a reward address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressViolation {
    /// The null account.
    #[error("zero address")]
    Zero,
    /// The protocol's own token account.
    #[error("treasury address")]
    Treasury,
}

/// Why an operator cannot make the requested state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionViolation {
    /// Activating an operator that is already active.
    #[error("operator is already active")]
    AlreadyActive,
    /// Deactivating an operator that is already inactive.
    #[error("operator is already inactive")]
    AlreadyInactive,
    /// Setting the staking limit of an inactive operator.
    #[error("operator is inactive")]
    Inactive,
    /// Clearing the penalty of an operator that still has stuck validators.
    #[error("operator still has stuck validators")]
    StillStuck,
    /// Clearing the penalty of an operator without an armed penalty window.
    #[error("operator has no penalty window to clear")]
    NoPenaltyWindow,
}

/// Errors that can occur in the Node Operators Registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The caller lacks the capability the entry point requires.
    #[error("caller {caller} lacks {capability}")]
    Unauthorized {
        /// The rejected caller.
        caller: Address,
        /// The required capability.
        capability: Capability,
    },

    /// The operator id does not exist.
    #[error("node operator {id} is out of range (count: {count})")]
    OutOfRange {
        /// The requested id.
        id: NodeOperatorId,
        /// The number of operators at the time of the call.
        count: u64,
    },

    /// The operator name is empty or too long.
    #[error("node operator name must be 1..={max} bytes long, got {len}")]
    InvalidName {
        /// Length of the rejected name, in bytes.
        len: usize,
        /// The configured maximum.
        max: usize,
    },

    /// The reward address is not acceptable.
    #[error("invalid reward address {address}: {violation}")]
    InvalidAddress {
        /// The rejected address.
        address: Address,
        /// What is wrong with it.
        violation: AddressViolation,
    },

    /// The write would not change anything.
    #[error("{field} of node operator {id} already has this value")]
    NoOpValue {
        /// The operator.
        id: NodeOperatorId,
        /// The field that would be written.
        field: &'static str,
    },

    /// The operator is in the wrong state for the call.
    #[error("invalid state transition for node operator {id}: {violation}")]
    InvalidStateTransition {
        /// The operator.
        id: NodeOperatorId,
        /// What is wrong with its state.
        violation: TransitionViolation,
    },

    /// The registry is full.
    #[error("node operators count reached the limit of {max}")]
    CapacityExceeded {
        /// The configured maximum.
        max: u64,
    },

    /// A batch would decrease an operator's exited validators count.
    #[error("exited validators count of node operator {id} cannot decrease from {current} to {requested}")]
    ExitedCountDecreased {
        /// The operator.
        id: NodeOperatorId,
        /// The count the batch would have to go below.
        current: u64,
        /// The requested count.
        requested: u64,
    },

    /// The penalty window has not elapsed yet.
    #[error("penalty window of node operator {id} ends at {ends_at}, now is {now}")]
    PenaltyWindowNotElapsed {
        /// The operator.
        id: NodeOperatorId,
        /// When the window closes.
        ends_at: Timestamp,
        /// The time of the call.
        now: Timestamp,
    },

    /// The id and count sequences of a batch have different lengths.
    #[error("batch has {ids} operator ids but {counts} counts")]
    BatchLengthMismatch {
        /// Number of ids.
        ids: usize,
        /// Number of counts.
        counts: usize,
    },

    /// The stuck penalty delay is above the configured maximum.
    #[error("stuck penalty delay {delay} exceeds the maximum of {max}")]
    PenaltyDelayOutOfRange {
        /// The requested delay.
        delay: u64,
        /// The configured maximum.
        max: u64,
    },

    /// The configured limits exceed the protocol constants.
    #[error("registry params {params:?} exceed the protocol limits")]
    ParamsAboveProtocolLimits {
        /// The rejected limits.
        params: RegistryParams,
    },

    /// The reward distributor failed.
    #[error("rewards distribution failed: {0}")]
    Distribution(#[from] DistributionError),
}

/// The result type for operations in the Node Operators Registry.
pub type RegistryResult<T> = Result<T, RegistryError>;
