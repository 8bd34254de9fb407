//! The calls accepted by the Node Operators Registry when it is driven as a state machine.

use nor_primitives::{address::Address, types::NodeOperatorId};
use serde::{Deserialize, Serialize};

/// A serializable invocation of one of the registry's mutating entry points.
///
/// The caller is not part of the call; it is supplied separately to
/// [`StateMachine::process_call`](crate::state_machine::StateMachine::process_call).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RegistryCall {
    /// Appends a new operator.
    AddNodeOperator {
        /// The operator's name.
        name: String,
        /// Where the operator's rewards go.
        reward_address: Address,
    },
    /// Activates an inactive operator.
    ActivateNodeOperator {
        /// The operator.
        id: NodeOperatorId,
    },
    /// Deactivates an active operator.
    DeactivateNodeOperator {
        /// The operator.
        id: NodeOperatorId,
    },
    /// Renames an operator.
    SetNodeOperatorName {
        /// The operator.
        id: NodeOperatorId,
        /// The new name.
        name: String,
    },
    /// Changes an operator's reward address.
    SetNodeOperatorRewardAddress {
        /// The operator.
        id: NodeOperatorId,
        /// The new reward address.
        reward_address: Address,
    },
    /// Requests a new vetted keys count for an operator.
    SetNodeOperatorStakingLimit {
        /// The operator.
        id: NodeOperatorId,
        /// The requested vetted count, clamped by the registry.
        vetted: u64,
    },
    /// Reports stuck validators counts for a batch of operators.
    UpdateStuckValidatorsCount {
        /// The operators.
        ids: Vec<NodeOperatorId>,
        /// The new counts, paired with `ids` by position.
        counts: Vec<u64>,
    },
    /// Reports exited validators counts for a batch of operators.
    UpdateExitedValidatorsCount {
        /// The operators.
        ids: Vec<NodeOperatorId>,
        /// The new counts, paired with `ids` by position.
        counts: Vec<u64>,
    },
    /// Reports the refunded validators count of an operator.
    UpdateRefundedValidatorsCount {
        /// The operator.
        id: NodeOperatorId,
        /// The new count.
        count: u64,
    },
    /// Clears an elapsed penalty window.
    ClearNodeOperatorPenalty {
        /// The operator.
        id: NodeOperatorId,
    },
    /// Changes the stuck penalty delay.
    SetStuckPenaltyDelay {
        /// The new delay, in seconds.
        delay: u64,
    },
    /// Notifies the registry that rewards were minted.
    OnRewardsMinted {
        /// The amount of shares minted.
        total_shares: u64,
    },
    /// Notifies the registry that validator counts are settled and rewards can be distributed.
    OnValidatorCountsSettled,
}

impl std::fmt::Display for RegistryCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryCall::AddNodeOperator { name, .. } => write!(f, "AddNodeOperator {name:?}"),
            RegistryCall::ActivateNodeOperator { id } => write!(f, "ActivateNodeOperator #{id}"),
            RegistryCall::DeactivateNodeOperator { id } => {
                write!(f, "DeactivateNodeOperator #{id}")
            }
            RegistryCall::SetNodeOperatorName { id, .. } => write!(f, "SetNodeOperatorName #{id}"),
            RegistryCall::SetNodeOperatorRewardAddress { id, .. } => {
                write!(f, "SetNodeOperatorRewardAddress #{id}")
            }
            RegistryCall::SetNodeOperatorStakingLimit { id, vetted } => {
                write!(f, "SetNodeOperatorStakingLimit #{id}: {vetted}")
            }
            RegistryCall::UpdateStuckValidatorsCount { ids, .. } => {
                write!(f, "UpdateStuckValidatorsCount for {} operators", ids.len())
            }
            RegistryCall::UpdateExitedValidatorsCount { ids, .. } => {
                write!(f, "UpdateExitedValidatorsCount for {} operators", ids.len())
            }
            RegistryCall::UpdateRefundedValidatorsCount { id, count } => {
                write!(f, "UpdateRefundedValidatorsCount #{id}: {count}")
            }
            RegistryCall::ClearNodeOperatorPenalty { id } => {
                write!(f, "ClearNodeOperatorPenalty #{id}")
            }
            RegistryCall::SetStuckPenaltyDelay { delay } => {
                write!(f, "SetStuckPenaltyDelay: {delay}s")
            }
            RegistryCall::OnRewardsMinted { total_shares } => {
                write!(f, "OnRewardsMinted: {total_shares}")
            }
            RegistryCall::OnValidatorCountsSettled => write!(f, "OnValidatorCountsSettled"),
        }
    }
}
