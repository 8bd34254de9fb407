//! The notifications emitted by the Node Operators Registry.
//!
//! Every accepted call returns the notifications it emitted in emission order. Consumers that cache
//! deposit data watch for the [`RegistryEvent::KeysOpIndexSet`] and
//! [`RegistryEvent::NonceChanged`] pair, which is always emitted after the domain notifications of
//! the call that caused it.

use nor_params::prelude::ModuleType;
use nor_primitives::{
    address::Address,
    types::{NodeOperatorId, Nonce, Timestamp},
};
use serde::{Deserialize, Serialize};

/// The notifications emitted by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A new operator was appended to the registry.
    NodeOperatorAdded {
        /// The id assigned to the operator.
        id: NodeOperatorId,
        /// The operator's name.
        name: String,
        /// Where the operator's rewards go.
        reward_address: Address,
        /// The operator's initial staking limit, always zero.
        staking_limit: u64,
    },
    /// An operator was activated or deactivated.
    NodeOperatorActiveSet {
        /// The operator.
        id: NodeOperatorId,
        /// The new active flag.
        active: bool,
    },
    /// An operator was renamed.
    NodeOperatorNameSet {
        /// The operator.
        id: NodeOperatorId,
        /// The new name.
        name: String,
    },
    /// An operator's reward address changed.
    NodeOperatorRewardAddressSet {
        /// The operator.
        id: NodeOperatorId,
        /// The new reward address.
        reward_address: Address,
    },
    /// An operator's vetted keys count changed.
    VettedSigningKeysCountChanged {
        /// The operator.
        id: NodeOperatorId,
        /// The new (clamped) vetted count.
        approved: u64,
    },
    /// An operator's exited keys count changed.
    ExitedSigningKeysCountChanged {
        /// The operator.
        id: NodeOperatorId,
        /// The new exited count.
        exited: u64,
    },
    /// An operator's stuck/refunded counters or penalty window changed.
    StuckPenaltyStateChanged {
        /// The operator.
        id: NodeOperatorId,
        /// Stuck validators count.
        stuck: u64,
        /// Refunded validators count.
        refunded: u64,
        /// End of the penalty window, `0` if none is armed.
        stuck_penalty_end_at: Timestamp,
    },
    /// The keys op index changed.
    KeysOpIndexSet {
        /// The new index.
        index: Nonce,
    },
    /// The nonce changed.
    NonceChanged {
        /// The new nonce.
        nonce: Nonce,
    },
    /// The stuck penalty delay changed.
    StuckPenaltyDelayChanged {
        /// The new delay, in seconds.
        delay: u64,
    },
    /// An operator's penalty window was cleared.
    NodeOperatorPenaltyCleared {
        /// The operator.
        id: NodeOperatorId,
    },
    /// An operator was excluded from a reward distribution because it is penalized.
    NodeOperatorPenalized {
        /// The operator.
        id: NodeOperatorId,
        /// The recipient that was skipped.
        recipient: Address,
        /// The weight the operator would have had.
        active_validators: u64,
    },
    /// Rewards were paid to a recipient.
    RewardsDistributed {
        /// The account that was paid.
        recipient: Address,
        /// The amount paid.
        amount: u128,
    },
    /// The registry version was set.
    ContractVersionSet {
        /// The version.
        version: u64,
    },
    /// The service directory address was set.
    LocatorContractSet {
        /// The locator address.
        locator: Address,
    },
    /// The staking module type was set.
    StakingModuleTypeSet {
        /// The module type.
        module_type: ModuleType,
    },
}

impl RegistryEvent {
    /// Returns `true` for the pair of notifications that announce a nonce change.
    pub const fn is_nonce_notification(&self) -> bool {
        matches!(
            self,
            RegistryEvent::KeysOpIndexSet { .. } | RegistryEvent::NonceChanged { .. }
        )
    }
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::NodeOperatorAdded {
                id,
                name,
                reward_address,
                staking_limit,
            } => write!(
                f,
                "NodeOperatorAdded #{id} {name:?} rewards to {reward_address} (limit: {staking_limit})"
            ),
            RegistryEvent::NodeOperatorActiveSet { id, active } => {
                write!(f, "NodeOperatorActiveSet #{id}: {active}")
            }
            RegistryEvent::NodeOperatorNameSet { id, name } => {
                write!(f, "NodeOperatorNameSet #{id}: {name:?}")
            }
            RegistryEvent::NodeOperatorRewardAddressSet { id, reward_address } => {
                write!(f, "NodeOperatorRewardAddressSet #{id}: {reward_address}")
            }
            RegistryEvent::VettedSigningKeysCountChanged { id, approved } => {
                write!(f, "VettedSigningKeysCountChanged #{id}: {approved}")
            }
            RegistryEvent::ExitedSigningKeysCountChanged { id, exited } => {
                write!(f, "ExitedSigningKeysCountChanged #{id}: {exited}")
            }
            RegistryEvent::StuckPenaltyStateChanged {
                id,
                stuck,
                refunded,
                stuck_penalty_end_at,
            } => write!(
                f,
                "StuckPenaltyStateChanged #{id}: stuck {stuck}, refunded {refunded}, ends at {stuck_penalty_end_at}"
            ),
            RegistryEvent::KeysOpIndexSet { index } => write!(f, "KeysOpIndexSet: {index}"),
            RegistryEvent::NonceChanged { nonce } => write!(f, "NonceChanged: {nonce}"),
            RegistryEvent::StuckPenaltyDelayChanged { delay } => {
                write!(f, "StuckPenaltyDelayChanged: {delay}s")
            }
            RegistryEvent::NodeOperatorPenaltyCleared { id } => {
                write!(f, "NodeOperatorPenaltyCleared #{id}")
            }
            RegistryEvent::NodeOperatorPenalized {
                id,
                recipient,
                active_validators,
            } => write!(
                f,
                "NodeOperatorPenalized #{id}: {recipient} skipped ({active_validators} validators)"
            ),
            RegistryEvent::RewardsDistributed { recipient, amount } => {
                write!(f, "RewardsDistributed: {amount} to {recipient}")
            }
            RegistryEvent::ContractVersionSet { version } => {
                write!(f, "ContractVersionSet: {version}")
            }
            RegistryEvent::LocatorContractSet { locator } => {
                write!(f, "LocatorContractSet: {locator}")
            }
            RegistryEvent::StakingModuleTypeSet { module_type } => {
                write!(f, "StakingModuleTypeSet: {module_type}")
            }
        }
    }
}
