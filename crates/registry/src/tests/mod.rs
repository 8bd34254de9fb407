//! Tests of the Node Operators Registry entry points.

mod reads;

use nor_primitives::{address::Address, types::NodeOperatorId};
use nor_test_utils::prelude::{arb_address, arb_nonzero_address};
use proptest::prelude::*;

use crate::{
    calls::RegistryCall,
    events::RegistryEvent,
    testing::{limit_setter, manager, reward_address, router, stranger, treasury},
};

/// The nonce notification pair emitted when the nonce becomes `nonce`.
pub(super) const fn nonce_pair(nonce: u64) -> [RegistryEvent; 2] {
    [
        RegistryEvent::KeysOpIndexSet { index: nonce },
        RegistryEvent::NonceChanged { nonce },
    ]
}

/// Ids around the fixture table, including some that do not exist.
fn arb_id() -> impl Strategy<Value = NodeOperatorId> {
    prop_oneof![4 => 0u64..4, 1 => any::<u64>()]
}

fn arb_count() -> impl Strategy<Value = u64> {
    prop_oneof![4 => 0u64..20, 1 => any::<u64>()]
}

fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z]{1,16}",
        1 => Just(String::new()),
        1 => "[a-z]{256,260}",
    ]
}

fn arb_reward_address() -> impl Strategy<Value = Address> {
    prop_oneof![
        4 => (0u64..6).prop_map(reward_address),
        1 => Just(Address::ZERO),
        1 => Just(treasury()),
        1 => arb_address(),
    ]
}

fn arb_batch() -> impl Strategy<Value = (Vec<NodeOperatorId>, Vec<u64>)> {
    prop_oneof![
        8 => prop::collection::vec((arb_id(), arb_count()), 0..4)
            .prop_map(|pairs| -> (Vec<NodeOperatorId>, Vec<u64>) { pairs.into_iter().unzip() }),
        1 => (
            prop::collection::vec(arb_id(), 0..4),
            prop::collection::vec(arb_count(), 0..4),
        ),
    ]
}

/// Any call the registry accepts, with arguments biased towards the fixture operators.
pub(super) fn arb_call() -> impl Strategy<Value = RegistryCall> {
    prop_oneof![
        (arb_name(), arb_reward_address()).prop_map(|(name, reward_address)| {
            RegistryCall::AddNodeOperator {
                name,
                reward_address,
            }
        }),
        arb_id().prop_map(|id| RegistryCall::ActivateNodeOperator { id }),
        arb_id().prop_map(|id| RegistryCall::DeactivateNodeOperator { id }),
        (arb_id(), arb_name()).prop_map(|(id, name)| RegistryCall::SetNodeOperatorName { id, name }),
        (arb_id(), arb_reward_address()).prop_map(|(id, reward_address)| {
            RegistryCall::SetNodeOperatorRewardAddress { id, reward_address }
        }),
        (arb_id(), arb_count())
            .prop_map(|(id, vetted)| RegistryCall::SetNodeOperatorStakingLimit { id, vetted }),
        arb_batch().prop_map(|(ids, counts)| RegistryCall::UpdateStuckValidatorsCount { ids, counts }),
        arb_batch()
            .prop_map(|(ids, counts)| RegistryCall::UpdateExitedValidatorsCount { ids, counts }),
        (arb_id(), arb_count())
            .prop_map(|(id, count)| RegistryCall::UpdateRefundedValidatorsCount { id, count }),
        arb_id().prop_map(|id| RegistryCall::ClearNodeOperatorPenalty { id }),
        arb_count().prop_map(|delay| RegistryCall::SetStuckPenaltyDelay { delay }),
        any::<u64>().prop_map(|total_shares| RegistryCall::OnRewardsMinted { total_shares }),
        Just(RegistryCall::OnValidatorCountsSettled),
    ]
}

/// The role holders of the test access list, and callers without any role.
pub(super) fn arb_caller() -> impl Strategy<Value = Address> {
    prop_oneof![
        3 => Just(manager()),
        3 => Just(limit_setter()),
        3 => Just(router()),
        1 => Just(stranger()),
        1 => arb_nonzero_address(),
    ]
}

pub(super) fn arb_calls() -> impl Strategy<Value = Vec<(Address, RegistryCall)>> {
    prop::collection::vec((arb_caller(), arb_call()), 1..24)
}
