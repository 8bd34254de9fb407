//! Registries, roles and operator tables shared by the registry tests.

use nor_params::prelude::{ModuleType, RegistryParams, DEFAULT_MODULE_TYPE};
use nor_primitives::{address::Address, types::Timestamp};
use nor_test_utils::prelude::certain_address;

use crate::{
    auth::{AccessControlList, Capability},
    clock::ManualClock,
    config::RegistryCfg,
    machine::NodeOperatorsRegistry,
    rewards::ProportionalDistributor,
    state::RegistryState,
};

/// The registry type every test runs against.
pub(crate) type TestRegistry =
    NodeOperatorsRegistry<AccessControlList, ManualClock, ProportionalDistributor>;

/// Time the test clock starts at.
pub(crate) const GENESIS_TIME: Timestamp = 1_700_000_000;
/// Stuck penalty delay the test registry is configured with.
pub(crate) const TEST_PENALTY_DELAY: u64 = 7 * 24 * 60 * 60;
/// Reward balance the test distributor starts with.
pub(crate) const TEST_REWARDS_BALANCE: u128 = 1_000_000;

/// Holds the operator management capability.
pub(crate) fn manager() -> Address {
    certain_address("manager")
}

/// Holds the staking limit capability.
pub(crate) fn limit_setter() -> Address {
    certain_address("limit-setter")
}

/// Holds the staking router capability.
pub(crate) fn router() -> Address {
    certain_address("staking-router")
}

/// Holds no capability at all.
pub(crate) fn stranger() -> Address {
    certain_address("stranger")
}

pub(crate) fn treasury() -> Address {
    certain_address("treasury")
}

pub(crate) fn locator() -> Address {
    certain_address("locator")
}

/// The reward address of the `idx`-th fixture operator.
pub(crate) fn reward_address(idx: u64) -> Address {
    certain_address(&format!("operator-{idx}"))
}

pub(crate) fn test_cfg() -> RegistryCfg {
    RegistryCfg {
        module_type: ModuleType::try_from(DEFAULT_MODULE_TYPE)
            .expect("default module type must fit"),
        locator: locator(),
        treasury: treasury(),
        stuck_penalty_delay: TEST_PENALTY_DELAY,
        params: RegistryParams::default(),
    }
}

pub(crate) fn test_acl() -> AccessControlList {
    AccessControlList::new()
        .with_grant(Capability::ManageNodeOperator, manager())
        .with_grant(Capability::SetNodeOperatorLimit, limit_setter())
        .with_grant(Capability::StakingRouter, router())
}

/// Creates an empty registry whose clock reads [`GENESIS_TIME`].
pub(crate) fn create_registry() -> TestRegistry {
    create_registry_with_cfg(test_cfg())
}

pub(crate) fn create_registry_with_cfg(cfg: RegistryCfg) -> TestRegistry {
    let (registry, _) = NodeOperatorsRegistry::initialize(
        cfg,
        test_acl(),
        ManualClock::new(GENESIS_TIME),
        ProportionalDistributor::new(TEST_REWARDS_BALANCE),
    )
    .expect("test configuration must be valid");

    registry
}

/// Rebuilds a test registry around `state`.
pub(crate) fn create_registry_from_state(state: RegistryState) -> TestRegistry {
    NodeOperatorsRegistry::restore(
        test_cfg(),
        state,
        test_acl(),
        ManualClock::new(GENESIS_TIME),
        ProportionalDistributor::new(TEST_REWARDS_BALANCE),
    )
}

pub(crate) fn get_state(registry: &TestRegistry) -> &RegistryState {
    registry.state()
}

/// Key counts of a fixture operator.
#[derive(Debug, Clone, Copy)]
pub(crate) struct KeyCounts {
    pub(crate) added: u64,
    pub(crate) vetted: u64,
    pub(crate) deposited: u64,
    pub(crate) exited: u64,
}

/// The three operators of [`create_registry_with_operators`].
///
/// Operator 2 is inactive.
pub(crate) const FIXTURE_OPERATORS: [KeyCounts; 3] = [
    KeyCounts {
        added: 10,
        vetted: 6,
        deposited: 5,
        exited: 1,
    },
    KeyCounts {
        added: 15,
        vetted: 10,
        deposited: 7,
        exited: 0,
    },
    KeyCounts {
        added: 10,
        vetted: 5,
        deposited: 0,
        exited: 0,
    },
];

/// Creates a registry holding the [`FIXTURE_OPERATORS`]. The nonce is still zero.
pub(crate) fn create_registry_with_operators() -> TestRegistry {
    let mut registry = create_registry();

    for (idx, counts) in (0..).zip(FIXTURE_OPERATORS) {
        let (id, _) = registry
            .add_node_operator(&manager(), format!("operator-{idx}"), reward_address(idx))
            .expect("fixture operator must be valid");
        registry.mock_set_signing_keys(id, counts);
    }
    registry.mock_set_active(2, false);

    registry
}
