use nor_primitives::address::Address;

use crate::{
    errors::RegistryError,
    summary::{NodeOperatorSummary, StakingModuleSummary},
    testing::*,
};

#[test]
fn get_node_operator_omits_name_unless_requested() {
    let registry = create_registry_with_operators();

    let view = registry.get_node_operator(1, false).expect("must exist");
    assert_eq!(view.name, None);
    assert!(view.active);
    assert_eq!(view.reward_address, reward_address(1));
    assert_eq!(view.total_added, 15);
    assert_eq!(view.total_vetted, 10);
    assert_eq!(view.total_deposited, 7);
    assert_eq!(view.total_exited, 0);

    assert_eq!(
        registry.get_node_operator(3, true),
        Err(RegistryError::OutOfRange { id: 3, count: 3 })
    );
}

#[test]
fn node_operator_ids_are_clipped() {
    let registry = create_registry_with_operators();

    assert_eq!(registry.node_operator_ids(0, 100), vec![0, 1, 2]);
    assert_eq!(registry.node_operator_ids(1, 1), vec![1]);
    assert_eq!(registry.node_operator_ids(2, u64::MAX), vec![2]);
    assert!(registry.node_operator_ids(3, 10).is_empty());
    assert!(registry.node_operator_ids(u64::MAX, u64::MAX).is_empty());
    assert!(registry.node_operator_ids(0, 0).is_empty());
}

#[test]
fn unknown_ids_are_safe_to_probe() {
    let registry = create_registry_with_operators();

    assert!(!registry.is_node_operator_active(3));
    assert!(!registry.is_node_operator_active(u64::MAX));
    assert!(!registry.is_operator_penalized(3, GENESIS_TIME));
    assert!(registry.is_operator_penalty_cleared(3).is_err());
    assert!(registry.node_operator_summary(3).is_err());
}

#[test]
fn summaries_reflect_current_state() {
    let mut registry = create_registry_with_operators();

    assert_eq!(
        registry.node_operator_summary(0).expect("must exist"),
        NodeOperatorSummary {
            stuck_validators_count: 0,
            refunded_validators_count: 0,
            stuck_penalty_end_timestamp: 0,
            total_exited_validators: 1,
            total_deposited_validators: 5,
            depositable_validators_count: 1,
        }
    );

    // op 2 is inactive, so its 5 vetted keys are not depositable
    assert_eq!(
        registry.staking_module_summary(),
        StakingModuleSummary {
            total_exited_validators: 1,
            total_deposited_validators: 12,
            depositable_validators_count: 4,
        }
    );

    registry.mock_set_stuck(1, 1, 0, 0);
    assert_eq!(
        registry
            .node_operator_summary(1)
            .expect("must exist")
            .depositable_validators_count,
        0
    );
    assert_eq!(
        registry.staking_module_summary().depositable_validators_count,
        1
    );
}

#[test]
fn nonce_and_keys_op_index_agree() {
    let mut registry = create_registry_with_operators();
    registry.mock_set_nonce(41);

    registry
        .deactivate_node_operator(&manager(), 0)
        .expect("must deactivate");

    assert_eq!(registry.nonce(), 42);
    assert_eq!(registry.keys_op_index(), 42);
}

#[test]
fn locator_is_readable_after_change() {
    let mut registry = create_registry();
    let new_locator = Address::new([7; 20]);

    registry.mock_set_locator(new_locator);

    assert_eq!(registry.locator(), new_locator);
}
