//! Direct setters for state that is owned by components outside the registry, or that only
//! changes on initialization.
//!
//! None of these emit notifications or touch the nonce.

use nor_primitives::{
    address::Address,
    types::{NodeOperatorId, Nonce},
};

use crate::{machine::NodeOperatorsRegistry, testing::fixtures::KeyCounts};

impl<A, C, D> NodeOperatorsRegistry<A, C, D> {
    pub(crate) fn mock_set_nonce(&mut self, nonce: Nonce) {
        self.state.nonce = nonce;
    }

    pub(crate) fn mock_set_locator(&mut self, locator: Address) {
        self.state.locator = locator;
    }

    pub(crate) fn mock_set_stuck_penalty_delay(&mut self, delay: u64) {
        self.state.stuck_penalty_delay = delay;
    }

    /// Flips the active flag and keeps the active count consistent.
    pub(crate) fn mock_set_active(&mut self, id: NodeOperatorId, active: bool) {
        let operator = self.state.operator_mut(id).expect("operator must exist");
        if operator.active == active {
            return;
        }
        operator.active = active;

        if active {
            self.state.active_count += 1;
        } else {
            self.state.active_count -= 1;
        }
    }

    pub(crate) fn mock_set_signing_keys(&mut self, id: NodeOperatorId, counts: KeyCounts) {
        let operator = self.state.operator_mut(id).expect("operator must exist");
        operator.total_added = counts.added;
        operator.total_vetted = counts.vetted;
        operator.total_deposited = counts.deposited;
        operator.total_exited = counts.exited;
    }

    pub(crate) fn mock_set_stuck(
        &mut self,
        id: NodeOperatorId,
        stuck: u64,
        refunded: u64,
        stuck_penalty_end_at: u64,
    ) {
        let operator = self.state.operator_mut(id).expect("operator must exist");
        operator.stuck_count = stuck;
        operator.refunded_count = refunded;
        operator.stuck_penalty_end_at = stuck_penalty_end_at;
    }
}
