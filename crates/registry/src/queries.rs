//! Read-only accessors of the Node Operators Registry.
//!
//! Summaries are recomputed from the current state on every read.

use nor_params::prelude::ModuleType;
use nor_primitives::{
    address::Address,
    types::{NodeOperatorId, Nonce, Timestamp},
};

use crate::{
    clock::Clock,
    errors::RegistryResult,
    machine::NodeOperatorsRegistry,
    operator::NodeOperatorView,
    rewards::RewardShare,
    summary::{NodeOperatorSummary, StakingModuleSummary},
};

impl<A, C, D> NodeOperatorsRegistry<A, C, D> {
    /// Returns an operator, with its name only if `include_name` is set.
    pub fn get_node_operator(
        &self,
        id: NodeOperatorId,
        include_name: bool,
    ) -> RegistryResult<NodeOperatorView> {
        Ok(self.state.operator(id)?.view(include_name))
    }

    /// Returns the number of operators ever added.
    pub fn node_operators_count(&self) -> u64 {
        self.state.operators_count()
    }

    /// Returns the number of active operators.
    pub const fn active_node_operators_count(&self) -> u64 {
        self.state.active_count()
    }

    /// Returns whether an operator is active. Unknown ids are reported as inactive.
    pub fn is_node_operator_active(&self, id: NodeOperatorId) -> bool {
        self.state.operator(id).is_ok_and(|operator| operator.active())
    }

    /// Returns up to `limit` operator ids starting at `offset`.
    ///
    /// The window is clipped to the existing ids; an offset past the end yields nothing.
    pub fn node_operator_ids(&self, offset: u64, limit: u64) -> Vec<NodeOperatorId> {
        let count = self.state.operators_count();
        let start = offset.min(count);
        let end = start.saturating_add(limit).min(count);

        (start..end).collect()
    }

    /// Returns the change counter.
    pub const fn nonce(&self) -> Nonce {
        self.state.nonce()
    }

    /// Returns the keys op index, which always equals [`Self::nonce`].
    pub const fn keys_op_index(&self) -> Nonce {
        self.state.nonce()
    }

    /// Returns the stuck penalty delay, in seconds.
    pub const fn stuck_penalty_delay(&self) -> u64 {
        self.state.stuck_penalty_delay()
    }

    /// Returns the staking module type.
    pub const fn get_type(&self) -> ModuleType {
        self.state.module_type()
    }

    /// Returns the locator address.
    pub const fn locator(&self) -> Address {
        self.state.locator()
    }

    /// Returns the registry version.
    pub const fn contract_version(&self) -> u64 {
        self.state.contract_version()
    }

    /// Returns whether an operator is penalized at `now`. Unknown ids are not penalized.
    pub fn is_operator_penalized(&self, id: NodeOperatorId, now: Timestamp) -> bool {
        self.state
            .operator(id)
            .is_ok_and(|operator| operator.is_penalized(now))
    }
}

impl<A, C: Clock, D> NodeOperatorsRegistry<A, C, D> {
    /// Returns whether an operator is not penalized and has no penalty window left to clear.
    pub fn is_operator_penalty_cleared(&self, id: NodeOperatorId) -> RegistryResult<bool> {
        let now = self.clock.now();
        Ok(self.state.operator(id)?.is_penalty_cleared(now))
    }

    /// Returns the summary of an operator.
    pub fn node_operator_summary(&self, id: NodeOperatorId) -> RegistryResult<NodeOperatorSummary> {
        let now = self.clock.now();
        let operator = self.state.operator(id)?;

        Ok(NodeOperatorSummary {
            stuck_validators_count: operator.stuck_count(),
            refunded_validators_count: operator.refunded_count(),
            stuck_penalty_end_timestamp: operator.stuck_penalty_end_at(),
            total_exited_validators: operator.total_exited(),
            total_deposited_validators: operator.total_deposited(),
            depositable_validators_count: operator.depositable(now),
        })
    }

    /// Returns the totals across all operators.
    pub fn staking_module_summary(&self) -> StakingModuleSummary {
        (0..self.state.operators_count())
            .filter_map(|id| self.node_operator_summary(id).ok())
            .fold(StakingModuleSummary::default(), |acc, op| acc.accumulate(&op))
    }

    /// Returns the reward share of every active operator that has active validators.
    ///
    /// Shares of operators that are penalized right now are flagged rather than left out.
    pub fn reward_shares(&self) -> Vec<RewardShare> {
        let now = self.clock.now();

        self.state
            .operators()
            .iter()
            .zip(0..)
            .filter(|(operator, _)| operator.active() && operator.active_validators() > 0)
            .map(|(operator, operator_id)| RewardShare {
                operator_id,
                recipient: operator.reward_address(),
                active_validators: operator.active_validators(),
                penalized: operator.is_penalized(now),
            })
            .collect()
    }
}
