//! Aggregated views over the registry, recomputed on every read.

use nor_primitives::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Summary of a single operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeOperatorSummary {
    /// Stuck validators count.
    pub stuck_validators_count: u64,
    /// Refunded validators count.
    pub refunded_validators_count: u64,
    /// End of the penalty window, `0` if none is armed.
    pub stuck_penalty_end_timestamp: Timestamp,
    /// Exited validators count.
    pub total_exited_validators: u64,
    /// Deposited validators count.
    pub total_deposited_validators: u64,
    /// Keys that can still be deposited right now.
    pub depositable_validators_count: u64,
}

/// Summary of the whole staking module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingModuleSummary {
    /// Exited validators across all operators.
    pub total_exited_validators: u64,
    /// Deposited validators across all operators.
    pub total_deposited_validators: u64,
    /// Keys that can still be deposited across all operators.
    pub depositable_validators_count: u64,
}

impl StakingModuleSummary {
    pub(crate) fn accumulate(mut self, op: &NodeOperatorSummary) -> Self {
        self.total_exited_validators = self
            .total_exited_validators
            .saturating_add(op.total_exited_validators);
        self.total_deposited_validators = self
            .total_deposited_validators
            .saturating_add(op.total_deposited_validators);
        self.depositable_validators_count = self
            .depositable_validators_count
            .saturating_add(op.depositable_validators_count);
        self
    }
}
