//! The per-operator record kept by the registry.

use nor_primitives::{address::Address, types::Timestamp};
use serde::{Deserialize, Serialize};

/// A staking operator and the counters of its validator signing keys.
///
/// `total_added` and `total_deposited` are maintained by the signing-keys bookkeeping upstream of
/// this registry; the registry only reads them as the ceiling and floor of the vetted count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeOperator {
    pub(crate) name: String,
    pub(crate) reward_address: Address,
    pub(crate) active: bool,
    pub(crate) total_added: u64,
    pub(crate) total_vetted: u64,
    pub(crate) total_deposited: u64,
    pub(crate) total_exited: u64,
    pub(crate) stuck_count: u64,
    pub(crate) refunded_count: u64,
    pub(crate) stuck_penalty_end_at: Timestamp,
}

impl NodeOperator {
    /// Creates an active operator with all counters at zero.
    pub const fn new(name: String, reward_address: Address) -> Self {
        Self {
            name,
            reward_address,
            active: true,
            total_added: 0,
            total_vetted: 0,
            total_deposited: 0,
            total_exited: 0,
            stuck_count: 0,
            refunded_count: 0,
            stuck_penalty_end_at: 0,
        }
    }

    /// The operator's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the operator's rewards go.
    pub const fn reward_address(&self) -> Address {
        self.reward_address
    }

    /// Whether the operator is active.
    pub const fn active(&self) -> bool {
        self.active
    }

    /// Keys ever registered for the operator.
    pub const fn total_added(&self) -> u64 {
        self.total_added
    }

    /// Keys approved for deposit.
    pub const fn total_vetted(&self) -> u64 {
        self.total_vetted
    }

    /// Keys deposited.
    pub const fn total_deposited(&self) -> u64 {
        self.total_deposited
    }

    /// Keys exited.
    pub const fn total_exited(&self) -> u64 {
        self.total_exited
    }

    /// Keys at slashing risk.
    pub const fn stuck_count(&self) -> u64 {
        self.stuck_count
    }

    /// Stuck keys that have been remedied.
    pub const fn refunded_count(&self) -> u64 {
        self.refunded_count
    }

    /// End of the penalty window, `0` if none is armed.
    pub const fn stuck_penalty_end_at(&self) -> Timestamp {
        self.stuck_penalty_end_at
    }

    /// Deposited keys that have not exited yet.
    pub const fn active_validators(&self) -> u64 {
        self.total_deposited.saturating_sub(self.total_exited)
    }

    /// Whether the operator is penalized at `now`.
    ///
    /// An operator is penalized while it has stuck validators and until its penalty window has
    /// elapsed.
    pub const fn is_penalized(&self, now: Timestamp) -> bool {
        self.stuck_count > 0 || (self.stuck_penalty_end_at > 0 && now < self.stuck_penalty_end_at)
    }

    /// Whether the operator is not penalized at `now` and has no window left to clear.
    pub const fn is_penalty_cleared(&self, now: Timestamp) -> bool {
        !self.is_penalized(now) && self.stuck_penalty_end_at == 0
    }

    /// Keys that can still be deposited at `now`.
    pub const fn depositable(&self, now: Timestamp) -> u64 {
        if !self.active || self.is_penalized(now) {
            return 0;
        }

        self.total_vetted.saturating_sub(self.total_deposited)
    }

    /// Clamps a requested vetted count into `[total_deposited, total_added]`.
    pub fn clamp_vetted(&self, requested: u64) -> u64 {
        requested
            .max(self.total_deposited)
            .min(self.total_added)
    }

    /// Returns a read-only view of the operator, with the name only if requested.
    pub fn view(&self, include_name: bool) -> NodeOperatorView {
        NodeOperatorView {
            active: self.active,
            name: include_name.then(|| self.name.clone()),
            reward_address: self.reward_address,
            total_vetted: self.total_vetted,
            total_exited: self.total_exited,
            total_added: self.total_added,
            total_deposited: self.total_deposited,
        }
    }
}

/// The read-only record returned by
/// [`NodeOperatorsRegistry::get_node_operator`](crate::machine::NodeOperatorsRegistry::get_node_operator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeOperatorView {
    /// Whether the operator is active.
    pub active: bool,
    /// The operator's name, if it was requested.
    pub name: Option<String>,
    /// Where the operator's rewards go.
    pub reward_address: Address,
    /// Keys approved for deposit.
    pub total_vetted: u64,
    /// Keys exited.
    pub total_exited: u64,
    /// Keys ever registered.
    pub total_added: u64,
    /// Keys deposited.
    pub total_deposited: u64,
}
