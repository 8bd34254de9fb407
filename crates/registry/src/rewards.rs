//! The reward-distribution sink and its shipped implementation.

use nor_primitives::{address::Address, types::NodeOperatorId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An operator's claim on the rewards being distributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardShare {
    /// The operator the share belongs to.
    pub operator_id: NodeOperatorId,
    /// Where the operator's rewards go.
    pub recipient: Address,
    /// Deposited minus exited keys: the weight of the share.
    pub active_validators: u64,
    /// Whether the operator was penalized when the share was computed.
    pub penalized: bool,
}

/// An amount handed to a recipient by the distributor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    /// The operator the payout belongs to.
    pub operator_id: NodeOperatorId,
    /// The account that received the payout.
    pub recipient: Address,
    /// The amount paid, in the reward token's smallest unit.
    pub amount: u128,
}

/// Errors raised by a [`RewardsDistributor`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributionError {
    /// The distributor refused the payouts.
    #[error("distributor rejected the payouts: {0}")]
    Rejected(String),

    /// Computing a payout overflowed.
    #[error("payout computation overflowed")]
    Overflow,
}

/// The opaque "distribute rewards to these shares" capability of the reward token.
///
/// The exact share formula belongs to the implementation. The registry only decides who takes
/// part.
pub trait RewardsDistributor {
    /// Distributes the available rewards across `shares` and reports what was paid.
    fn distribute(&mut self, shares: &[RewardShare]) -> Result<Vec<Payout>, DistributionError>;
}

impl<D: RewardsDistributor + ?Sized> RewardsDistributor for &mut D {
    fn distribute(&mut self, shares: &[RewardShare]) -> Result<Vec<Payout>, DistributionError> {
        (**self).distribute(shares)
    }
}

impl<D: RewardsDistributor + ?Sized> RewardsDistributor for Box<D> {
    fn distribute(&mut self, shares: &[RewardShare]) -> Result<Vec<Payout>, DistributionError> {
        (**self).distribute(shares)
    }
}

/// Splits a token balance across shares in proportion to their active validators.
///
/// Amounts are rounded down; the remainder stays in the balance for the next round. Penalized
/// shares receive nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProportionalDistributor {
    balance: u128,
    paid: Vec<Payout>,
}

impl ProportionalDistributor {
    /// Creates a distributor holding `balance`.
    pub const fn new(balance: u128) -> Self {
        Self {
            balance,
            paid: Vec::new(),
        }
    }

    /// Returns the undistributed balance.
    pub const fn balance(&self) -> u128 {
        self.balance
    }

    /// Adds freshly minted rewards to the balance.
    pub fn top_up(&mut self, amount: u128) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Returns every payout made so far.
    pub fn paid(&self) -> &[Payout] {
        &self.paid
    }
}

impl RewardsDistributor for ProportionalDistributor {
    fn distribute(&mut self, shares: &[RewardShare]) -> Result<Vec<Payout>, DistributionError> {
        let eligible: Vec<&RewardShare> = shares
            .iter()
            .filter(|share| !share.penalized && share.active_validators > 0)
            .collect();

        let total_weight: u128 = eligible
            .iter()
            .map(|share| u128::from(share.active_validators))
            .sum();

        if total_weight == 0 || self.balance == 0 {
            return Ok(Vec::new());
        }

        let mut payouts = Vec::with_capacity(eligible.len());
        let mut distributed = 0u128;
        for share in eligible {
            let amount = self
                .balance
                .checked_mul(u128::from(share.active_validators))
                .ok_or(DistributionError::Overflow)?
                / total_weight;

            if amount == 0 {
                continue;
            }

            distributed += amount;
            payouts.push(Payout {
                operator_id: share.operator_id,
                recipient: share.recipient,
                amount,
            });
        }

        self.balance -= distributed;
        self.paid.extend(payouts.iter().copied());

        Ok(payouts)
    }
}
