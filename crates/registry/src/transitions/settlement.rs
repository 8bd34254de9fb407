use nor_primitives::address::Address;
use tracing::{debug, info};

use crate::{
    auth::{Authorizer, Capability},
    clock::Clock,
    errors::RegistryResult,
    events::RegistryEvent,
    machine::{NodeOperatorsRegistry, RegistryOutput},
    rewards::RewardsDistributor,
};

impl<A, C, D> NodeOperatorsRegistry<A, C, D>
where
    A: Authorizer,
    C: Clock,
    D: RewardsDistributor,
{
    /// Acknowledges that the staking router minted rewards for this module.
    ///
    /// Rewards are only handed out once validator counts are settled, so this records nothing.
    pub fn on_rewards_minted(
        &mut self,
        caller: &Address,
        total_shares: u64,
    ) -> RegistryResult<RegistryOutput> {
        self.ensure_capability(caller, Capability::StakingRouter)?;

        debug!(%total_shares, "rewards minted");

        Ok(RegistryOutput::new())
    }

    /// Distributes rewards to every operator that has active validators and is not penalized.
    ///
    /// Penalized operators are reported with [`RegistryEvent::NodeOperatorPenalized`] and left out
    /// of the shares handed to the distributor. If the distributor fails, the call is rejected and
    /// nothing is emitted.
    pub fn on_validator_counts_settled(
        &mut self,
        caller: &Address,
    ) -> RegistryResult<RegistryOutput> {
        self.ensure_capability(caller, Capability::StakingRouter)?;

        let (penalized, eligible): (Vec<_>, Vec<_>) = self
            .reward_shares()
            .into_iter()
            .partition(|share| share.penalized);

        let payouts = self.distributor.distribute(&eligible)?;

        let mut output = RegistryOutput::new();
        for share in penalized {
            info!(id = share.operator_id, recipient = %share.recipient, "skipped penalized node operator");
            output.push(RegistryEvent::NodeOperatorPenalized {
                id: share.operator_id,
                recipient: share.recipient,
                active_validators: share.active_validators,
            });
        }

        for payout in payouts {
            info!(id = payout.operator_id, recipient = %payout.recipient, amount = %payout.amount, "distributed rewards");
            output.push(RegistryEvent::RewardsDistributed {
                recipient: payout.recipient,
                amount: payout.amount,
            });
        }

        Ok(output)
    }
}
