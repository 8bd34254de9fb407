//! The Node Operators Registry.
//!
//! Ties the persisted [`RegistryState`] together with its static configuration and the external
//! collaborators the registry consults: the permission framework, the clock and the reward
//! distributor.

use nor_primitives::address::Address;
use tracing::{info, warn};

use crate::{
    auth::{Authorizer, Capability},
    calls::RegistryCall,
    clock::Clock,
    config::RegistryCfg,
    errors::{AddressViolation, RegistryError, RegistryResult},
    events::RegistryEvent,
    rewards::RewardsDistributor,
    state::RegistryState,
    state_machine::{SMOutput, StateMachine},
};

/// The output of the registry after processing a call.
///
/// This is a type alias for [`SMOutput`] specialized to [`RegistryEvent`] notifications.
pub type RegistryOutput = SMOutput<RegistryEvent>;

/// A registry of node operators.
///
/// `A` answers capability checks, `C` supplies the current time and `D` receives the reward shares
/// when validator counts are settled.
#[derive(Debug, Clone)]
pub struct NodeOperatorsRegistry<A, C, D> {
    pub(crate) cfg: RegistryCfg,
    pub(crate) state: RegistryState,
    pub(crate) authorizer: A,
    pub(crate) clock: C,
    pub(crate) distributor: D,
}

impl<A, C, D> NodeOperatorsRegistry<A, C, D>
where
    A: Authorizer,
    C: Clock,
    D: RewardsDistributor,
{
    /// Creates an empty registry from `cfg`.
    ///
    /// Returns the registry together with the initialization notifications: the version, the
    /// locator, the module type and the stuck penalty delay, in that order.
    pub fn initialize(
        cfg: RegistryCfg,
        authorizer: A,
        clock: C,
        distributor: D,
    ) -> RegistryResult<(Self, RegistryOutput)> {
        if !cfg.params().is_within_protocol_limits() {
            return Err(RegistryError::ParamsAboveProtocolLimits {
                params: *cfg.params(),
            });
        }

        let max = cfg.params().max_stuck_penalty_delay;
        if cfg.stuck_penalty_delay > max {
            return Err(RegistryError::PenaltyDelayOutOfRange {
                delay: cfg.stuck_penalty_delay,
                max,
            });
        }

        if cfg.locator().is_zero() {
            return Err(RegistryError::InvalidAddress {
                address: cfg.locator(),
                violation: AddressViolation::Zero,
            });
        }

        let state = RegistryState::new(cfg.module_type(), cfg.locator(), cfg.stuck_penalty_delay);
        let output = SMOutput::with_notifications(vec![
            RegistryEvent::ContractVersionSet {
                version: state.contract_version(),
            },
            RegistryEvent::LocatorContractSet {
                locator: state.locator(),
            },
            RegistryEvent::StakingModuleTypeSet {
                module_type: state.module_type(),
            },
            RegistryEvent::StuckPenaltyDelayChanged {
                delay: state.stuck_penalty_delay(),
            },
        ]);

        info!(
            module_type = %state.module_type(),
            locator = %state.locator(),
            stuck_penalty_delay = state.stuck_penalty_delay(),
            "initialized node operators registry"
        );

        Ok((
            Self::restore(cfg, state, authorizer, clock, distributor),
            output,
        ))
    }
}

impl<A, C, D> NodeOperatorsRegistry<A, C, D> {
    /// Rebuilds a registry from a previously persisted state. Emits nothing.
    pub const fn restore(
        cfg: RegistryCfg,
        state: RegistryState,
        authorizer: A,
        clock: C,
        distributor: D,
    ) -> Self {
        Self {
            cfg,
            state,
            authorizer,
            clock,
            distributor,
        }
    }

    /// Returns the static configuration.
    pub const fn cfg(&self) -> &RegistryCfg {
        &self.cfg
    }

    /// Returns the current state.
    pub const fn state(&self) -> &RegistryState {
        &self.state
    }

    /// Returns the reward distributor.
    pub const fn distributor(&self) -> &D {
        &self.distributor
    }

    /// Consumes the registry and returns its state, e.g. to persist it.
    pub fn into_state(self) -> RegistryState {
        self.state
    }

    /// Consumes the registry and returns its state along with the distributor.
    pub fn into_parts(self) -> (RegistryState, D) {
        (self.state, self.distributor)
    }
}

impl<A: Authorizer, C, D> NodeOperatorsRegistry<A, C, D> {
    /// Returns `Ok(())` if `caller` holds `capability`.
    pub fn ensure_capability(&self, caller: &Address, capability: Capability) -> RegistryResult<()> {
        if self.authorizer.has_capability(caller, capability) {
            Ok(())
        } else {
            Err(RegistryError::Unauthorized {
                caller: *caller,
                capability,
            })
        }
    }
}

impl<A, C, D> StateMachine for NodeOperatorsRegistry<A, C, D>
where
    A: Authorizer,
    C: Clock,
    D: RewardsDistributor,
{
    type Caller = Address;
    type Call = RegistryCall;
    type Notification = RegistryEvent;
    type Error = RegistryError;

    fn process_call(
        &mut self,
        caller: &Self::Caller,
        call: Self::Call,
    ) -> Result<RegistryOutput, Self::Error> {
        let call_description = call.to_string();
        let result = match call {
            RegistryCall::AddNodeOperator {
                name,
                reward_address,
            } => self
                .add_node_operator(caller, name, reward_address)
                .map(|(_, output)| output),
            RegistryCall::ActivateNodeOperator { id } => self.activate_node_operator(caller, id),
            RegistryCall::DeactivateNodeOperator { id } => {
                self.deactivate_node_operator(caller, id)
            }
            RegistryCall::SetNodeOperatorName { id, name } => {
                self.set_node_operator_name(caller, id, name)
            }
            RegistryCall::SetNodeOperatorRewardAddress { id, reward_address } => {
                self.set_node_operator_reward_address(caller, id, reward_address)
            }
            RegistryCall::SetNodeOperatorStakingLimit { id, vetted } => {
                self.set_node_operator_staking_limit(caller, id, vetted)
            }
            RegistryCall::UpdateStuckValidatorsCount { ids, counts } => {
                self.update_stuck_validators_count(caller, &ids, &counts)
            }
            RegistryCall::UpdateExitedValidatorsCount { ids, counts } => {
                self.update_exited_validators_count(caller, &ids, &counts)
            }
            RegistryCall::UpdateRefundedValidatorsCount { id, count } => {
                self.update_refunded_validators_count(caller, id, count)
            }
            RegistryCall::ClearNodeOperatorPenalty { id } => {
                self.clear_node_operator_penalty(caller, id)
            }
            RegistryCall::SetStuckPenaltyDelay { delay } => {
                self.set_stuck_penalty_delay(caller, delay)
            }
            RegistryCall::OnRewardsMinted { total_shares } => {
                self.on_rewards_minted(caller, total_shares)
            }
            RegistryCall::OnValidatorCountsSettled => self.on_validator_counts_settled(caller),
        };

        result.inspect_err(|reason| {
            warn!(%caller, call = %call_description, %reason, "call rejected by registry");
        })
    }
}
