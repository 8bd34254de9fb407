use nor_primitives::{address::Address, types::NodeOperatorId};
use tracing::{debug, info};

use crate::{
    auth::{Authorizer, Capability},
    errors::{AddressViolation, RegistryError, RegistryResult, TransitionViolation},
    events::RegistryEvent,
    machine::{NodeOperatorsRegistry, RegistryOutput},
    operator::NodeOperator,
};

impl<A: Authorizer, C, D> NodeOperatorsRegistry<A, C, D> {
    /// Appends a new active operator with all counters at zero and returns its id.
    ///
    /// Does not change the nonce.
    pub fn add_node_operator(
        &mut self,
        caller: &Address,
        name: String,
        reward_address: Address,
    ) -> RegistryResult<(NodeOperatorId, RegistryOutput)> {
        self.check_name(&name)?;
        self.check_reward_address(reward_address)?;
        self.ensure_capability(caller, Capability::ManageNodeOperator)?;

        let max = self.cfg.params().max_operators;
        if self.state.operators_count() >= max {
            return Err(RegistryError::CapacityExceeded { max });
        }

        let id = self.state.operators_count();
        self.state
            .operators
            .push(NodeOperator::new(name.clone(), reward_address));
        self.state.active_count += 1;

        info!(%id, %name, %reward_address, "added node operator");

        let mut output = RegistryOutput::new();
        output.push(RegistryEvent::NodeOperatorAdded {
            id,
            name,
            reward_address,
            staking_limit: 0,
        });

        Ok((id, output))
    }

    /// Activates an inactive operator.
    pub fn activate_node_operator(
        &mut self,
        caller: &Address,
        id: NodeOperatorId,
    ) -> RegistryResult<RegistryOutput> {
        self.set_active(caller, id, true)
    }

    /// Deactivates an active operator.
    ///
    /// The operator keeps its vetted keys count; it just stops being depositable.
    pub fn deactivate_node_operator(
        &mut self,
        caller: &Address,
        id: NodeOperatorId,
    ) -> RegistryResult<RegistryOutput> {
        self.set_active(caller, id, false)
    }

    /// Renames an operator. Does not change the nonce.
    pub fn set_node_operator_name(
        &mut self,
        caller: &Address,
        id: NodeOperatorId,
        name: String,
    ) -> RegistryResult<RegistryOutput> {
        self.check_name(&name)?;
        self.state.check_id(id)?;
        self.ensure_capability(caller, Capability::ManageNodeOperator)?;

        let operator = self.state.operator_mut(id)?;
        if operator.name == name {
            return Err(RegistryError::NoOpValue { id, field: "name" });
        }
        operator.name.clone_from(&name);

        info!(%id, %name, "renamed node operator");

        let mut output = RegistryOutput::new();
        output.push(RegistryEvent::NodeOperatorNameSet { id, name });

        Ok(output)
    }

    /// Changes where an operator's rewards go. Does not change the nonce.
    pub fn set_node_operator_reward_address(
        &mut self,
        caller: &Address,
        id: NodeOperatorId,
        reward_address: Address,
    ) -> RegistryResult<RegistryOutput> {
        self.check_reward_address(reward_address)?;
        self.state.check_id(id)?;
        self.ensure_capability(caller, Capability::ManageNodeOperator)?;

        let operator = self.state.operator_mut(id)?;
        if operator.reward_address == reward_address {
            return Err(RegistryError::NoOpValue {
                id,
                field: "reward address",
            });
        }
        operator.reward_address = reward_address;

        info!(%id, %reward_address, "changed node operator reward address");

        let mut output = RegistryOutput::new();
        output.push(RegistryEvent::NodeOperatorRewardAddressSet { id, reward_address });

        Ok(output)
    }

    fn set_active(
        &mut self,
        caller: &Address,
        id: NodeOperatorId,
        active: bool,
    ) -> RegistryResult<RegistryOutput> {
        self.state.check_id(id)?;
        self.ensure_capability(caller, Capability::ManageNodeOperator)?;

        let operator = self.state.operator_mut(id)?;
        if operator.active == active {
            let violation = if active {
                TransitionViolation::AlreadyActive
            } else {
                TransitionViolation::AlreadyInactive
            };
            return Err(RegistryError::InvalidStateTransition { id, violation });
        }
        operator.active = active;

        if active {
            self.state.active_count += 1;
        } else {
            self.state.active_count -= 1;
        }

        info!(%id, %active, active_count = self.state.active_count, "changed node operator active state");

        let mut output = RegistryOutput::new();
        output.push(RegistryEvent::NodeOperatorActiveSet { id, active });
        self.state.bump_nonce(&mut output);

        Ok(output)
    }

    fn check_name(&self, name: &str) -> RegistryResult<()> {
        let max = self.cfg.params().max_name_length;
        if name.is_empty() || name.len() > max {
            debug!(len = name.len(), %max, "invalid node operator name");
            return Err(RegistryError::InvalidName {
                len: name.len(),
                max,
            });
        }

        Ok(())
    }

    fn check_reward_address(&self, address: Address) -> RegistryResult<()> {
        let violation = if address.is_zero() {
            AddressViolation::Zero
        } else if address == self.cfg.treasury() {
            AddressViolation::Treasury
        } else {
            return Ok(());
        };

        Err(RegistryError::InvalidAddress { address, violation })
    }
}
