use nor_primitives::{address::Address, types::NodeOperatorId};
use tracing::{debug, info};

use crate::{
    auth::{Authorizer, Capability},
    errors::{RegistryError, RegistryResult, TransitionViolation},
    events::RegistryEvent,
    machine::{NodeOperatorsRegistry, RegistryOutput},
};

impl<A: Authorizer, C, D> NodeOperatorsRegistry<A, C, D> {
    /// Sets the number of keys of an operator that are approved for deposit.
    ///
    /// The requested count is clamped into `[total_deposited, total_added]`. If the clamped value
    /// is what the operator already has, nothing is emitted and the nonce stays put.
    pub fn set_node_operator_staking_limit(
        &mut self,
        caller: &Address,
        id: NodeOperatorId,
        vetted: u64,
    ) -> RegistryResult<RegistryOutput> {
        self.state.check_id(id)?;
        self.ensure_capability(caller, Capability::SetNodeOperatorLimit)?;

        let operator = self.state.operator_mut(id)?;
        if !operator.active {
            return Err(RegistryError::InvalidStateTransition {
                id,
                violation: TransitionViolation::Inactive,
            });
        }

        let approved = operator.clamp_vetted(vetted);
        if approved == operator.total_vetted {
            debug!(%id, requested = vetted, %approved, "vetted keys count unchanged");
            return Ok(RegistryOutput::new());
        }
        operator.total_vetted = approved;

        info!(%id, requested = vetted, %approved, "changed vetted keys count");

        let mut output = RegistryOutput::new();
        output.push(RegistryEvent::VettedSigningKeysCountChanged { id, approved });
        self.state.bump_nonce(&mut output);

        Ok(output)
    }
}
