use std::collections::BTreeMap;

use nor_primitives::{address::Address, types::NodeOperatorId};
use tracing::{debug, info};

use crate::{
    auth::{Authorizer, Capability},
    clock::Clock,
    errors::{RegistryError, RegistryResult, TransitionViolation},
    events::RegistryEvent,
    machine::{NodeOperatorsRegistry, RegistryOutput},
    operator::NodeOperator,
};

impl<A: Authorizer, C: Clock, D> NodeOperatorsRegistry<A, C, D> {
    /// Reports the stuck validators counts of a batch of operators.
    ///
    /// When an operator's stuck count drops from nonzero to zero, its penalty window is armed to
    /// end `stuck_penalty_delay` seconds from now. The nonce is bumped once per call, even if no
    /// operator changed.
    pub fn update_stuck_validators_count(
        &mut self,
        caller: &Address,
        ids: &[NodeOperatorId],
        counts: &[u64],
    ) -> RegistryResult<RegistryOutput> {
        self.ensure_capability(caller, Capability::StakingRouter)?;
        check_batch(ids, counts)?;
        for id in ids {
            self.state.check_id(*id)?;
        }

        let now = self.clock.now();
        let delay = self.state.stuck_penalty_delay;
        let mut output = RegistryOutput::new();

        for (&id, &stuck) in ids.iter().zip(counts) {
            let operator = self.state.operator_mut(id)?;
            if operator.stuck_count == stuck {
                debug!(%id, %stuck, "stuck validators count unchanged");
                continue;
            }

            if operator.stuck_count > 0 && stuck == 0 {
                operator.stuck_penalty_end_at = now.saturating_add(delay);
            }
            operator.stuck_count = stuck;

            info!(
                %id,
                %stuck,
                stuck_penalty_end_at = operator.stuck_penalty_end_at,
                "changed stuck validators count"
            );
            output.push(penalty_state_changed(id, operator));
        }

        self.state.bump_nonce(&mut output);

        Ok(output)
    }

    /// Reports the exited validators counts of a batch of operators.
    ///
    /// Exited counts never decrease. The whole batch is checked against the counts it would leave
    /// behind, so an id that appears twice must not go down between its two entries either. The
    /// nonce is bumped once per call, even if no operator changed.
    pub fn update_exited_validators_count(
        &mut self,
        caller: &Address,
        ids: &[NodeOperatorId],
        counts: &[u64],
    ) -> RegistryResult<RegistryOutput> {
        self.ensure_capability(caller, Capability::StakingRouter)?;
        check_batch(ids, counts)?;

        let mut staged: BTreeMap<NodeOperatorId, u64> = BTreeMap::new();
        for (&id, &requested) in ids.iter().zip(counts) {
            let current = match staged.get(&id) {
                Some(staged) => *staged,
                None => self.state.operator(id)?.total_exited,
            };
            if requested < current {
                return Err(RegistryError::ExitedCountDecreased {
                    id,
                    current,
                    requested,
                });
            }
            staged.insert(id, requested);
        }

        let mut output = RegistryOutput::new();
        for (&id, &exited) in ids.iter().zip(counts) {
            let operator = self.state.operator_mut(id)?;
            if operator.total_exited == exited {
                debug!(%id, %exited, "exited validators count unchanged");
                continue;
            }
            operator.total_exited = exited;

            info!(%id, %exited, "changed exited validators count");
            output.push(RegistryEvent::ExitedSigningKeysCountChanged { id, exited });
        }

        self.state.bump_nonce(&mut output);

        Ok(output)
    }

    /// Reports the refunded validators count of an operator. Never changes the nonce.
    pub fn update_refunded_validators_count(
        &mut self,
        caller: &Address,
        id: NodeOperatorId,
        refunded: u64,
    ) -> RegistryResult<RegistryOutput> {
        self.state.check_id(id)?;
        self.ensure_capability(caller, Capability::StakingRouter)?;

        let operator = self.state.operator_mut(id)?;
        if operator.refunded_count == refunded {
            debug!(%id, %refunded, "refunded validators count unchanged");
            return Ok(RegistryOutput::new());
        }
        operator.refunded_count = refunded;

        info!(%id, %refunded, "changed refunded validators count");

        let mut output = RegistryOutput::new();
        output.push(penalty_state_changed(id, operator));

        Ok(output)
    }

    /// Clears the elapsed penalty window of an operator that no longer has stuck validators.
    ///
    /// Resets the window and the refunded count. Does not change the nonce.
    pub fn clear_node_operator_penalty(
        &mut self,
        caller: &Address,
        id: NodeOperatorId,
    ) -> RegistryResult<RegistryOutput> {
        self.state.check_id(id)?;
        self.ensure_capability(caller, Capability::ManageNodeOperator)?;

        let now = self.clock.now();
        let operator = self.state.operator_mut(id)?;
        if operator.stuck_count > 0 {
            return Err(RegistryError::InvalidStateTransition {
                id,
                violation: TransitionViolation::StillStuck,
            });
        }
        if operator.stuck_penalty_end_at == 0 {
            return Err(RegistryError::InvalidStateTransition {
                id,
                violation: TransitionViolation::NoPenaltyWindow,
            });
        }
        if now < operator.stuck_penalty_end_at {
            return Err(RegistryError::PenaltyWindowNotElapsed {
                id,
                ends_at: operator.stuck_penalty_end_at,
                now,
            });
        }

        operator.stuck_penalty_end_at = 0;
        operator.refunded_count = 0;

        info!(%id, %now, "cleared node operator penalty");

        let mut output = RegistryOutput::new();
        output.push(penalty_state_changed(id, operator));
        output.push(RegistryEvent::NodeOperatorPenaltyCleared { id });

        Ok(output)
    }
}

impl<A: Authorizer, C, D> NodeOperatorsRegistry<A, C, D> {
    /// Sets how long an operator stays penalized after its stuck count drops to zero.
    ///
    /// Windows that are already armed keep their end timestamp.
    pub fn set_stuck_penalty_delay(
        &mut self,
        caller: &Address,
        delay: u64,
    ) -> RegistryResult<RegistryOutput> {
        self.ensure_capability(caller, Capability::ManageNodeOperator)?;

        let max = self.cfg.params().max_stuck_penalty_delay;
        if delay > max {
            return Err(RegistryError::PenaltyDelayOutOfRange { delay, max });
        }
        self.state.stuck_penalty_delay = delay;

        info!(%delay, "changed stuck penalty delay");

        let mut output = RegistryOutput::new();
        output.push(RegistryEvent::StuckPenaltyDelayChanged { delay });

        Ok(output)
    }
}

fn check_batch(ids: &[NodeOperatorId], counts: &[u64]) -> RegistryResult<()> {
    if ids.len() != counts.len() {
        return Err(RegistryError::BatchLengthMismatch {
            ids: ids.len(),
            counts: counts.len(),
        });
    }

    Ok(())
}

const fn penalty_state_changed(id: NodeOperatorId, operator: &NodeOperator) -> RegistryEvent {
    RegistryEvent::StuckPenaltyStateChanged {
        id,
        stuck: operator.stuck_count,
        refunded: operator.refunded_count,
        stuck_penalty_end_at: operator.stuck_penalty_end_at,
    }
}
