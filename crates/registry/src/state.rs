//! The mutable state of the Node Operators Registry.

use nor_params::prelude::{ModuleType, CONTRACT_VERSION};
use nor_primitives::{
    address::Address,
    types::{NodeOperatorId, Nonce},
};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{RegistryError, RegistryResult},
    events::RegistryEvent,
    operator::NodeOperator,
    state_machine::SMOutput,
};

/// Everything the registry persists between calls.
///
/// This is a plain serializable value; where it is stored is up to the embedder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryState {
    /// The operators, indexed by their id.
    pub(crate) operators: Vec<NodeOperator>,
    /// Number of active operators.
    pub(crate) active_count: u64,
    /// The change counter, also exposed as the keys op index.
    pub(crate) nonce: Nonce,
    /// Seconds an operator stays penalized after its stuck count drops to zero.
    pub(crate) stuck_penalty_delay: u64,
    pub(crate) module_type: ModuleType,
    pub(crate) locator: Address,
    pub(crate) contract_version: u64,
}

impl RegistryState {
    /// Creates an empty registry state.
    pub const fn new(module_type: ModuleType, locator: Address, stuck_penalty_delay: u64) -> Self {
        Self {
            operators: Vec::new(),
            active_count: 0,
            nonce: 0,
            stuck_penalty_delay,
            module_type,
            locator,
            contract_version: CONTRACT_VERSION,
        }
    }

    /// Returns the operators, indexed by id.
    pub fn operators(&self) -> &[NodeOperator] {
        &self.operators
    }

    /// Returns the number of operators ever added.
    pub fn operators_count(&self) -> u64 {
        self.operators.len() as u64
    }

    /// Returns the number of active operators.
    pub const fn active_count(&self) -> u64 {
        self.active_count
    }

    /// Returns the current nonce.
    pub const fn nonce(&self) -> Nonce {
        self.nonce
    }

    /// Returns the stuck penalty delay, in seconds.
    pub const fn stuck_penalty_delay(&self) -> u64 {
        self.stuck_penalty_delay
    }

    /// Returns the staking module type.
    pub const fn module_type(&self) -> ModuleType {
        self.module_type
    }

    /// Returns the locator address.
    pub const fn locator(&self) -> Address {
        self.locator
    }

    /// Returns the registry version.
    pub const fn contract_version(&self) -> u64 {
        self.contract_version
    }

    /// Returns `Ok(())` if `id` names an existing operator.
    pub fn check_id(&self, id: NodeOperatorId) -> RegistryResult<()> {
        self.operator(id).map(|_| ())
    }

    /// Returns the operator with the given id.
    pub fn operator(&self, id: NodeOperatorId) -> RegistryResult<&NodeOperator> {
        usize::try_from(id)
            .ok()
            .and_then(|idx| self.operators.get(idx))
            .ok_or(RegistryError::OutOfRange {
                id,
                count: self.operators_count(),
            })
    }

    pub(crate) fn operator_mut(&mut self, id: NodeOperatorId) -> RegistryResult<&mut NodeOperator> {
        let count = self.operators_count();
        usize::try_from(id)
            .ok()
            .and_then(|idx| self.operators.get_mut(idx))
            .ok_or(RegistryError::OutOfRange { id, count })
    }

    /// Increments the nonce and emits the keys op index and nonce notifications, in that order.
    pub(crate) fn bump_nonce(&mut self, output: &mut SMOutput<RegistryEvent>) {
        self.nonce += 1;
        output.push(RegistryEvent::KeysOpIndexSet { index: self.nonce });
        output.push(RegistryEvent::NonceChanged { nonce: self.nonce });
    }
}
