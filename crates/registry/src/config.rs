//! Registry-wide configuration.

use nor_params::prelude::{ModuleType, RegistryParams, DEFAULT_STUCK_PENALTY_DELAY};
use nor_primitives::address::Address;
use serde::{Deserialize, Serialize};

/// Configuration a registry is initialized with.
///
/// Except for the stuck penalty delay, which the registry copies into its state and lets the
/// operator manager tune later, these values are static over the lifetime of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryCfg {
    /// The staking module type identifier.
    pub module_type: ModuleType,
    /// The service directory the registry resolves its collaborators from.
    pub locator: Address,
    /// The protocol's own token account, which can never receive operator rewards.
    pub treasury: Address,
    /// Initial stuck penalty delay, in seconds.
    #[serde(default = "default_stuck_penalty_delay")]
    pub stuck_penalty_delay: u64,
    /// Limits enforced by the registry.
    #[serde(default)]
    pub params: RegistryParams,
}

const fn default_stuck_penalty_delay() -> u64 {
    DEFAULT_STUCK_PENALTY_DELAY
}

impl RegistryCfg {
    /// Returns the staking module type.
    pub const fn module_type(&self) -> ModuleType {
        self.module_type
    }

    /// Returns the locator address.
    pub const fn locator(&self) -> Address {
        self.locator
    }

    /// Returns the treasury address.
    pub const fn treasury(&self) -> Address {
        self.treasury
    }

    /// Returns the registry limits.
    pub const fn params(&self) -> &RegistryParams {
        &self.params
    }
}
