//! The on-disk representation of a registry.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use nor_registry::{
    auth::AccessControlList, clock::SystemClock, machine::NodeOperatorsRegistry,
    rewards::ProportionalDistributor, state::RegistryState,
};
use serde::{Deserialize, Serialize};

use crate::config::CliConfig;

/// The registry type the CLI operates on.
pub(crate) type CliRegistry =
    NodeOperatorsRegistry<AccessControlList, SystemClock, ProportionalDistributor>;

/// The registry state together with the undistributed rewards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Snapshot {
    pub(crate) state: RegistryState,
    pub(crate) distributor: ProportionalDistributor,
}

impl Snapshot {
    pub(crate) fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse snapshot {}", path.display()))
    }

    pub(crate) fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;

        fs::write(path, contents)
            .with_context(|| format!("failed to write snapshot {}", path.display()))
    }

    /// Rebuilds the registry this snapshot was taken from.
    pub(crate) fn open(self, config: &CliConfig) -> CliRegistry {
        NodeOperatorsRegistry::restore(
            config.registry.clone(),
            self.state,
            config.access.clone(),
            SystemClock,
            self.distributor,
        )
    }

    pub(crate) fn from_registry(registry: CliRegistry) -> Self {
        let (state, distributor) = registry.into_parts();

        Self { state, distributor }
    }
}
