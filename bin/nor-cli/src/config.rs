use std::{fs, path::Path};

use anyhow::anyhow;
use nor_registry::{auth::AccessControlList, config::RegistryCfg};
use serde::{Deserialize, Serialize};

/// Everything the CLI needs to open a registry, besides its state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CliConfig {
    pub(crate) registry: RegistryCfg,

    /// Capability grants, one entry per capability.
    #[serde(default)]
    pub(crate) access: AccessControlList,

    #[serde(default)]
    pub(crate) rewards: RewardsConfig,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub(crate) struct RewardsConfig {
    /// Reward tokens available to the distributor of a fresh registry.
    #[serde(default)]
    pub(crate) initial_balance: u64,
}

impl CliConfig {
    pub(crate) fn from_path(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| anyhow!(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }
}
