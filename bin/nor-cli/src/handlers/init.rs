use anyhow::{bail, Result};
use nor_registry::{
    clock::SystemClock, machine::NodeOperatorsRegistry, rewards::ProportionalDistributor,
};
use tracing::info;

use crate::{cli::InitArgs, config::CliConfig, handlers::print_json, snapshot::Snapshot};

pub(crate) fn handle_init(args: InitArgs) -> Result<()> {
    let InitArgs { registry, force } = args;

    if registry.state.exists() && !force {
        bail!(
            "snapshot {} already exists, pass --force to overwrite it",
            registry.state.display()
        );
    }

    let config = CliConfig::from_path(&registry.config)?;
    let (nor, output) = NodeOperatorsRegistry::initialize(
        config.registry.clone(),
        config.access.clone(),
        SystemClock,
        ProportionalDistributor::new(u128::from(config.rewards.initial_balance)),
    )?;

    for event in &output.notifications {
        print_json(event)?;
    }

    Snapshot::from_registry(nor).save(&registry.state)?;
    info!(state = %registry.state.display(), "wrote fresh registry snapshot");

    Ok(())
}
