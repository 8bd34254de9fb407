use std::{fs, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use nor_primitives::address::Address;
use nor_registry::{calls::RegistryCall, state_machine::StateMachine};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{cli::ApplyArgs, config::CliConfig, handlers::print_json, snapshot::Snapshot};

/// A toml script of registry calls.
///
/// ```toml
/// [[calls]]
/// caller = "0x..."
/// op = "add_node_operator"
/// name = "alpha"
/// reward_address = "0x..."
/// ```
#[derive(Debug, Clone, Deserialize)]
struct Script {
    calls: Vec<ScriptStep>,
}

#[derive(Debug, Clone, Deserialize)]
struct ScriptStep {
    caller: Address,

    #[serde(flatten)]
    call: RegistryCall,
}

impl Script {
    fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| anyhow!(format!("Failed to parse script: {}", e)))
    }
}

pub(crate) fn handle_apply(args: ApplyArgs) -> Result<()> {
    let ApplyArgs {
        registry,
        script,
        keep_going,
        dry_run,
    } = args;

    let config = CliConfig::from_path(&registry.config)?;
    let script = Script::from_path(&script)?;
    let mut nor = Snapshot::load(&registry.state)?.open(&config);

    let mut rejected = 0usize;
    for (idx, ScriptStep { caller, call }) in script.calls.into_iter().enumerate() {
        let description = call.to_string();
        match nor.process_call(&caller, call) {
            Ok(output) => {
                info!(%idx, call = %description, events = output.len(), "call accepted");
                for event in &output.notifications {
                    print_json(event)?;
                }
            }
            Err(err) if keep_going => {
                warn!(%idx, call = %description, %err, "skipping rejected call");
                rejected += 1;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("call #{idx} ({description}) rejected"));
            }
        }
    }

    if dry_run {
        info!(%rejected, "dry run, snapshot left untouched");
    } else {
        Snapshot::from_registry(nor).save(&registry.state)?;
        info!(%rejected, state = %registry.state.display(), "wrote registry snapshot");
    }

    if rejected > 0 {
        bail!("{rejected} calls were rejected");
    }

    Ok(())
}
