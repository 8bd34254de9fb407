use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nor_primitives::types::NodeOperatorId;

#[derive(Parser)]
#[command(
    name = "nor-cli",
    about = "Node operators registry CLI backed by a JSON state snapshot",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
    Init(InitArgs),

    Apply(ApplyArgs),

    Summary(SummaryArgs),
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct RegistryArgs {
    #[arg(
        long,
        env = "NOR_CONFIG",
        help = "the path to the registry config file"
    )]
    pub(crate) config: PathBuf,

    #[arg(
        long,
        env = "NOR_STATE",
        default_value = "registry-state.json",
        help = "the path to the registry state snapshot"
    )]
    pub(crate) state: PathBuf,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Create a fresh registry snapshot", version)]
pub(crate) struct InitArgs {
    #[clap(flatten)]
    pub(crate) registry: RegistryArgs,

    #[arg(long, help = "overwrite an existing snapshot")]
    pub(crate) force: bool,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Replay a script of calls against the snapshot", version)]
pub(crate) struct ApplyArgs {
    #[clap(flatten)]
    pub(crate) registry: RegistryArgs,

    #[arg(long, help = "the path to the toml script of calls")]
    pub(crate) script: PathBuf,

    #[arg(
        long,
        help = "skip rejected calls instead of aborting the whole script"
    )]
    pub(crate) keep_going: bool,

    #[arg(long, help = "process the script without writing the snapshot")]
    pub(crate) dry_run: bool,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Print the staking module and operator summaries", version)]
pub(crate) struct SummaryArgs {
    #[clap(flatten)]
    pub(crate) registry: RegistryArgs,

    #[arg(long, help = "only print the summary of this operator")]
    pub(crate) operator: Option<NodeOperatorId>,
}
