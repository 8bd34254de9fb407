//! CLI for operating a node operators registry stored as a JSON snapshot.

mod cli;
mod config;
mod handlers;
mod snapshot;

use anyhow::{Error, Result};
use clap::Parser;
use nor_common::logging::{self, LoggerConfig};

use crate::handlers::{apply, init, summary};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init(LoggerConfig::from_env("nor-cli"));

    let cli = cli::Cli::parse();
    match cli.command {
        cli::Commands::Init(args) => init::handle_init(args),
        cli::Commands::Apply(args) => apply::handle_apply(args),
        cli::Commands::Summary(args) => summary::handle_summary(args),
    }
}
