use anyhow::Result;
use serde::Serialize;

use crate::{cli::SummaryArgs, config::CliConfig, handlers::print_json, snapshot::Snapshot};

#[derive(Debug, Serialize)]
struct OperatorLine<'a> {
    id: u64,
    name: &'a str,
    active: bool,
    #[serde(flatten)]
    summary: nor_registry::summary::NodeOperatorSummary,
}

pub(crate) fn handle_summary(args: SummaryArgs) -> Result<()> {
    let SummaryArgs { registry, operator } = args;

    let config = CliConfig::from_path(&registry.config)?;
    let nor = Snapshot::load(&registry.state)?.open(&config);

    let ids = match operator {
        Some(id) => vec![id],
        None => {
            print_json(&nor.staking_module_summary())?;
            nor.node_operator_ids(0, nor.node_operators_count())
        }
    };

    for id in ids {
        let summary = nor.node_operator_summary(id)?;
        let operator = nor.state().operator(id)?;
        print_json(&OperatorLine {
            id,
            name: operator.name(),
            active: operator.active(),
            summary,
        })?;
    }

    Ok(())
}
