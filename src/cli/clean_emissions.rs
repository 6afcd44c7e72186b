use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::emissions::{
    AggregateRow, DEFAULT_AGGREGATE_CODE, DEFAULT_CODE_COLUMN, DEFAULT_NAME_COLUMN,
    DEFAULT_SHARE_HEADER,
};
use crate::pipeline::Pipeline;
use crate::pipeline::steps::{LatestYearStep, ShareStep};
use crate::table::export::export_to_writer;
use crate::table::loader::load_table;

const USAGE: &str = "cscc-extract clean-emissions API_EN.ATM.CO2E.KT_DS2.csv --share";

#[derive(Args, Debug)]
pub struct CleanEmissionsArgs {
    /// World Bank style CSV with one column per year
    pub(crate) csv: PathBuf,

    /// Append each country's share of the aggregate total
    #[arg(long)]
    pub(crate) share: bool,

    #[arg(long, default_value = DEFAULT_NAME_COLUMN)]
    pub(crate) name_column: String,

    #[arg(long, default_value = DEFAULT_CODE_COLUMN)]
    pub(crate) code_column: String,

    /// Code identifying the world total row
    #[arg(long, default_value = DEFAULT_AGGREGATE_CODE)]
    pub(crate) aggregate: String,

    #[arg(long, default_value = DEFAULT_SHARE_HEADER)]
    pub(crate) share_header: String,
}

pub fn handle(args: CleanEmissionsArgs) -> anyhow::Result<()> {
    let stdout = io::stdout();
    run(&args, stdout.lock())
}

pub(crate) fn build_pipeline(args: &CleanEmissionsArgs) -> Pipeline {
    let aggregate = AggregateRow::new(args.code_column.as_str(), args.aggregate.as_str());
    Pipeline::new()
        .then(LatestYearStep {
            keep: vec![args.name_column.clone(), args.code_column.clone()],
            aggregate: aggregate.clone(),
        })
        .then_if(
            args.share,
            ShareStep {
                aggregate,
                header: args.share_header.clone(),
            },
        )
}

pub(crate) fn run<W: Write>(args: &CleanEmissionsArgs, out: W) -> anyhow::Result<()> {
    super::require_csv_path(&args.csv, USAGE)?;
    let table = load_table(&args.csv)?;
    let pipeline = build_pipeline(args);
    info!(steps = ?pipeline.step_names(), "running emissions pipeline");
    let cleaned = pipeline.run(table)?;
    export_to_writer(&cleaned, out)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/clean_emissions.rs"]
mod tests;
