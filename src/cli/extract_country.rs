use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::pipeline::Pipeline;
use crate::pipeline::steps::FilterStep;
use crate::table::export::export_to_writer;
use crate::table::filter::Predicate;
use crate::table::loader::load_table;

const USAGE: &str = "cscc-extract extract-country USA cscc_v1.csv";

#[derive(Args, Debug)]
pub struct ExtractCountryArgs {
    /// ISO3 country code, e.g. USA
    pub(crate) iso3: String,

    /// Input CSV with one row per country and scenario
    pub(crate) csv: PathBuf,

    /// Pure rate of time preference, as written in the dataset
    #[arg(long, default_value = "2")]
    pub(crate) prtp: String,

    /// Elasticity of marginal utility, as written in the dataset
    #[arg(long, default_value = "1p5")]
    pub(crate) eta: String,

    /// Column holding the ISO3 country code
    #[arg(long, default_value = "ISO3")]
    pub(crate) country_column: String,
}

pub fn handle(args: ExtractCountryArgs) -> anyhow::Result<()> {
    let stdout = io::stdout();
    run(&args, stdout.lock())
}

pub(crate) fn run<W: Write>(args: &ExtractCountryArgs, out: W) -> anyhow::Result<()> {
    super::require_csv_path(&args.csv, USAGE)?;
    let table = load_table(&args.csv)?;

    let predicate = Predicate::new()
        .with(args.country_column.as_str(), args.iso3.as_str())
        .with("prtp", args.prtp.as_str())
        .with("eta", args.eta.as_str());
    info!(terms = ?predicate.terms(), "extracting country rows");
    let extracted = Pipeline::new().then(FilterStep { predicate }).run(table)?;

    export_to_writer(&extracted, out)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/extract_country.rs"]
mod tests;
