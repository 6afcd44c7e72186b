use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use tracing::{debug, info};

use crate::dims::combos::Combinations;
use crate::dims::defs::DimensionSet;
use crate::dims::loader::resolve_dimension_set;
use crate::report::manifest::{ExportKind, ExportManifest, write_manifest};
use crate::table::Table;
use crate::table::export::export_to_path;
use crate::table::filter::{Predicate, distinct_values, filter_rows};
use crate::table::loader::load_table;

const USAGE: &str = "cscc-extract extract-all cscc_v2.csv --dest sourcedata/filtered";

#[derive(Args, Debug)]
pub struct ExtractAllArgs {
    /// Input CSV with one row per country and scenario
    pub(crate) csv: PathBuf,

    /// Output directory
    #[arg(long, default_value = "sourcedata/filtered")]
    pub(crate) dest: PathBuf,

    /// Optional dimension set TOML (defaults to the built-in RCP x damage x SSP set)
    #[arg(long)]
    pub(crate) dims: Option<PathBuf>,

    /// Column holding the ISO3 country code
    #[arg(long, default_value = "ISO3")]
    pub(crate) country_column: String,
}

pub fn handle(args: ExtractAllArgs) -> anyhow::Result<()> {
    super::require_csv_path(&args.csv, USAGE)?;
    let dims = resolve_dimension_set(args.dims.as_deref())?;

    let start = Instant::now();
    info!(stage = "load", path = %args.csv.display(), "starting stage");
    let table = load_table(&args.csv)?;
    info!(
        stage = "load",
        elapsed_ms = start.elapsed().as_millis(),
        rows = table.n_rows(),
        "finished stage"
    );

    let manifest = extract_all(&table, &dims, &args.country_column, &args.dest, &args.csv)?;
    write_manifest(&args.dest, &manifest)?;
    info!(
        combinations = manifest.count(ExportKind::Combination),
        countries = manifest.count(ExportKind::Country),
        dest = %args.dest.display(),
        "extraction complete"
    );
    Ok(())
}

pub(crate) fn extract_all(
    table: &Table,
    dims: &DimensionSet,
    country_column: &str,
    dest: &Path,
    source: &Path,
) -> anyhow::Result<ExportManifest> {
    // Every lookup happens here, before anything touches `dest`.
    let start = Instant::now();
    info!(
        stage = "filter",
        combinations = dims.n_combinations(),
        "starting stage"
    );
    let mut outputs = Vec::with_capacity(dims.n_combinations());
    for combination in Combinations::new(dims) {
        let filtered = filter_rows(table, &combination.predicate)?;
        outputs.push((
            format!("{}.csv", combination.id),
            ExportKind::Combination,
            filtered,
        ));
    }
    let countries = distinct_values(table, country_column)?;
    for country in &countries {
        let predicate = Predicate::new().with(country_column, country.as_str());
        let filtered = filter_rows(table, &predicate)?;
        outputs.push((format!("iso3_{country}.csv"), ExportKind::Country, filtered));
    }
    info!(
        stage = "filter",
        elapsed_ms = start.elapsed().as_millis(),
        countries = countries.len(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "export", files = outputs.len(), "starting stage");
    std::fs::create_dir_all(dest)?;
    let mut manifest = ExportManifest::new(source);
    for (file, kind, filtered) in outputs {
        let path = dest.join(&file);
        if filtered.n_rows() == 0 {
            debug!(path = %path.display(), "no rows match, writing header only");
        }
        export_to_path(&filtered, &path)?;
        manifest.record(file, kind, filtered.n_rows());
    }
    info!(
        stage = "export",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    Ok(manifest)
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/extract_all.rs"]
mod tests;
