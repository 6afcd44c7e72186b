use std::path::Path;

use clap::{Parser, Subcommand};

mod clean_emissions;
mod dims;
mod extract_all;
mod extract_country;

#[derive(Parser, Debug)]
#[command(
    name = "cscc-extract",
    version,
    about = "Filter social cost of carbon and emissions CSV datasets"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one CSV per scenario combination and per country
    ExtractAll(extract_all::ExtractAllArgs),
    /// Print one country's rows for fixed discount parameters
    ExtractCountry(extract_country::ExtractCountryArgs),
    /// Print each country's emissions for the latest complete year
    CleanEmissions(clean_emissions::CleanEmissionsArgs),
    /// Inspect scenario dimension sets
    Dims(dims::DimsArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::ExtractAll(args) => extract_all::handle(args),
            Command::ExtractCountry(args) => extract_country::handle(args),
            Command::CleanEmissions(args) => clean_emissions::handle(args),
            Command::Dims(args) => dims::handle(args),
        }
    }
}

fn require_csv_path(path: &Path, example: &str) -> anyhow::Result<()> {
    if path.to_string_lossy().ends_with(".csv") {
        return Ok(());
    }
    anyhow::bail!(
        "expected a path ending in .csv, got {}\nusage:\n  {example}",
        path.display()
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
