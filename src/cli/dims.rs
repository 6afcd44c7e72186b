use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::dims::loader::resolve_dimension_set;

#[derive(Args, Debug)]
pub struct DimsArgs {
    #[command(subcommand)]
    command: DimsCommand,
}

#[derive(Subcommand, Debug)]
enum DimsCommand {
    List(DimsListArgs),
    Dump(DimsDumpArgs),
}

#[derive(Args, Debug)]
pub struct DimsListArgs {
    /// Optional dimension set TOML
    #[arg(long)]
    dims: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DimsDumpArgs {
    /// Output directory
    #[arg(long)]
    out: PathBuf,

    /// Optional dimension set TOML
    #[arg(long)]
    dims: Option<PathBuf>,
}

pub fn handle(args: DimsArgs) -> anyhow::Result<()> {
    match args.command {
        DimsCommand::List(args) => list_dims(args),
        DimsCommand::Dump(args) => dump_dims(args),
    }
}

fn list_dims(args: DimsListArgs) -> anyhow::Result<()> {
    let stdout = io::stdout();
    write_dims_list(args.dims.as_deref(), stdout.lock())
}

pub(crate) fn write_dims_list<W: Write>(dims: Option<&Path>, mut out: W) -> anyhow::Result<()> {
    let set = resolve_dimension_set(dims)?;
    writeln!(out, "key\tcolumn\tn_values\tvalues")?;
    for dim in &set.dimensions {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            dim.key,
            dim.column,
            dim.values.len(),
            dim.values.join(",")
        )?;
    }
    out.flush()?;
    Ok(())
}

fn dump_dims(args: DimsDumpArgs) -> anyhow::Result<()> {
    let set = resolve_dimension_set(args.dims.as_deref())?;
    std::fs::create_dir_all(&args.out)?;
    let json = serde_json::to_string_pretty(&set)?;
    let path = args.out.join("dimensions.json");
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/dims.rs"]
mod tests;
