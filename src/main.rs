use anyhow::Context;
use clap::Parser;
use kg_coords::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).context("kg-coords failed")?;
    Ok(())
}
