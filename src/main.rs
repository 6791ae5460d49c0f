//! Prints the warehouse pipeline statements for a given settings file.
//!
//! Executing them is left to whatever client talks to the cluster; this
//! binary only resolves the settings and renders the SQL in pipeline order.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use songplays_dwh::{
    InsertOrder, Phase, StatementCatalog,
    render::{Format, render},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "songplays-dwh")]
#[command(about = "Render the songplays warehouse ETL statements", long_about = None)]
struct Args {
    /// INI settings file with the [S3] and [IAM_ROLE] sections
    #[arg(short, long, default_value = "dwh.cfg")]
    config: PathBuf,

    /// Phases to render (drop, create, copy, insert). Defaults to all of them.
    #[arg(short, long)]
    phase: Vec<Phase>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Sql)]
    format: Format,

    /// Insert dimensions before songplays, for clusters enforcing foreign keys
    #[arg(long)]
    dimensions_first: bool,
}

fn main() -> anyhow::Result<()> {
    // stdout carries the rendered statements, logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("songplays_dwh=info,warn")),
        )
        .init();

    let args = Args::parse();
    let insert_order = if args.dimensions_first {
        InsertOrder::DimensionsFirst
    } else {
        InsertOrder::SourceParity
    };
    let catalog = StatementCatalog::load(&args.config)
        .with_context(|| format!("loading settings from {}", args.config.display()))?
        .with_insert_order(insert_order);

    let output = render(&catalog, &args.phase, args.format).context("serializing statements")?;
    print!("{output}");
    Ok(())
}
