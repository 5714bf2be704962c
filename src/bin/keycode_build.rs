//! Build the static site manifest: one page per lookup token.
//!
//! Usage:
//!   keycode-build --out site/pages.json

use anyhow::{Context, Result};
use clap::Parser;
use keycodes::{build_site, load_table, logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "keycode-build")]
#[command(about = "Pre-generate a page for every lookup token")]
struct Cli {
    /// Manifest output path.
    #[arg(long)]
    out: PathBuf,
    /// Dataset file; defaults to KEYCODES_DATA, then the bundled dataset.
    #[arg(long)]
    data: Option<PathBuf>,
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let table = load_table(cli.data.as_deref())?;
    let manifest = build_site(&table).context("building site manifest")?;
    manifest.write(&cli.out)?;
    eprintln!(
        "wrote {} pages to {}",
        manifest.pages.len(),
        cli.out.display()
    );
    Ok(())
}
