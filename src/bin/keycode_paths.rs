//! Print every token that gets a pre-generated page.
//!
//! Usage:
//!   keycode-paths
//!   keycode-paths --json --data data/keycodes.json

use anyhow::Result;
use clap::Parser;
use keycodes::{load_table, logging, static_paths};
use std::io::{Write, stdout};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "keycode-paths")]
#[command(about = "List every lookup token of the keycode dataset")]
struct Cli {
    /// Dataset file; defaults to KEYCODES_DATA, then the bundled dataset.
    #[arg(long)]
    data: Option<PathBuf>,
    /// Emit a single JSON array instead of one token per line.
    #[arg(long)]
    json: bool,
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
    let paths = static_paths(&table);

    let mut out = stdout().lock();
    if cli.json {
        serde_json::to_writer(&mut out, &paths)?;
        writeln!(out)?;
    } else {
        for path in &paths {
            writeln!(out, "{path}")?;
        }
    }
    Ok(())
}
