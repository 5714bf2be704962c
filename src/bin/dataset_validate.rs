//! Validate a keycode dataset against the table schema and load-time rules.
//!
//! Usage:
//!   dataset-validate --file data/keycodes.json
//!   dataset-validate --schema schema/keycode_table.schema.json < payload.json

use anyhow::{Context, Result};
use clap::Parser;
use keycodes::{KeyTable, TableSchema, logging};
use serde_json::Value;
use std::fs::File;
use std::io::{Read, stdin};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "dataset-validate")]
#[command(about = "Validate a keycode dataset")]
struct Cli {
    /// Optional input file; reads stdin when omitted.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Optional schema file; the bundled schema is used when omitted.
    #[arg(long)]
    schema: Option<PathBuf>,
}

fn read_input(file: Option<&Path>) -> Result<(String, String)> {
    let mut buf = String::new();
    let origin = if let Some(path) = file {
        File::open(path)
            .with_context(|| format!("opening input file {}", path.display()))?
            .read_to_string(&mut buf)
            .with_context(|| format!("reading input file {}", path.display()))?;
        path.display().to_string()
    } else {
        stdin()
            .read_to_string(&mut buf)
            .context("reading stdin for input JSON")?;
        "stdin".to_string()
    };
    Ok((buf, origin))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(false);
    let (raw, origin) = read_input(cli.file.as_deref())?;

    if let Some(schema_path) = &cli.schema {
        let value: Value = serde_json::from_str(&raw).context("parsing input JSON")?;
        TableSchema::load(schema_path)?.validate(&value, &origin)?;
    }
    let table = KeyTable::from_json_str(&raw, &origin)?;
    eprintln!("{origin}: {} keys ok", table.len());
    Ok(())
}
