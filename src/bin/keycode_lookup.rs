//! Resolve lookup tokens and print the page model for each.
//!
//! Usage:
//!   keycode-lookup Enter 13 KeyA
//!   keycode-lookup --live-event event.json a
//!   echo '{"key":"q","code":"KeyQ","keyCode":81}' | keycode-lookup --live-event - a

use anyhow::{Context, Result};
use clap::Parser;
use keycodes::{KeyEventRecord, KeyPage, load_table, logging, parse_event_stream, resolve_match};
use std::fs;
use std::io::{Read, Write, stdin, stdout};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "keycode-lookup")]
#[command(about = "Resolve keys, codes, keyCodes or description slugs to key records")]
struct Cli {
    /// Tokens to resolve.
    #[arg(required = true)]
    tokens: Vec<String>,
    /// Dataset file; defaults to KEYCODES_DATA, then the bundled dataset.
    #[arg(long)]
    data: Option<PathBuf>,
    /// Live key event(s) as JSON; `-` reads stdin. The last event is used.
    #[arg(long)]
    live_event: Option<PathBuf>,
    /// Log which resolution rule matched each token.
    #[arg(long)]
    explain: bool,
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
    logging::init(cli.verbose || cli.explain);
    let table = load_table(cli.data.as_deref())?;
    let live = match &cli.live_event {
        Some(source) => read_live_event(source)?,
        None => None,
    };

    let mut out = stdout().lock();
    for token in &cli.tokens {
        let (record, rule) = match resolve_match(token, &table) {
            Some((record, rule)) => (record.clone(), Some(rule)),
            None => (KeyEventRecord::default(), None),
        };
        if cli.explain {
            match rule {
                Some(rule) => info!(token = %token, rule = %rule, "matched"),
                None => info!(token = %token, "no match"),
            }
        }
        let page = KeyPage::build(token, &table, &record, live.as_ref())?;
        serde_json::to_writer(&mut out, &page)
            .with_context(|| format!("writing page for token {token:?}"))?;
        writeln!(out)?;
    }
    Ok(())
}

fn read_live_event(source: &Path) -> Result<Option<KeyEventRecord>> {
    let raw = if source.as_os_str() == "-" {
        let mut buf = String::new();
        stdin()
            .read_to_string(&mut buf)
            .context("reading live event from stdin")?;
        buf
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("reading live event {}", source.display()))?
    };
    let events = parse_event_stream(&raw)?;
    Ok(events.into_iter().last())
}
