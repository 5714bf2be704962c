#![allow(dead_code)]

use anyhow::{Context, Result};
use keycodes::KeyTable;
use serde_json::{Value, json};
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

pub fn bundled_table() -> KeyTable {
    KeyTable::bundled().expect("bundled dataset should load")
}

/// Write `keys` into a temporary dataset file and load it.
///
/// The returned file must outlive any use of its path.
pub fn fixture_table(keys: Value) -> Result<(KeyTable, NamedTempFile)> {
    let file = fixture_file(json!({
        "schema_version": "keycode_table_v1",
        "keys": keys,
    }))?;
    let table = KeyTable::load(file.path())
        .with_context(|| "failed to load fixture keycode table".to_string())?;
    Ok((table, file))
}

pub fn fixture_file(document: Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, &document)?;
    file.flush()?;
    Ok(file)
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to spawn {:?}", cmd.get_program()))?;
    if !output.status.success() {
        anyhow::bail!(
            "command {:?} failed with {}: {}",
            cmd.get_program(),
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}
