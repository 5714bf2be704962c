//! Shared JSON Schema loader for keycode datasets.
//!
//! The dataset schema ships inside the crate; callers can also point at a
//! schema file on disk. Both paths compile a JSONSchema validator and report
//! every violation at once.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

/// Bundled dataset schema (`schema/keycode_table.schema.json`).
pub const BUNDLED_TABLE_SCHEMA: &str = include_str!("../schema/keycode_table.schema.json");

/// Compiled dataset schema.
pub struct TableSchema {
    compiled: JSONSchema,
}

impl TableSchema {
    /// Compile the schema compiled into the crate.
    pub fn bundled() -> Result<Self> {
        let raw: Value =
            serde_json::from_str(BUNDLED_TABLE_SCHEMA).context("parsing bundled table schema")?;
        Self::compile(&raw, "bundled table schema")
    }

    /// Load and compile a schema file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw: Value = serde_json::from_reader(
            File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
        )
        .with_context(|| format!("parsing schema {}", path.display()))?;
        Self::compile(&raw, &path.display().to_string())
    }

    fn compile(raw: &Value, origin: &str) -> Result<Self> {
        let compiled = JSONSchema::compile(raw)
            .map_err(|err| anyhow!("compiling schema {origin}: {err}"))?;
        Ok(Self { compiled })
    }

    /// Validate a dataset document, listing every violation on failure.
    pub fn validate(&self, instance: &Value, origin: &str) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| format!("{}: {}", err.instance_path, err))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("{origin} failed schema validation:\n{details}");
        }
        Ok(())
    }
}
