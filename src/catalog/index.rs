//! Indexed view of a keycode dataset.
//!
//! The table enforces the expected dataset schema version and keeps records in
//! file order, since resolution breaks ties by position. Identifying fields
//! are allowed to repeat; a derived keyCode index points at the first record
//! carrying each code.

use crate::catalog::{BUNDLED_DATASET, KeyEventRecord, KeyTableFile};
use crate::schema_loader::TableSchema;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::debug;

// Only one dataset layout exists; reject anything else unless the caller
// widens the accepted set via env.
const DEFAULT_SCHEMA_VERSION: &str = "keycode_table_v1";
const ENV_ALLOWED_SCHEMA_VERSIONS: &str = "KEYCODES_ALLOWED_SCHEMAS";

#[derive(Debug, Clone)]
/// Keycode dataset plus a derived index keyed by keyCode.
pub struct KeyTable {
    schema_version: String,
    records: Vec<KeyEventRecord>,
    by_key_code: BTreeMap<u32, usize>,
}

impl KeyTable {
    /// Load and validate a dataset from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading keycode dataset {}", path.display()))?;
        Self::from_json_str(&data, &path.display().to_string())
    }

    /// The dataset compiled into the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_DATASET, "bundled keycode dataset")
    }

    /// Parse, schema-check and semantically validate a dataset document.
    ///
    /// `origin` names the source in error messages.
    pub fn from_json_str(data: &str, origin: &str) -> Result<Self> {
        let raw: Value =
            serde_json::from_str(data).with_context(|| format!("parsing {origin}"))?;
        TableSchema::bundled()?.validate(&raw, origin)?;
        let file: KeyTableFile =
            serde_json::from_value(raw).with_context(|| format!("decoding {origin}"))?;
        Self::from_file(file).with_context(|| format!("validating {origin}"))
    }

    /// Build a table from an already decoded dataset.
    pub fn from_file(file: KeyTableFile) -> Result<Self> {
        validate_schema_version(&file.schema_version)?;
        validate_records(&file.keys)?;
        let by_key_code = build_index(&file.keys);
        debug!(
            records = file.keys.len(),
            key_codes = by_key_code.len(),
            "keycode table loaded"
        );
        Ok(Self {
            schema_version: file.schema_version,
            records: file.keys,
            by_key_code,
        })
    }

    pub fn schema_version(&self) -> &str {
        &self.schema_version
    }

    /// Records in dataset order.
    pub fn records(&self) -> &[KeyEventRecord] {
        &self.records
    }

    /// First record carrying `key_code`.
    pub fn by_key_code(&self, key_code: u32) -> Option<&KeyEventRecord> {
        self.by_key_code
            .get(&key_code)
            .and_then(|idx| self.records.get(*idx))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(schema_version) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version,
            allowed
        );
    }

    Ok(())
}

fn allowed_schema_versions() -> BTreeSet<String> {
    let mut versions: BTreeSet<String> = BTreeSet::new();
    versions.insert(DEFAULT_SCHEMA_VERSION.to_string());
    if let Ok(raw) = std::env::var(ENV_ALLOWED_SCHEMA_VERSIONS) {
        for v in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            versions.insert(v.to_string());
        }
    }
    versions
}

fn validate_records(records: &[KeyEventRecord]) -> Result<()> {
    if records.is_empty() {
        bail!("dataset contains no keys");
    }

    for (idx, record) in records.iter().enumerate() {
        if record.key.is_none() && record.code.is_none() && record.key_code.is_none() {
            bail!("keys[{idx}] has none of key, code or keyCode");
        }
        if let Some(description) = &record.description {
            if description.trim().is_empty() {
                bail!("keys[{idx}] has a blank description");
            }
        }
    }
    Ok(())
}

fn build_index(records: &[KeyEventRecord]) -> BTreeMap<u32, usize> {
    let mut map = BTreeMap::new();
    for (idx, record) in records.iter().enumerate() {
        if let Some(code) = record.key_code {
            map.entry(code).or_insert(idx);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_table_loads() {
        let table = KeyTable::bundled().unwrap();
        assert_eq!(table.schema_version(), DEFAULT_SCHEMA_VERSION);
        assert!(table.len() > 100);
    }

    #[test]
    fn key_code_index_keeps_first_record() {
        let table = KeyTable::bundled().unwrap();
        let shift = table.by_key_code(16).unwrap();
        assert_eq!(shift.code.as_deref(), Some("ShiftLeft"));
        assert!(shift.description.is_some());
    }

    #[test]
    fn default_schema_version_is_always_allowed() {
        assert!(allowed_schema_versions().contains(DEFAULT_SCHEMA_VERSION));
        assert!(validate_schema_version(DEFAULT_SCHEMA_VERSION).is_ok());
        assert!(validate_schema_version("keycode_table_v0").is_err());
    }
}
