//! Static site manifest: one page per enumerated token.

use crate::catalog::KeyTable;
use crate::page::KeyPage;
use crate::paths::static_paths;
use crate::resolver::resolve;
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct SiteManifest {
    pub schema_version: String,
    pub pages: BTreeMap<String, KeyPage>,
}

/// Resolve every static path once and build its page.
///
/// A token that resolves to nothing means the dataset and the enumerator
/// disagree; that is reported as a build error rather than an empty page.
pub fn build_site(table: &KeyTable) -> Result<SiteManifest> {
    let mut pages = BTreeMap::new();
    for token in static_paths(table) {
        let record = resolve(&token, table);
        if record.is_empty() {
            bail!("static path {token:?} does not resolve to any key");
        }
        let page = KeyPage::build(&token, table, &record, None)?;
        pages.insert(token, page);
    }
    info!(pages = pages.len(), "site manifest built");
    Ok(SiteManifest {
        schema_version: table.schema_version().to_string(),
        pages,
    })
}

impl SiteManifest {
    /// Write the manifest as pretty JSON, replacing `path` only once the
    /// whole document is on disk.
    pub fn write(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("creating temp file in {}", dir.display()))?;
        serde_json::to_writer_pretty(&mut tmp, self)
            .with_context(|| format!("serializing manifest for {}", path.display()))?;
        tmp.write_all(b"\n")
            .with_context(|| format!("writing manifest for {}", path.display()))?;
        tmp.persist(path)
            .with_context(|| format!("persisting manifest to {}", path.display()))?;
        info!(path = %path.display(), pages = self.pages.len(), "site manifest written");
        Ok(())
    }
}
