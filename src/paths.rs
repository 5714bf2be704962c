//! Enumerates every token that gets a pre-generated page.

use crate::case::case_opposite;
use crate::catalog::KeyTable;
use crate::slug::slugify;
use std::collections::BTreeSet;
use tracing::info;

// A bare space cannot be a path segment; the space key is reached through
// `Space` or `32` instead.
const SPACE_KEY: &str = " ";

/// All lookup tokens for `table`: keys and their case-flipped forms, codes,
/// non-zero keyCodes and description slugs, deduplicated.
pub fn static_paths(table: &KeyTable) -> BTreeSet<String> {
    info!(records = table.len(), "getting static paths");
    let records = table.records();

    let keys: Vec<&str> = records
        .iter()
        .filter_map(|r| r.key())
        .filter(|key| *key != SPACE_KEY)
        .collect();

    let mut paths: BTreeSet<String> = BTreeSet::new();
    paths.extend(keys.iter().map(|key| key.to_string()));
    paths.extend(keys.iter().map(|key| case_opposite(key)));
    paths.extend(records.iter().filter_map(|r| r.code()).map(str::to_string));
    paths.extend(
        records
            .iter()
            .filter_map(|r| r.key_code())
            .map(|code| code.to_string()),
    );
    paths.extend(records.iter().filter_map(|r| r.description()).map(slugify));

    info!(paths = paths.len(), "static paths ready");
    paths
}
