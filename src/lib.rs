use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::{
    env,
    path::{Path, PathBuf},
};

pub mod case;
pub mod catalog;
pub mod logging;
pub mod page;
pub mod paths;
pub mod resolver;
pub mod schema_loader;
pub mod similar;
pub mod site;
pub mod slug;

pub use case::case_opposite;
pub use catalog::{DEFAULT_DATASET_PATH, KeyEventRecord, KeyLocation, KeyTable, KeyTableFile};
pub use page::{KeyPage, SimilarLink, displayed_event};
pub use paths::static_paths;
pub use resolver::{MatchRule, resolve, resolve_match};
pub use schema_loader::TableSchema;
pub use similar::find_similar_keys;
pub use site::{SiteManifest, build_site};
pub use slug::slugify;

/// Env var pointing at a dataset file to use instead of the bundled one.
pub const ENV_DATASET_PATH: &str = "KEYCODES_DATA";

/// Dataset path chosen by flag, then `KEYCODES_DATA`; `None` means bundled.
pub fn resolve_dataset_path(cli_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_override {
        return Some(path.to_path_buf());
    }
    match env::var_os(ENV_DATASET_PATH) {
        Some(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

/// Load the table the binaries operate on.
pub fn load_table(cli_override: Option<&Path>) -> Result<KeyTable> {
    match resolve_dataset_path(cli_override) {
        Some(path) => KeyTable::load(&path)
            .with_context(|| format!("loading keycode dataset {}", path.display())),
        None => KeyTable::bundled(),
    }
}

/// Parse live keyboard events from a JSON object, a JSON array or NDJSON.
pub fn parse_event_stream(input: &str) -> Result<Vec<KeyEventRecord>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("No event input provided");
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return match value {
            Value::Array(items) => {
                let events = items
                    .into_iter()
                    .map(serde_json::from_value)
                    .collect::<Result<Vec<KeyEventRecord>, _>>()
                    .context("Unable to parse JSON array of key events")?;
                if events.is_empty() {
                    bail!("No key events found in input array");
                }
                Ok(events)
            }
            Value::Object(_) => serde_json::from_value(value)
                .map(|event| vec![event])
                .context("Unable to parse key event"),
            _ => bail!("Unsupported JSON input; expected object or array"),
        };
    }

    let mut events = Vec::new();
    for (idx, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let event: KeyEventRecord = serde_json::from_str(line)
            .with_context(|| format!("Unable to parse key event from line {}", idx + 1))?;
        events.push(event);
    }

    if events.is_empty() {
        bail!("No key events found in input stream");
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_stream_accepts_object_array_and_ndjson() {
        let single = parse_event_stream(r#"{"key":"a","code":"KeyA","keyCode":65}"#).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].code.as_deref(), Some("KeyA"));

        let array = parse_event_stream(r#"[{"key":"a"},{"key":"b"}]"#).unwrap();
        assert_eq!(array.len(), 2);

        let ndjson = parse_event_stream("{\"key\":\"a\"}\n\n{\"key\":\"Shift\",\"location\":1}\n")
            .unwrap();
        assert_eq!(ndjson.len(), 2);
        assert_eq!(ndjson[1].location, Some(KeyLocation::Left));
    }

    #[test]
    fn event_stream_rejects_empty_and_scalar_input() {
        assert!(parse_event_stream("   ").is_err());
        assert!(parse_event_stream("[]").is_err());
        assert!(parse_event_stream("42").is_err());
        assert!(parse_event_stream("{\"key\":\"a\"}\nnot json").is_err());
    }

    #[test]
    fn cli_override_wins_over_env() {
        let flag = PathBuf::from("/tmp/override.json");
        assert_eq!(resolve_dataset_path(Some(flag.as_path())), Some(flag));
    }
}
