//! Per-token page model.
//!
//! Combines the statically resolved record with an optional live event
//! snapshot. The live event wins whenever it reports a `key`; otherwise the
//! page shows what the token resolved to.

use crate::catalog::{KeyEventRecord, KeyTable};
use crate::similar::find_similar_keys;
use anyhow::{Context, Result};
use serde::Serialize;

pub const PAGE_TITLE_PREFIX: &str = "JavaScript Keycode - ";
pub const MISSING_DESCRIPTION: &str = "No Description. Add one?";
pub const AWAITING_KEY_PROMPT: &str = "Press any key to get the JavaScript event keycode";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KeyPage {
    pub token: String,
    pub title: String,
    pub event: KeyEventRecord,
    /// No key to show yet; the page prompts for a key press.
    pub awaiting_key: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<&'static str>,
    pub blank_space: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_label: Option<&'static str>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicode: Option<String>,
    pub similar: Vec<SimilarLink>,
    pub event_dump: String,
}

/// Link pair for one related key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SimilarLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_code: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_code_href: Option<String>,
}

impl SimilarLink {
    fn for_record(record: &KeyEventRecord) -> Self {
        Self {
            code: record.code().map(str::to_string),
            key_code: record.key_code(),
            code_href: record.code().map(page_href),
            key_code_href: record.key_code().map(|code| page_href(&code.to_string())),
        }
    }
}

/// Site-relative URL of the page for `token`.
pub fn page_href(token: &str) -> String {
    format!("/for/{token}")
}

/// Pick the record to display: the live event when its key is known.
pub fn displayed_event<'a>(
    resolved: &'a KeyEventRecord,
    live: Option<&'a KeyEventRecord>,
) -> &'a KeyEventRecord {
    match live {
        Some(event) if event.key().is_some() => event,
        _ => resolved,
    }
}

impl KeyPage {
    pub fn build(
        token: &str,
        table: &KeyTable,
        resolved: &KeyEventRecord,
        live: Option<&KeyEventRecord>,
    ) -> Result<Self> {
        let event = displayed_event(resolved, live);
        let known = event.key_code.and_then(|code| table.by_key_code(code));

        let description = known
            .and_then(KeyEventRecord::description)
            .unwrap_or(MISSING_DESCRIPTION)
            .to_string();
        let unicode = known.and_then(|record| record.unicode.clone());
        let similar = find_similar_keys(event, table)
            .into_iter()
            .map(SimilarLink::for_record)
            .collect();
        let event_dump = serde_json::to_string_pretty(event)
            .with_context(|| format!("serializing event for token {token:?}"))?;

        Ok(Self {
            token: token.to_string(),
            title: format!("{PAGE_TITLE_PREFIX}{token}"),
            event: event.clone(),
            awaiting_key: event.key().is_none(),
            prompt: event.key().is_none().then_some(AWAITING_KEY_PROMPT),
            blank_space: event.key.as_deref() == Some(" "),
            location_label: event.location.map(|location| location.label()),
            description,
            unicode,
            similar,
            event_dump,
        })
    }
}
