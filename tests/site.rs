// Site manifest and page model guard rails.
mod support;

use anyhow::Result;
use keycodes::page::MISSING_DESCRIPTION;
use keycodes::{KeyEventRecord, KeyPage, build_site, find_similar_keys, resolve, static_paths};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

use support::{bundled_table, fixture_table};

#[test]
fn manifest_has_one_page_per_static_path() -> Result<()> {
    let table = bundled_table();
    let manifest = build_site(&table)?;
    let paths = static_paths(&table);
    assert_eq!(manifest.pages.len(), paths.len());
    for (token, page) in &manifest.pages {
        assert!(paths.contains(token));
        assert_eq!(page.title, format!("JavaScript Keycode - {token}"));
        assert!(!page.awaiting_key || page.event.key.is_none());
    }
    Ok(())
}

#[test]
fn manifest_write_replaces_target_atomically() -> Result<()> {
    let (table, _file) = fixture_table(json!([
        {"key": "Enter", "code": "Enter", "keyCode": 13, "location": 0,
         "description": "Submit the form", "unicode": "⏎"}
    ]))?;
    let dir = TempDir::new()?;
    let target = dir.path().join("pages.json");
    fs::write(&target, "stale")?;

    build_site(&table)?.write(&target)?;

    let written: Value = serde_json::from_str(&fs::read_to_string(&target)?)?;
    assert_eq!(written["schema_version"], "keycode_table_v1");
    let pages = written["pages"].as_object().expect("pages object");
    let tokens: Vec<&str> = pages.keys().map(String::as_str).collect();
    assert_eq!(tokens, ["13", "Enter", "submit-the-form"]);
    assert_eq!(pages["13"]["description"], "Submit the form");
    assert_eq!(pages["13"]["unicode"], "⏎");
    assert_eq!(pages["13"]["event"]["keyCode"], 13);

    let leftovers = fs::read_dir(dir.path())?.count();
    assert_eq!(leftovers, 1, "temp file should be persisted, not left behind");
    Ok(())
}

#[test]
fn live_event_takes_precedence_when_it_has_a_key() {
    let table = bundled_table();
    let resolved = resolve("Enter", &table);
    let live = KeyEventRecord {
        key: Some("q".into()),
        code: Some("KeyQ".into()),
        key_code: Some(81),
        which: Some(81),
        ..KeyEventRecord::default()
    };
    let page = KeyPage::build("Enter", &table, &resolved, Some(&live)).unwrap();
    assert_eq!(page.event, live);
    assert_eq!(page.title, "JavaScript Keycode - Enter");
    assert_eq!(page.description, MISSING_DESCRIPTION);
}

#[test]
fn live_event_with_blank_key_falls_back_to_resolved() {
    let table = bundled_table();
    let resolved = resolve("Enter", &table);
    let live = KeyEventRecord {
        key: Some(String::new()),
        code: Some("Unidentified".into()),
        ..KeyEventRecord::default()
    };
    let page = KeyPage::build("Enter", &table, &resolved, Some(&live)).unwrap();
    assert_eq!(page.event, resolved);
    assert!(!page.awaiting_key);
    assert_eq!(page.prompt, None);
}

#[test]
fn space_page_flags_blank_space() {
    let table = bundled_table();
    let record = resolve("Space", &table);
    let page = KeyPage::build("Space", &table, &record, None).unwrap();
    assert!(page.blank_space);
    assert_eq!(page.unicode.as_deref(), Some("␣"));
}

#[test]
fn similar_keys_are_distinct_and_linkable() {
    let table = bundled_table();
    for record in table.records() {
        for similar in find_similar_keys(record, &table) {
            assert_ne!(similar, record);
            assert!(similar.code.is_some() || similar.key_code.is_some());
        }
    }
    let shift = resolve("ShiftLeft", &table);
    let codes: Vec<_> = find_similar_keys(&shift, &table)
        .into_iter()
        .filter_map(|record| record.code.as_deref())
        .collect();
    assert_eq!(codes, ["ShiftRight"]);
}

#[test]
fn similar_links_point_at_pages() {
    let table = bundled_table();
    let record = resolve("Digit1", &table);
    let page = KeyPage::build("Digit1", &table, &record, None).unwrap();
    let link = page
        .similar
        .iter()
        .find(|link| link.code.as_deref() == Some("Numpad1"))
        .expect("numpad 1 is similar to digit 1");
    assert_eq!(link.code_href.as_deref(), Some("/for/Numpad1"));
    assert_eq!(link.key_code_href.as_deref(), Some("/for/97"));
}
