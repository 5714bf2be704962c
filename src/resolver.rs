//! Token-to-record resolution.
//!
//! A token may be a literal key value, the case-flipped form of one, a
//! physical code, a decimal keyCode or a description slug. Rules run in a
//! fixed order and the first hit wins; within a rule the first record in
//! dataset order wins. Nothing here fails: an unmatched token resolves to the
//! empty record.

use crate::case::case_opposite;
use crate::catalog::{KeyEventRecord, KeyTable};
use crate::slug::slugify;
use std::fmt;
use tracing::debug;

/// The rule that matched a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchRule {
    Key,
    OppositeCaseKey,
    Code,
    KeyCode,
    DescriptionSlug,
}

impl MatchRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchRule::Key => "key",
            MatchRule::OppositeCaseKey => "opposite-case-key",
            MatchRule::Code => "code",
            MatchRule::KeyCode => "key-code",
            MatchRule::DescriptionSlug => "description-slug",
        }
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve `token` to a record, or the empty record when nothing matches.
pub fn resolve(token: &str, table: &KeyTable) -> KeyEventRecord {
    match resolve_match(token, table) {
        Some((record, _)) => record.clone(),
        None => KeyEventRecord::default(),
    }
}

/// Resolve `token` and report which rule produced the match.
pub fn resolve_match<'t>(
    token: &str,
    table: &'t KeyTable,
) -> Option<(&'t KeyEventRecord, MatchRule)> {
    let found = find_match(token, table.records());
    match &found {
        Some((_, rule)) => debug!(token, rule = rule.as_str(), "token resolved"),
        None => debug!(token, "token did not resolve"),
    }
    found
}

fn find_match<'t>(
    token: &str,
    records: &'t [KeyEventRecord],
) -> Option<(&'t KeyEventRecord, MatchRule)> {
    if let Some(record) = records.iter().find(|r| r.key.as_deref() == Some(token)) {
        return Some((record, MatchRule::Key));
    }

    let opposite = case_opposite(token);
    if let Some(record) = records
        .iter()
        .find(|r| r.key.as_deref() == Some(opposite.as_str()))
    {
        return Some((record, MatchRule::OppositeCaseKey));
    }

    if let Some(record) = records.iter().find(|r| r.code.as_deref() == Some(token)) {
        return Some((record, MatchRule::Code));
    }

    // Zero counts as "no number": "0" never reaches the keyCode scan.
    if let Some(number) = parse_int_prefix(token).filter(|n| *n != 0) {
        if let Some(record) = records
            .iter()
            .find(|r| r.key_code.is_some_and(|code| i64::from(code) == number))
        {
            return Some((record, MatchRule::KeyCode));
        }
    }

    records
        .iter()
        .filter_map(|r| r.description().map(|text| (r, text)))
        .find(|(_, text)| slugify(text) == token)
        .map(|(record, _)| (record, MatchRule::DescriptionSlug))
}

/// Leading decimal integer of `input`, read the way `parseInt(input, 10)`
/// reads it: optional leading whitespace and sign, then digits up to the
/// first non-digit. `None` when no digit follows, or when the value does not
/// fit in an `i64` (no keyCode can equal it anyway).
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
