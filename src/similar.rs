//! Related keys shown next to a resolved record.
//!
//! Two records are related when they share a key family (the code with its
//! side suffix and `Key`/`Digit`/`Numpad` prefix removed, so `ShiftLeft`,
//! `ShiftRight` and `Digit1`, `Numpad1` pair up) or when their keys match
//! ignoring ASCII case.

use crate::catalog::{KeyEventRecord, KeyTable};

/// Upper bound on suggestions per page.
pub const MAX_SIMILAR_KEYS: usize = 12;

const SIDE_SUFFIXES: &[&str] = &["Left", "Right"];
const FAMILY_PREFIXES: &[&str] = &["Key", "Digit", "Numpad"];

pub fn find_similar_keys<'t>(
    record: &KeyEventRecord,
    table: &'t KeyTable,
) -> Vec<&'t KeyEventRecord> {
    if record.is_empty() {
        return Vec::new();
    }
    let family = record.code().map(key_family);
    let key = record.key();

    let mut similar: Vec<&KeyEventRecord> = Vec::new();
    for candidate in table.records() {
        if similar.len() == MAX_SIMILAR_KEYS {
            break;
        }
        if candidate == record || !candidate.is_linkable() || similar.contains(&candidate) {
            continue;
        }
        let same_family = match (family, candidate.code()) {
            (Some(family), Some(code)) => key_family(code).eq_ignore_ascii_case(family),
            _ => false,
        };
        let same_key = match (key, candidate.key()) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        };
        if same_family || same_key {
            similar.push(candidate);
        }
    }
    similar
}

/// `ShiftLeft` -> `Shift`, `Numpad4` -> `4`, `KeyA` -> `A`.
pub fn key_family(code: &str) -> &str {
    let mut family = code;
    for suffix in SIDE_SUFFIXES {
        if let Some(stripped) = family.strip_suffix(suffix) {
            if !stripped.is_empty() {
                family = stripped;
                break;
            }
        }
    }
    for prefix in FAMILY_PREFIXES {
        if let Some(stripped) = family.strip_prefix(prefix) {
            if !stripped.is_empty() {
                family = stripped;
                break;
            }
        }
    }
    family
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_strip_side_and_prefix() {
        assert_eq!(key_family("ShiftLeft"), "Shift");
        assert_eq!(key_family("ShiftRight"), "Shift");
        assert_eq!(key_family("Digit4"), "4");
        assert_eq!(key_family("Numpad4"), "4");
        assert_eq!(key_family("NumpadEnter"), "Enter");
        assert_eq!(key_family("KeyA"), "A");
        assert_eq!(key_family("Numpad"), "Numpad");
        assert_eq!(key_family("Escape"), "Escape");
    }
}
