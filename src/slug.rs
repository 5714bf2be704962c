//! URL slugs for key descriptions.
//!
//! Text is transliterated to ASCII first, then split into lowercase words
//! joined by single hyphens. `&` reads as `and` and contractions lose their
//! apostrophe before transliteration.

use deunicode::deunicode;
use heck::ToKebabCase;

pub fn slugify(input: &str) -> String {
    let joined = join_contractions(input);
    let spelled = joined.replace('&', " and ");
    deunicode(&spelled).to_kebab_case()
}

// `it's` -> `its`, `don't` -> `dont`
fn join_contractions(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    for (idx, ch) in chars.iter().enumerate() {
        if matches!(ch, '\'' | '\u{2019}') {
            let prev_is_word = idx > 0 && chars[idx - 1].is_alphanumeric();
            let next_is_suffix = matches!(chars.get(idx + 1), Some('t' | 's'));
            let then_boundary = chars.get(idx + 2).is_none_or(|c| c.is_whitespace());
            if prev_is_word && next_is_suffix && then_boundary {
                continue;
            }
        }
        out.push(*ch);
    }
    out
}
