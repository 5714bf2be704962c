/// Flip the case of a single alphabetic character.
///
/// Anything else (multi-character keys such as `Enter`, digits, punctuation,
/// letters without a single-character case mapping) comes back unchanged.
pub fn case_opposite(input: &str) -> String {
    let mut chars = input.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return input.to_string();
    };
    if !ch.is_alphabetic() {
        return input.to_string();
    }
    let flipped: String = if ch.is_lowercase() {
        ch.to_uppercase().collect()
    } else if ch.is_uppercase() {
        ch.to_lowercase().collect()
    } else {
        return input.to_string();
    };
    // `ß` -> `SS` has no single-letter counterpart to resolve back to.
    if flipped.chars().count() == 1 {
        flipped
    } else {
        input.to_string()
    }
}
