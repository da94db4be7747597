//! Alternating-case transform.

/// Upper-case characters at even positions, lower-case at odd ones.
///
/// Positions count characters, not bytes. A character whose case mapping
/// expands to several characters (`ß` -> `SS`) is left as is, so the
/// output always has as many characters as the input.
pub fn semi_capitalize(sentence: &str) -> String {
    let mut out = String::with_capacity(sentence.len());
    for (position, c) in sentence.chars().enumerate() {
        let mapped = if position % 2 == 0 {
            single(c.to_uppercase())
        } else {
            single(c.to_lowercase())
        };
        out.push(mapped.unwrap_or(c));
    }
    out
}

fn single(mut mapping: impl Iterator<Item = char>) -> Option<char> {
    match (mapping.next(), mapping.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
