//! Text normalization helpers shared by hashing and node construction.

use unicode_normalization::UnicodeNormalization;

/// Collapse runs of whitespace into single spaces and trim.
pub fn normalize_inline_whitespace<T: AsRef<str>>(text: T) -> String {
    let mut normalized = String::new();
    let mut seen_space = false;
    for ch in text.as_ref().chars() {
        if ch.is_whitespace() {
            if !seen_space {
                normalized.push(' ');
                seen_space = true;
            }
        } else {
            normalized.push(ch);
            seen_space = false;
        }
    }
    normalized.trim().to_string()
}

/// Identity form of a text: lowercased with every whitespace character removed.
///
/// Two texts that differ only in casing or whitespace share this key.
pub fn identity_key(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect()
}

/// Output form of a text: whitespace collapsed, NFKD applied, casing kept.
pub fn display_text(text: &str) -> String {
    normalize_inline_whitespace(text).nfkd().collect()
}
