//! Whitespace normalization, line splitting, and display truncation.

use std::collections::BTreeMap;

/// Replace every whitespace code point with four ASCII spaces.
///
/// Covers tab, newline, vertical tab, form feed, carriage return, ordinary
/// space, and the Unicode space separators (anything `char::is_whitespace`
/// accepts). Non-whitespace code points pass through unchanged.
pub fn normalize_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_whitespace() {
            out.push_str("    ");
        } else {
            out.push(ch);
        }
    }
    out
}

/// Split text into whitespace-normalized lines.
///
/// Line terminators (`\n`, `\r\n`) are stripped; a trailing terminator does
/// not produce a phantom empty line. Empty input yields zero lines, and a
/// single unterminated line still yields one element.
pub fn split_lines(input: &str) -> Vec<String> {
    input.lines().map(normalize_whitespace).collect()
}

/// Parse `key<delimiter>value` lines into a map.
///
/// An empty delimiter defaults to `":"`. The value is the second
/// delimiter-separated field with surrounding spaces trimmed; lines without
/// the delimiter map to an empty value. Later duplicate keys overwrite
/// earlier ones.
pub fn map_lines(input: &str, delimiter: &str) -> BTreeMap<String, String> {
    let delimiter = if delimiter.is_empty() { ":" } else { delimiter };

    let mut out = BTreeMap::new();

    for line in input.lines() {
        let parts: Vec<&str> = line.split(delimiter).collect();
        if parts.len() > 1 {
            out.insert(parts[0].to_string(), parts[1].trim_matches(' ').to_string());
        } else {
            out.insert(line.to_string(), String::new());
        }
    }

    out
}

/// Truncate text for display, appending `"..."` when it was cut.
///
/// Texts strictly shorter than `max_len` characters pass through unchanged;
/// a text of exactly `max_len` characters is still truncated and suffixed.
/// The strict boundary is kept for compatibility with existing callers.
/// Operates on `char` boundaries, not grapheme clusters.
pub fn truncate_for_display(input: &str, max_len: usize) -> String {
    if input.chars().count() < max_len {
        return input.to_string();
    }

    let head: String = input.chars().take(max_len).collect();
    format!("{head}...")
}
