// src/extractors/normalize.rs

/// Collapses a raw text blob into a single-line, regex-friendly string.
///
/// Every newline, carriage return and tab becomes one space; leading and
/// trailing whitespace is trimmed. Nothing else is touched (no case folding,
/// no punctuation removal), so field patterns can anchor on the original
/// wording. Total over any input, including the empty string, and idempotent.
pub fn normalize(raw: &str) -> String {
    raw.replace(['\n', '\r', '\t'], " ").trim().to_string()
}
