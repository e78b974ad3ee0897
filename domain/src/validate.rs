//! Lightweight input normalization helpers. Keep logic minimal and deterministic.

use serde_json::Value;
use url::Url;

/// ECMAScript whitespace (`\s`, `String.prototype.trim`): Unicode
/// `White_Space` without U+0085, plus the BOM U+FEFF.
pub fn is_ecma_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{0085}' && c.is_whitespace())
}

/// Trim ECMAScript whitespace from both ends.
pub fn trim_ecma(s: &str) -> &str {
    s.trim_matches(is_ecma_whitespace)
}

/// Trim a string value; anything that is not a JSON string becomes empty.
pub fn normalize_text(value: &Value) -> String {
    match value {
        Value::String(s) => trim_ecma(s).to_string(),
        _ => String::new(),
    }
}

/// Parse a source URL, keeping it only when it is absolute http/https.
///
/// Canonical form is the WHATWG serialization produced by the `url` crate:
/// scheme and host lower-cased, default port dropped, an empty path becomes
/// `/`. Invalid input yields `None`, never an error.
pub fn normalize_url(s: &str) -> Option<Url> {
    let trimmed = trim_ecma(s);
    if trimmed.is_empty() {
        return None;
    }
    let parsed = Url::parse(trimmed).ok()?;
    matches!(parsed.scheme(), "http" | "https").then_some(parsed)
}

/// Host part of a normalized URL, as serialized (IPv6 keeps its brackets).
pub fn source_host(url: &Url) -> Option<String> {
    url.host_str().map(str::to_string)
}
