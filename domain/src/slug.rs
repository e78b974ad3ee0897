//! Slug derivation from clip titles.

use unicode_normalization::UnicodeNormalization;

use crate::validate::{is_ecma_whitespace, trim_ecma};

/// Derive a URL-safe slug from a (trimmed) title.
///
/// Lower-cases, folds accents via NFD, drops everything except `a-z`, `0-9`,
/// whitespace and `-`, then turns whitespace runs into a single hyphen and
/// squeezes repeated hyphens. Leading/trailing hyphens are kept as-is.
pub fn slugify(title: &str) -> String {
    let folded: String = title
        .to_lowercase()
        .nfd()
        .filter(|c| !is_diacritic(*c))
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || is_ecma_whitespace(*c) || *c == '-')
        .collect();

    let mut out = String::with_capacity(folded.len());
    let mut in_space = false;
    for c in trim_ecma(&folded).chars() {
        if is_ecma_whitespace(c) {
            in_space = true;
            continue;
        }
        if in_space {
            push_hyphen(&mut out);
            in_space = false;
        }
        if c == '-' {
            push_hyphen(&mut out);
        } else {
            out.push(c);
        }
    }
    out
}

fn push_hyphen(out: &mut String) {
    if !out.ends_with('-') {
        out.push('-');
    }
}

// Combining Diacritical Marks block only (U+0300..U+036F).
fn is_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
