//! Crude watch-time estimate based on word count.

use crate::validate::is_ecma_whitespace;

/// Reading pace used for the estimate.
pub const WORDS_PER_MINUTE: usize = 130;

/// Count whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split(is_ecma_whitespace)
        .filter(|w| !w.is_empty())
        .count()
}

/// Estimate duration in seconds for a clip, rounded up to whole minutes with
/// a one-minute floor.
pub fn estimate_duration_seconds(title: &str, description: &str) -> u32 {
    let words = word_count(&format!("{} {}", title, description));
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes)
        .unwrap_or(u32::MAX / 60)
        .saturating_mul(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn counts_words() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  a \n b\tc  "), 3);
        assert_eq!(word_count("a\u{feff}b"), 2);
        assert_eq!(word_count("a\u{0085}b"), 1);
    }

    #[test]
    fn one_minute_floor() {
        assert_eq!(estimate_duration_seconds("Hi", ""), 60);
        assert_eq!(estimate_duration_seconds("", ""), 60);
    }

    #[test]
    fn rounds_up_per_130_words() {
        assert_eq!(estimate_duration_seconds(&words(130), ""), 60);
        assert_eq!(estimate_duration_seconds(&words(131), ""), 120);
        assert_eq!(estimate_duration_seconds(&words(10), &words(250)), 120);
        assert_eq!(estimate_duration_seconds(&words(11), &words(250)), 180);
    }
}
