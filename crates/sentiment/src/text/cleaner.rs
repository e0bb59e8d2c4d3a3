//! Post cleaning and hashtag extraction.
//!
//! Two cleaning flavours exist: [`clean`] keeps hashtags intact for display and
//! aggregation, [`preprocess`] also drops the `#` marker so the text reads as plain
//! prose for a classifier.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum cleaned length for a post to be worth analyzing.
pub const DEFAULT_MIN_LENGTH: usize = 10;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+|https\S+").unwrap());

static MENTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").unwrap());

static MENTION_OR_HASH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+|#").unwrap());

static HASHTAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").unwrap());

static WHITESPACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Remove URLs, mentions, and excess whitespace from post text.
///
/// Hashtags are left untouched. The result never contains a URL or mention
/// match nor two consecutive whitespace characters, so `clean(&clean(t)) == clean(t)`.
pub fn clean(text: &str) -> String {
    let text = URL_PATTERN.replace_all(text, "");
    let text = MENTION_PATTERN.replace_all(&text, "");
    collapse_whitespace(&text)
}

/// Prepare post text for a classifier.
///
/// Like [`clean`], but also strips every literal `#` while keeping the word
/// that followed it.
pub fn preprocess(text: &str) -> String {
    let text = URL_PATTERN.replace_all(text, "");
    let text = MENTION_OR_HASH_PATTERN.replace_all(&text, "");
    collapse_whitespace(&text)
}

/// Extract hashtags in order of appearance, duplicates included.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Check whether a post still has at least `min_length` characters once cleaned.
pub fn is_valid(text: &str, min_length: usize) -> bool {
    clean(text).chars().count() >= min_length
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_PATTERN.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_urls_and_mentions() {
        assert_eq!(
            clean("Check this https://example.com/a?b=1 out @someone #AI"),
            "Check this out #AI"
        );
        assert_eq!(clean("visit www.example.org today"), "visit today");
        assert_eq!(clean("@a@b hello"), "hello");
    }

    #[test]
    fn test_clean_collapses_whitespace() {
        assert_eq!(clean("  lots \t of\n\nspace  "), "lots of space");
        assert_eq!(clean(""), "");
        assert_eq!(clean("   "), "");
    }

    #[test]
    fn test_clean_is_idempotent_on_tricky_input() {
        for input in [
            "@http://x.com y",
            "ht@user tp://x",
            "a  https://t.co/xyz\n@bob  #tag",
            "@@name www",
        ] {
            let once = clean(input);
            assert_eq!(clean(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_preprocess_drops_hash_marker() {
        assert_eq!(
            preprocess("Loving #RustLang via @ferris http://rust-lang.org"),
            "Loving RustLang via"
        );
        assert_eq!(preprocess("## double"), "double");
    }

    #[test]
    fn test_preprocess_differs_from_clean() {
        let text = "Great #AI news";
        assert_eq!(clean(text), "Great #AI news");
        assert_eq!(preprocess(text), "Great AI news");
    }

    #[test]
    fn test_extract_hashtags_preserves_order_and_duplicates() {
        assert_eq!(
            extract_hashtags("Great #AI news #ai2024 about #AI"),
            vec!["#AI", "#ai2024", "#AI"]
        );
        assert!(extract_hashtags("no tags here # alone").is_empty());
    }

    #[test]
    fn test_is_valid_uses_cleaned_length() {
        assert!(!is_valid("hi", DEFAULT_MIN_LENGTH));
        assert!(is_valid("This is a sufficiently long post", DEFAULT_MIN_LENGTH));
        assert!(!is_valid(
            "ok https://example.com/a/very/long/path/that/does/not/count",
            DEFAULT_MIN_LENGTH
        ));
    }

    #[test]
    fn test_is_valid_counts_characters_not_bytes() {
        // 10 characters, 20 bytes
        assert!(is_valid("éééééééééé", 10));
        assert!(!is_valid("ééééééééé", 10));
    }
}
