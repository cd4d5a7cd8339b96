//! Text normalization for n-gram construction.
//!
//! Pipeline, in order: lowercase → replace every non-word/non-space
//! character with a space → collapse whitespace runs to a single space →
//! NFD Unicode normalization. Must be idempotent and produce byte-identical
//! output across implementations, so the steps are kept in this exact order
//! with no locale-sensitive behavior.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static NON_WORD_NON_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]").expect("static pattern is valid"));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static pattern is valid"));

/// Normalize `text` per the pipeline above.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped_punct = NON_WORD_NON_SPACE.replace_all(&lowered, " ");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped_punct, " ");
    collapsed.trim().nfd().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn idempotent_on_arbitrary_text() {
        let samples = [
            "Hello, World!!  \t It's\nGreat.",
            "CAFÉ — déjà vu?",
            "   multiple   spaces   ",
            "",
            "already normalized text",
        ];
        for s in samples {
            let once = normalize(s);
            let twice = normalize(&once);
            assert_eq!(once, twice, "not idempotent for input {s:?}");
        }
    }

    #[test]
    fn lowercases_and_collapses_whitespace() {
        assert_eq!(normalize("Hello   World"), "hello world");
    }

    #[test]
    fn strips_punctuation_to_spaces() {
        assert_eq!(normalize("foo, bar; baz."), "foo bar baz");
    }
}
