//! Pluggable word tokenization for Gopher document rules.
//!
//! Rather than hiding tokenization behind an opaque external dependency,
//! this is a trait with one built-in, config-selectable implementation so
//! the tokenizer can be swapped at config time without touching call sites.

use once_cell::sync::Lazy;
use regex::Regex;

/// Splits text into words and punctuation tokens for heuristic filtering.
pub trait WordTokenizer: Send + Sync {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w']+|[^\s\w]").expect("static pattern is valid"));

/// Splits on Unicode whitespace and punctuation boundaries, emitting
/// punctuation runs of a single character as their own tokens (apostrophes
/// inside words, e.g. "don't", stay attached to the word).
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleWordTokenizer;

impl WordTokenizer for SimpleWordTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        TOKEN_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
    }
}

/// Identifies which tokenizer implementation a config selects. Only
/// `Simple` ships; the enum exists so new tokenizers can be added without
/// changing call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    Simple,
}

impl TokenizerKind {
    pub fn build(self) -> Box<dyn WordTokenizer> {
        match self {
            TokenizerKind::Simple => Box::new(SimpleWordTokenizer),
        }
    }
}

impl Default for TokenizerKind {
    fn default() -> Self {
        TokenizerKind::Simple
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_words_and_keeps_punctuation_separate() {
        let tok = SimpleWordTokenizer;
        let tokens = tok.tokenize("Hello, world! It's fine.");
        assert_eq!(
            tokens,
            vec!["Hello", ",", "world", "!", "It's", "fine", "."]
        );
    }

    #[test]
    fn whitespace_only_yields_no_tokens() {
        let tok = SimpleWordTokenizer;
        assert!(tok.tokenize("   \n\t  ").is_empty());
    }
}
