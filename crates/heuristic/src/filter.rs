//! `HeuristicFilter`: the C4 line/page filter composed with the Gopher
//! document filter.

use crate::config::HeuristicConfig;
use corpusforge_core::WordTokenizer;
use serde::{Deserialize, Serialize};

/// Per-document line-filtering stats.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineStats {
    pub short: u64,
    pub invalid_terminator: u64,
    pub blacklisted: u64,
    pub kept: u64,
}

/// Why a document was rejected, used as the `rejected_docs_by_type` key in
/// the stage's `.meta.json` sidecar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    PageBlacklisted,
    NoLinesKept,
    GopherTokenCount,
    GopherMeanTokenLength,
    GopherEllipsisRatio,
    GopherAlphaRatio,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::PageBlacklisted => "blacklisted",
            RejectReason::NoLinesKept => "no_lines_kept",
            RejectReason::GopherTokenCount => "gopher_token_count",
            RejectReason::GopherMeanTokenLength => "gopher_mean_token_length",
            RejectReason::GopherEllipsisRatio => "gopher_ellipsis_ratio",
            RejectReason::GopherAlphaRatio => "gopher_alpha_ratio",
        }
    }
}

/// The result of filtering one document.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub kept: bool,
    pub filtered_text: String,
    pub line_stats: LineStats,
    pub reject_reason: Option<RejectReason>,
}

pub struct HeuristicFilter {
    config: HeuristicConfig,
    tokenizer: Box<dyn WordTokenizer>,
}

impl HeuristicFilter {
    pub fn new(config: HeuristicConfig) -> Self {
        let tokenizer = config.tokenizer.build();
        Self { config, tokenizer }
    }

    /// Filter a single document's text. Never panics on malformed input —
    /// worst case is a rejection with a tagged reason.
    pub fn filter_document(&self, doc: &str) -> FilterOutcome {
        let doc_lower = doc.to_lowercase();
        if self
            .config
            .page_blacklist
            .iter()
            .any(|phrase| doc_lower.contains(phrase.as_str()))
        {
            log::debug!("heuristic: document rejected: page_blacklisted");
            return FilterOutcome {
                kept: false,
                filtered_text: String::new(),
                line_stats: LineStats::default(),
                reject_reason: Some(RejectReason::PageBlacklisted),
            };
        }

        let (filtered_text, line_stats) = self.apply_line_rules(doc);
        if line_stats.kept == 0 {
            log::debug!("heuristic: document rejected: no_lines_kept");
            return FilterOutcome {
                kept: false,
                filtered_text: String::new(),
                line_stats,
                reject_reason: Some(RejectReason::NoLinesKept),
            };
        }

        if let Some(reason) = self.gopher_reject_reason(&filtered_text) {
            log::debug!("heuristic: document rejected: {}", reason.as_str());
            return FilterOutcome {
                kept: false,
                filtered_text: String::new(),
                line_stats,
                reject_reason: Some(reason),
            };
        }

        FilterOutcome {
            kept: true,
            filtered_text,
            line_stats,
            reject_reason: None,
        }
    }

    fn apply_line_rules(&self, doc: &str) -> (String, LineStats) {
        let mut stats = LineStats::default();
        let mut kept_lines = Vec::new();

        for line in doc.lines() {
            let stripped = line.trim();
            let word_ct = stripped.split_whitespace().count();

            if stripped.is_empty() || word_ct < self.config.min_line_tokens {
                stats.short += 1;
                continue;
            }

            if !stripped
                .ends_with(self.config.valid_line_terminators.as_slice())
            {
                stats.invalid_terminator += 1;
                continue;
            }

            let line_lower = stripped.to_lowercase();
            if self
                .config
                .line_blacklist
                .iter()
                .any(|phrase| line_lower.contains(phrase.as_str()))
            {
                stats.blacklisted += 1;
                continue;
            }

            if word_ct < self.config.short_line_token_ceiling
                && self
                    .config
                    .short_line_blacklist
                    .iter()
                    .any(|phrase| line_lower.contains(phrase.as_str()))
            {
                stats.blacklisted += 1;
                continue;
            }

            stats.kept += 1;
            kept_lines.push(line);
        }

        (kept_lines.join("\n"), stats)
    }

    fn gopher_reject_reason(&self, text: &str) -> Option<RejectReason> {
        let tokens = self.tokenizer.tokenize(text);

        if tokens.len() < self.config.gopher_min_tokens || tokens.len() > self.config.gopher_max_tokens {
            return Some(RejectReason::GopherTokenCount);
        }

        let total_chars: usize = tokens.iter().map(|t| t.chars().count()).sum();
        let mean_len = total_chars as f64 / tokens.len() as f64;
        if mean_len < self.config.gopher_min_mean_token_len
            || mean_len > self.config.gopher_max_mean_token_len
        {
            return Some(RejectReason::GopherMeanTokenLength);
        }

        let lines: Vec<&str> = text.split('\n').collect();
        let ellipsis_ct = lines.iter().filter(|l| l.ends_with("...")).count();
        let ellipsis_ratio = ellipsis_ct as f64 / lines.len() as f64;
        if ellipsis_ratio > self.config.gopher_max_ellipsis_line_ratio {
            return Some(RejectReason::GopherEllipsisRatio);
        }

        let min_alpha_tokens = (tokens.len() as f64 * self.config.gopher_min_alpha_token_ratio).ceil() as usize;
        let max_non_alpha_tokens = tokens.len().saturating_sub(min_alpha_tokens);
        let mut non_alpha_ct = 0usize;
        for token in &tokens {
            if !token.chars().any(|c| c.is_alphabetic()) {
                non_alpha_ct += 1;
                if non_alpha_ct > max_non_alpha_tokens {
                    return Some(RejectReason::GopherAlphaRatio);
                }
            }
        }

        None
    }
}
