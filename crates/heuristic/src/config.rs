use crate::error::{HeuristicError, Result};
use corpusforge_core::TokenizerKind;
use serde::{Deserialize, Serialize};

/// Configuration for `HeuristicFilter`: page/line/short-line blacklists
/// plus the Gopher document-level thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    pub page_blacklist: Vec<String>,
    pub line_blacklist: Vec<String>,
    pub short_line_blacklist: Vec<String>,

    pub min_line_tokens: usize,
    pub short_line_token_ceiling: usize,
    pub valid_line_terminators: Vec<char>,

    pub gopher_min_tokens: usize,
    pub gopher_max_tokens: usize,
    pub gopher_min_mean_token_len: f64,
    pub gopher_max_mean_token_len: f64,
    pub gopher_max_ellipsis_line_ratio: f64,
    pub gopher_min_alpha_token_ratio: f64,

    pub tokenizer: TokenizerKind,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            page_blacklist: vec!["lorem ipsum".to_string(), "{".to_string()],
            line_blacklist: vec![
                "javascript".to_string(),
                "privacy policy".to_string(),
                "terms of use".to_string(),
                "cookie policy".to_string(),
                "uses cookies".to_string(),
                "use of cookies".to_string(),
                "use cookies".to_string(),
                "all rights reserved".to_string(),
                "terms and conditions".to_string(),
                "copyright ©".to_string(),
                "© copyright".to_string(),
            ],
            short_line_blacklist: vec![
                "powered by".to_string(),
                "designed by".to_string(),
                "theme by".to_string(),
                "template by".to_string(),
                "website by".to_string(),
            ],
            min_line_tokens: 5,
            short_line_token_ceiling: 15,
            valid_line_terminators: vec!['.', '!', '?', '"', '\''],
            gopher_min_tokens: 50,
            gopher_max_tokens: 100_000,
            gopher_min_mean_token_len: 3.0,
            gopher_max_mean_token_len: 10.0,
            gopher_max_ellipsis_line_ratio: 0.3,
            gopher_min_alpha_token_ratio: 0.8,
            tokenizer: TokenizerKind::Simple,
        }
    }
}

impl HeuristicConfig {
    pub fn validate(&self) -> Result<()> {
        if self.gopher_min_tokens > self.gopher_max_tokens {
            return Err(HeuristicError::InvalidConfig(format!(
                "gopher_min_tokens ({}) exceeds gopher_max_tokens ({})",
                self.gopher_min_tokens, self.gopher_max_tokens
            )));
        }
        if self.gopher_min_mean_token_len > self.gopher_max_mean_token_len {
            return Err(HeuristicError::InvalidConfig(
                "gopher_min_mean_token_len exceeds gopher_max_mean_token_len".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.gopher_max_ellipsis_line_ratio) {
            return Err(HeuristicError::InvalidConfig(
                "gopher_max_ellipsis_line_ratio must be within [0, 1]".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.gopher_min_alpha_token_ratio) {
            return Err(HeuristicError::InvalidConfig(
                "gopher_min_alpha_token_ratio must be within [0, 1]".to_string(),
            ));
        }
        if self.valid_line_terminators.is_empty() {
            return Err(HeuristicError::InvalidConfig(
                "valid_line_terminators must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        HeuristicConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_inverted_token_bounds() {
        let mut cfg = HeuristicConfig::default();
        cfg.gopher_min_tokens = 200;
        cfg.gopher_max_tokens = 10;
        assert!(cfg.validate().is_err());
    }
}
