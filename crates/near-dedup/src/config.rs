use crate::error::{NearDedupError, Result};
use serde::{Deserialize, Serialize};

/// Tunables for MinHash + banded LSH near-duplicate detection.
/// `(num_hashes=100, num_bands=10)` yields 10 rows per band and an S-curve
/// crossover near Jaccard ≈ 0.8, matching the default verification threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NearDedupConfig {
    pub num_hashes: u32,
    pub num_bands: u32,
    pub ngram_size: usize,
    pub jaccard_threshold: f64,
    pub lru_capacity: usize,
    pub batch_size: usize,
}

impl Default for NearDedupConfig {
    fn default() -> Self {
        Self {
            num_hashes: 100,
            num_bands: 10,
            ngram_size: 5,
            jaccard_threshold: 0.8,
            lru_capacity: 3_000,
            batch_size: 10_000,
        }
    }
}

impl NearDedupConfig {
    pub fn rows_per_band(&self) -> u32 {
        self.num_hashes / self.num_bands
    }

    /// A bad `num_hashes` / `num_bands` ratio is a fatal, startup-time
    /// `ConfigError` — never silently rounded.
    pub fn validate(&self) -> Result<()> {
        if self.num_hashes == 0 || self.num_bands == 0 {
            return Err(NearDedupError::Config(
                "num_hashes and num_bands must be positive".to_string(),
            ));
        }
        if self.num_hashes % self.num_bands != 0 {
            return Err(NearDedupError::Config(format!(
                "num_hashes ({}) must be an exact multiple of num_bands ({})",
                self.num_hashes, self.num_bands
            )));
        }
        if !(0.0..=1.0).contains(&self.jaccard_threshold) {
            return Err(NearDedupError::Config(
                "jaccard_threshold must be within [0, 1]".to_string(),
            ));
        }
        if self.ngram_size == 0 {
            return Err(NearDedupError::Config(
                "ngram_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
