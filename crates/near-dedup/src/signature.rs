use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A fixed-length MinHash signature: one `u32` per hash permutation. A
/// tagged struct rather than a bare `Vec<u32>` so the checkpoint format and
/// `num_hashes` validation have something to hang off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinHashSignature {
    pub values: Vec<u32>,
}

impl MinHashSignature {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Striped band key: `(sig[b], sig[b + num_bands], sig[b + 2*num_bands], ...)`.
    /// Striped, not contiguous — using contiguous slices instead produces
    /// different clusters.
    pub fn band_key(&self, band: u32, num_bands: u32) -> Vec<u32> {
        self.values
            .iter()
            .skip(band as usize)
            .step_by(num_bands as usize)
            .copied()
            .collect()
    }
}

/// Computes the MinHash signature of an n-gram set. The i-th component is
/// `min_{g in ngrams}(murmur3_32(g) XOR i)`. An empty set yields the
/// all-`0xFFFFFFFF` signature, treated by callers as "no candidate".
pub fn build_signature(ngrams: &HashSet<String>, num_hashes: u32) -> MinHashSignature {
    if ngrams.is_empty() {
        return MinHashSignature {
            values: vec![u32::MAX; num_hashes as usize],
        };
    }

    let base_hashes: Vec<u32> = ngrams
        .iter()
        .map(|g| corpusforge_core::murmur3_32(g.as_bytes(), 0))
        .collect();

    let values = (0..num_hashes)
        .map(|i| base_hashes.iter().map(|h| h ^ i).min().unwrap())
        .collect();

    MinHashSignature { values }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn same_ngram_set_yields_same_signature() {
        let a = build_signature(&set(&["alpha beta", "beta gamma"]), 32);
        let b = build_signature(&set(&["beta gamma", "alpha beta"]), 32);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_set_yields_all_max_signature() {
        let sig = build_signature(&HashSet::new(), 16);
        assert!(sig.values.iter().all(|&v| v == u32::MAX));
    }

    #[test]
    fn band_key_is_striped_not_contiguous() {
        let sig = MinHashSignature {
            values: (0..10).collect(),
        };
        // num_bands=5, rows-per-band=2: band 0 should be [0, 5], not [0, 1].
        assert_eq!(sig.band_key(0, 5), vec![0, 5]);
        assert_eq!(sig.band_key(1, 5), vec![1, 6]);
    }

    #[test]
    fn more_overlap_tends_to_lower_minhash_distance() {
        let a = build_signature(&set(&["a b c", "b c d", "c d e", "d e f"]), 64);
        let b = build_signature(&set(&["a b c", "b c d", "x y z", "q r s"]), 64);
        let c = build_signature(&set(&["m n o", "p q r", "x y z", "q r s"]), 64);
        let agree = |s1: &MinHashSignature, s2: &MinHashSignature| {
            s1.values
                .iter()
                .zip(s2.values.iter())
                .filter(|(x, y)| x == y)
                .count()
        };
        assert!(agree(&a, &b) >= agree(&a, &c));
    }
}
