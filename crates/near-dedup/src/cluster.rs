use corpusforge_core::ngram_set;
use lru::LruCache;
use petgraph::unionfind::UnionFind;
use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;

/// Computes Jaccard similarity on normalized n-gram sets, backed by an LRU
/// cache keyed by path so repeated appearances across candidate pairs don't
/// re-tokenize the same file (default capacity 3 000).
pub struct NgramCache {
    cache: LruCache<String, HashSet<String>>,
    ngram_size: usize,
}

impl NgramCache {
    pub fn new(capacity: usize, ngram_size: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            cache: LruCache::new(capacity),
            ngram_size,
        }
    }

    fn ngrams_of<'a>(&'a mut self, path: &str, text_of: &mut impl FnMut(&str) -> String) -> &'a HashSet<String> {
        if !self.cache.contains(path) {
            let text = text_of(path);
            let set = ngram_set(&text, self.ngram_size);
            self.cache.put(path.to_string(), set);
        }
        self.cache.get(path).unwrap()
    }

    /// Jaccard `|A ∩ B| / |A ∪ B|`. An empty set on either side is never a
    /// duplicate, regardless of threshold.
    pub fn jaccard(&mut self, a: &str, b: &str, text_of: &mut impl FnMut(&str) -> String) -> f64 {
        let set_a = self.ngrams_of(a, text_of).clone();
        let set_b = self.ngrams_of(b, text_of).clone();
        if set_a.is_empty() || set_b.is_empty() {
            return 0.0;
        }
        let intersection = set_a.intersection(&set_b).count();
        let union = set_a.union(&set_b).count();
        intersection as f64 / union as f64
    }
}

/// A resolved cluster: the chosen representative plus every member
/// (including the representative).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateCluster {
    pub representative: String,
    pub members: Vec<String>,
}

/// Phase C + D: verifies candidate pairs in batches (bounding the working
/// set of n-gram sets held at once), unions verified pairs via union-find,
/// and materializes connected components of size > 1 into clusters with a
/// deterministic (lexicographically smallest) representative.
pub fn cluster_candidates(
    all_paths: &[String],
    candidate_pairs: &HashSet<(String, String)>,
    jaccard_threshold: f64,
    batch_size: usize,
    cache: &mut NgramCache,
    mut text_of: impl FnMut(&str) -> String,
) -> Vec<DuplicateCluster> {
    let index_of: HashMap<&str, usize> = all_paths
        .iter()
        .enumerate()
        .map(|(i, p)| (p.as_str(), i))
        .collect();
    let mut uf = UnionFind::new(all_paths.len());

    let pairs: Vec<&(String, String)> = candidate_pairs.iter().collect();
    for batch in pairs.chunks(batch_size.max(1)) {
        for (a, b) in batch {
            let similarity = cache.jaccard(a, b, &mut text_of);
            if similarity >= jaccard_threshold {
                if let (Some(&ia), Some(&ib)) = (index_of.get(a.as_str()), index_of.get(b.as_str())) {
                    uf.union(ia, ib);
                }
            }
        }
    }

    let mut groups: HashMap<usize, Vec<String>> = HashMap::new();
    for path in all_paths {
        let idx = index_of[path.as_str()];
        groups.entry(uf.find_mut(idx)).or_default().push(path.clone());
    }

    groups
        .into_values()
        .filter(|members| members.len() > 1)
        .map(|mut members| {
            members.sort();
            let representative = members[0].clone();
            DuplicateCluster {
                representative,
                members,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jaccard_of_empty_set_is_never_a_duplicate() {
        let mut cache = NgramCache::new(10, 5);
        let sim = cache.jaccard("a", "b", &mut |path| if path == "a" { "".to_string() } else { "one two three four five six".to_string() });
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn identical_texts_have_jaccard_one() {
        let mut cache = NgramCache::new(10, 3);
        let sim = cache.jaccard("a", "b", &mut |_| "the quick brown fox jumps over the lazy dog".to_string());
        assert_eq!(sim, 1.0);
    }

    #[test]
    fn clusters_near_duplicates_and_leaves_unrelated_files_singleton() {
        let all = vec!["a.txt".to_string(), "b.txt".to_string(), "c.txt".to_string()];
        let mut pairs = HashSet::new();
        pairs.insert(("a.txt".to_string(), "b.txt".to_string()));

        let texts: HashMap<&str, &str> = [
            ("a.txt", "the quick brown fox jumps over the lazy dog today"),
            ("b.txt", "the quick brown fox jumps over the lazy dog today now"),
            ("c.txt", "completely different unrelated content about gardening"),
        ]
        .into_iter()
        .collect();

        let mut cache = NgramCache::new(10, 5);
        let clusters = cluster_candidates(&all, &pairs, 0.8, 100, &mut cache, |p| {
            texts.get(p).unwrap().to_string()
        });

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].representative, "a.txt");
        assert_eq!(clusters[0].members, vec!["a.txt".to_string(), "b.txt".to_string()]);
    }

    #[test]
    fn below_threshold_pairs_never_cluster() {
        let all = vec!["a.txt".to_string(), "b.txt".to_string()];
        let mut pairs = HashSet::new();
        pairs.insert(("a.txt".to_string(), "b.txt".to_string()));

        let texts: HashMap<&str, &str> = [
            ("a.txt", "alpha beta gamma delta epsilon zeta eta theta"),
            ("b.txt", "alpha beta gamma delta nothing else matches here"),
        ]
        .into_iter()
        .collect();

        let mut cache = NgramCache::new(10, 5);
        let clusters = cluster_candidates(&all, &pairs, 0.95, 100, &mut cache, |p| {
            texts.get(p).unwrap().to_string()
        });
        assert!(clusters.is_empty());
    }
}
