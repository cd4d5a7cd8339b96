use crate::error::Result;
use corpusforge_core::{line_hash, split_documents, Document, LineHash};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Global minimum token count a document must retain after rewriting to
/// survive the pass. Counted across kept content lines only, after empty
/// lines have already been preserved.
pub const MIN_SURVIVING_TOKENS: usize = 50;

/// Per-hash tally produced by the counting pass. A fixed field rather than a
/// raw `u32` so the pruning step below reads as a domain operation instead of
/// bookkeeping on a bare integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCount(pub u32);

pub type CountMap = HashMap<LineHash, LineCount>;

/// Per-file outcome of the rewrite pass, reported into `StageMeta`.
#[derive(Debug, Clone, Default)]
pub struct RewriteStats {
    pub total_lines: u64,
    pub duplicate_lines: u64,
    pub docs_kept: u64,
    pub docs_dropped: u64,
}

/// Pass 1: count how many times each line hash occurs across a single
/// bundle file's documents. Empty-after-strip lines are never counted —
/// they carry no dedup signal and are always preserved on rewrite.
pub fn count_file(path: &Path) -> Result<CountMap> {
    let contents = corpusforge_core::read_bundle(path)?;
    Ok(count_documents(&contents))
}

pub fn count_documents(docs: &[Document]) -> CountMap {
    let mut counts = CountMap::new();
    for doc in docs {
        for line in &doc.lines {
            if let Some(hash) = line_hash(line) {
                counts.entry(hash).or_insert(LineCount(0)).0 += 1;
            }
        }
    }
    counts
}

/// Merges the per-file count maps produced by `count_file` across the whole
/// corpus, summing counts for hashes shared between files.
pub fn merge_counts(maps: impl IntoIterator<Item = CountMap>) -> CountMap {
    let mut merged = CountMap::new();
    for map in maps {
        for (hash, count) in map {
            merged.entry(hash).or_insert(LineCount(0)).0 += count.0;
        }
    }
    merged
}

/// Drops every hash seen exactly once corpuswide. What remains after this
/// call is the set of duplicated line hashes — the only ones Pass 2 needs to
/// consult, and the only ones worth keeping resident in memory.
pub fn prune_unique(counts: &mut CountMap) {
    counts.retain(|_, count| count.0 > 1);
}

/// Counts every bundle file under `paths` in parallel and returns the
/// pruned, corpus-wide duplicate-hash map.
pub fn build_duplicate_map(paths: &[std::path::PathBuf]) -> Result<CountMap> {
    let per_file: Result<Vec<CountMap>> = paths.par_iter().map(|p| count_file(p)).collect();
    let mut merged = merge_counts(per_file?);
    prune_unique(&mut merged);
    log::info!(
        "exact-dedup: {} distinct line hashes recur across {} files",
        merged.len(),
        paths.len()
    );
    Ok(merged)
}

/// Pass 2, pure half: rewrites one bundle's documents against the
/// corpus-wide duplicate map. A line is kept iff it is empty-after-strip or
/// its hash is absent from `dup_counts` (meaning it was globally unique). A
/// document survives iff it kept at least one content line *and* the total
/// token count of its kept lines exceeds `MIN_SURVIVING_TOKENS`.
pub fn rewrite_documents(docs: &[Document], dup_counts: &CountMap) -> (Vec<Document>, RewriteStats) {
    let mut stats = RewriteStats::default();
    let mut survivors = Vec::with_capacity(docs.len());

    for doc in docs {
        let mut kept_lines = Vec::with_capacity(doc.lines.len());
        let mut kept_content_tokens = 0usize;
        let mut kept_a_content_line = false;

        for line in &doc.lines {
            stats.total_lines += 1;
            match line_hash(line) {
                None => kept_lines.push(line.clone()),
                Some(hash) => {
                    if dup_counts.contains_key(&hash) {
                        stats.duplicate_lines += 1;
                    } else {
                        kept_a_content_line = true;
                        kept_content_tokens += line.split_whitespace().count();
                        kept_lines.push(line.clone());
                    }
                }
            }
        }

        if kept_a_content_line && kept_content_tokens > MIN_SURVIVING_TOKENS {
            stats.docs_kept += 1;
            survivors.push(Document { lines: kept_lines });
        } else {
            stats.docs_dropped += 1;
        }
    }

    (survivors, stats)
}

/// Pass 2, I/O half: reads a bundle file, rewrites it against `dup_counts`,
/// and writes the survivors back out atomically under `out_path`.
pub fn rewrite_file(
    in_path: &Path,
    out_path: &Path,
    dup_counts: &CountMap,
) -> Result<RewriteStats> {
    let docs = corpusforge_core::read_bundle(in_path)?;
    let (survivors, stats) = rewrite_documents(&docs, dup_counts);
    corpusforge_core::write_bundle_atomic(out_path, &survivors)?;
    Ok(stats)
}
