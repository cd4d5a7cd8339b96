use crate::checkpoint::{load_checkpoint, save_checkpoint};
use crate::cluster::{cluster_candidates, DuplicateCluster, NgramCache};
use crate::config::NearDedupConfig;
use crate::error::Result;
use crate::lsh::candidate_pairs;
use crate::signature::{build_signature, MinHashSignature};
use corpusforge_core::ngram_set;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Outcome of running the full four-phase pipeline over a set of input
/// files: which files survive (copied to the output directory) and which
/// clusters, if any, produced a drop.
#[derive(Debug, Clone, Default)]
pub struct NearDedupOutcome {
    pub kept: Vec<PathBuf>,
    pub clusters: Vec<DuplicateCluster>,
}

/// Phase A: read every file, normalize, build its n-gram set and MinHash
/// signature. Unreadable files are logged and excluded from candidacy —
/// their absence never drops another file.
pub fn build_signatures(
    files: &[PathBuf],
    config: &NearDedupConfig,
) -> Vec<(String, MinHashSignature)> {
    files
        .par_iter()
        .filter_map(|path| {
            let text = match std::fs::read(path) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(e) => {
                    log::warn!(
                        "near-dedup: skipping unreadable file {}: {e}",
                        path.display()
                    );
                    return None;
                }
            };
            let ngrams = ngram_set(&text, config.ngram_size);
            let signature = build_signature(&ngrams, config.num_hashes);
            Some((path.to_string_lossy().into_owned(), signature))
        })
        .collect()
}

/// Runs Phases A–D end to end and copies every survivor to `out_dir`,
/// preserving original filenames. If `checkpoint_path` names an existing
/// file, Phase A loads signatures from it instead of recomputing them, and
/// a length mismatch against `config.num_hashes` aborts the run rather
/// than silently regenerating.
pub fn run(
    files: &[PathBuf],
    out_dir: &Path,
    config: &NearDedupConfig,
    checkpoint_path: Option<&Path>,
) -> Result<NearDedupOutcome> {
    config.validate()?;

    let signatures: Vec<(String, MinHashSignature)> = match checkpoint_path {
        Some(path) if path.exists() => {
            load_checkpoint(path, config.num_hashes)?.into_iter().collect()
        }
        _ => {
            let built = build_signatures(files, config);
            if let Some(path) = checkpoint_path {
                let map = built.iter().cloned().collect();
                save_checkpoint(path, &map)?;
            }
            built
        }
    };

    let all_paths: Vec<String> = signatures.iter().map(|(p, _)| p.clone()).collect();
    let pairs = candidate_pairs(&signatures, config.num_bands);

    let mut cache = NgramCache::new(config.lru_capacity, config.ngram_size);
    let clusters = cluster_candidates(
        &all_paths,
        &pairs,
        config.jaccard_threshold,
        config.batch_size,
        &mut cache,
        |path| std::fs::read_to_string(path).unwrap_or_default(),
    );

    let dropped: HashSet<&str> = clusters
        .iter()
        .flat_map(|c| {
            c.members
                .iter()
                .filter(move |m| m.as_str() != c.representative.as_str())
        })
        .map(String::as_str)
        .collect();

    std::fs::create_dir_all(out_dir)
        .map_err(|e| corpusforge_core::CoreError::io(out_dir.display().to_string(), e))?;

    let mut kept = Vec::new();
    for path_str in &all_paths {
        if dropped.contains(path_str.as_str()) {
            continue;
        }
        let src = Path::new(path_str);
        let dest = out_dir.join(src.file_name().unwrap_or_default());
        std::fs::copy(src, &dest)
            .map_err(|e| corpusforge_core::CoreError::io(dest.display().to_string(), e))?;
        kept.push(dest);
    }

    Ok(NearDedupOutcome { kept, clusters })
}
