//! `corpusforge near-dedup` — MinHash + banded LSH near-duplicate document
//! deduplication. Unlike the line/document stages, near-dedup's LSH index
//! and union-find clustering are corpus-wide state built in a single
//! process, so this command does not go through the per-file reservation
//! protocol — it calls the crate's four-phase pipeline once over the whole
//! input set. Each surviving file still gets its `.meta.json` sidecar so
//! downstream dashboards see a consistent contract; the deduplication unit
//! here is a whole bundle file rather than a single document, so its
//! sidecar reports `total_docs: 1` / `accepted_docs_ct: 1`.

use crate::fs_util::discover_bundle_files;
use crate::runner_select::RunnerArgs;
use anyhow::Result;
use clap::Args;
use corpusforge_core::StageMeta;
use corpusforge_near_dedup::{run as run_near_dedup, NearDedupConfig};
use std::path::PathBuf;

#[derive(Args, Clone, Debug)]
pub struct NearDedupCommand {
    #[arg(long)]
    pub data_dir: PathBuf,

    #[arg(long)]
    pub out_dir: PathBuf,

    /// TOML or JSON file overriding `num_hashes` / `num_bands` /
    /// `ngram_size` / `jaccard_threshold` / cache and batch sizing.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to a signature checkpoint: loaded if present, written after
    /// Phase A otherwise.
    #[arg(long)]
    pub checkpoint: Option<PathBuf>,

    /// Accepted but unused by the single-process LSH index build; present
    /// so near-dedup's CLI surface matches every other stage's.
    #[command(flatten)]
    pub runner: RunnerArgs,
}

pub fn run(cmd: NearDedupCommand) -> Result<()> {
    std::fs::create_dir_all(&cmd.out_dir)?;

    let config: NearDedupConfig = corpusforge_core::config::load_config(cmd.config.as_deref())?;
    config.validate()?;

    let inputs = discover_bundle_files(&cmd.data_dir)?;
    log::info!("near-dedup: building signatures for {} files", inputs.len());

    let outcome = run_near_dedup(&inputs, &cmd.out_dir, &config, cmd.checkpoint.as_deref())?;

    log::info!(
        "near-dedup: {} files kept, {} clusters collapsed",
        outcome.kept.len(),
        outcome.clusters.len()
    );

    for path in &outcome.kept {
        let mut meta = StageMeta {
            total_docs: 1,
            accepted_docs_ct: 1,
            ..Default::default()
        };
        let file_name = path.file_name();
        if let Some(cluster) = outcome
            .clusters
            .iter()
            .find(|c| std::path::Path::new(&c.representative).file_name() == file_name)
        {
            meta.extra.insert(
                "cluster_size".to_string(),
                (cluster.members.len() as u64).into(),
            );
        }
        meta.write_atomic(path)?;
    }

    for cluster in &outcome.clusters {
        log::info!(
            "near-dedup: cluster of {} kept representative {}",
            cluster.members.len(),
            cluster.representative
        );
    }

    Ok(())
}
