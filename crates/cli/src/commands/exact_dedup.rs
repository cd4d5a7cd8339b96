//! `corpusforge exact-dedup` — cross-corpus exact line deduplication.
//! Pass 1 (count) is a corpus-wide map-reduce over every input file and is
//! run directly, not through the orchestrator's per-file reservation
//! protocol: the duplicate map is coordinator-level shared state that must
//! be complete before any file can be rewritten. Pass 2 (rewrite) is
//! per-file independent once that map exists, so it goes through the same
//! reservation + `JobRunner` path every other stage uses.

use crate::commands::stage_args::StageArgs;
use crate::fs_util::discover_bundle_files;
use crate::report::report_results;
use crate::runner_select::select_runner;
use anyhow::Result;
use clap::Args;
use corpusforge_exact_dedup::{build_duplicate_map, rewrite_documents, CountMap};
use corpusforge_orchestrator::{plan_jobs, run_stage, FileJob, JobFn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

#[derive(Args, Clone, Debug)]
pub struct ExactDedupCommand {
    #[command(flatten)]
    pub stage: StageArgs,
}

pub fn run(cmd: ExactDedupCommand) -> Result<()> {
    std::fs::create_dir_all(&cmd.stage.out_dir)?;

    let inputs = discover_bundle_files(&cmd.stage.data_dir)?;
    log::info!("exact-dedup: counting line hashes across {} files", inputs.len());
    let dup_counts = Arc::new(build_duplicate_map(&inputs)?);

    let mut rng = StdRng::seed_from_u64(cmd.stage.seed);
    let jobs = plan_jobs(&inputs, &cmd.stage.out_dir, cmd.stage.max_files, &mut rng);
    log::info!(
        "exact-dedup: {} of {} input files eligible for the rewrite pass",
        jobs.len(),
        inputs.len()
    );

    let work: Arc<JobFn> = Arc::new(move |job: &FileJob| process_file(job, &dup_counts).map_err(|e| e.to_string()));

    let runner = select_runner(&cmd.stage.runner);
    let results = run_stage(jobs, runner.as_ref(), work).map_err(|e| anyhow::anyhow!(e))?;
    report_results("exact-dedup", &results);
    Ok(())
}

fn process_file(job: &FileJob, dup_counts: &CountMap) -> anyhow::Result<corpusforge_core::StageMeta> {
    let docs = corpusforge_core::read_bundle(&job.input)?;
    let (survivors, stats) = rewrite_documents(&docs, dup_counts);

    let mut meta = corpusforge_core::StageMeta {
        total_docs: docs.len() as u64,
        accepted_docs_ct: stats.docs_kept,
        rejected_docs_ct: stats.docs_dropped,
        ..Default::default()
    };
    if stats.docs_dropped > 0 {
        meta.rejected_docs_by_type
            .insert("below_surviving_token_floor".to_string(), stats.docs_dropped);
    }
    meta.extra.insert("total_lines".to_string(), stats.total_lines.into());
    meta.extra.insert("duplicate_lines".to_string(), stats.duplicate_lines.into());

    corpusforge_core::write_bundle_atomic(&job.output, &survivors)?;
    meta.write_atomic(&job.output)?;
    Ok(meta)
}
