//! `corpusforge heuristic` — C4 line/page filter + Gopher document filter.

use crate::commands::stage_args::StageArgs;
use crate::fs_util::discover_bundle_files;
use crate::report::report_results;
use crate::runner_select::select_runner;
use anyhow::Result;
use clap::Args;
use corpusforge_core::{read_bundle, write_bundle_atomic, Document, StageMeta};
use corpusforge_heuristic::{HeuristicConfig, HeuristicFilter};
use corpusforge_orchestrator::{plan_jobs, run_stage, FileJob, JobFn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Clone, Debug)]
pub struct HeuristicCommand {
    #[command(flatten)]
    pub stage: StageArgs,

    /// TOML or JSON file overriding the default blacklist/threshold config.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(cmd: HeuristicCommand) -> Result<()> {
    std::fs::create_dir_all(&cmd.stage.out_dir)?;

    let config: HeuristicConfig = corpusforge_core::config::load_config(cmd.config.as_deref())?;
    config.validate()?;
    let filter = Arc::new(HeuristicFilter::new(config));

    let inputs = discover_bundle_files(&cmd.stage.data_dir)?;
    let mut rng = StdRng::seed_from_u64(cmd.stage.seed);
    let jobs = plan_jobs(&inputs, &cmd.stage.out_dir, cmd.stage.max_files, &mut rng);
    log::info!(
        "heuristic: {} of {} input files eligible for dispatch",
        jobs.len(),
        inputs.len()
    );

    let work: Arc<JobFn> = Arc::new(move |job: &FileJob| process_file(job, &filter).map_err(|e| e.to_string()));

    let runner = select_runner(&cmd.stage.runner);
    let results = run_stage(jobs, runner.as_ref(), work).map_err(|e| anyhow::anyhow!(e))?;
    report_results("heuristic", &results);
    Ok(())
}

fn process_file(job: &FileJob, filter: &HeuristicFilter) -> anyhow::Result<StageMeta> {
    let docs = read_bundle(&job.input)?;
    let mut meta = StageMeta::default();
    let mut survivors = Vec::with_capacity(docs.len());

    for doc in &docs {
        meta.total_docs += 1;
        let outcome = filter.filter_document(&doc.to_text());
        if outcome.kept {
            meta.record_acceptance();
            survivors.push(Document::from_text(&outcome.filtered_text));
        } else {
            let reason = outcome
                .reject_reason
                .expect("a rejected document always carries a reason");
            meta.record_rejection(reason.as_str());
        }
    }

    write_bundle_atomic(&job.output, &survivors)?;
    meta.write_atomic(&job.output)?;
    Ok(meta)
}
