//! `corpusforge pii` — regex-driven masking of emails, phone numbers,
//! and IPv4 addresses.

use crate::commands::stage_args::StageArgs;
use crate::fs_util::discover_bundle_files;
use crate::report::report_results;
use crate::runner_select::select_runner;
use anyhow::Result;
use clap::Args;
use corpusforge_core::{read_bundle, write_bundle_atomic, Document, StageMeta};
use corpusforge_orchestrator::{plan_jobs, run_stage, FileJob, JobFn};
use corpusforge_pii::PiiMasker;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

#[derive(Args, Clone, Debug)]
pub struct PiiCommand {
    #[command(flatten)]
    pub stage: StageArgs,
}

pub fn run(cmd: PiiCommand) -> Result<()> {
    std::fs::create_dir_all(&cmd.stage.out_dir)?;

    let masker = Arc::new(PiiMasker::new());
    let inputs = discover_bundle_files(&cmd.stage.data_dir)?;
    let mut rng = StdRng::seed_from_u64(cmd.stage.seed);
    let jobs = plan_jobs(&inputs, &cmd.stage.out_dir, cmd.stage.max_files, &mut rng);
    log::info!(
        "pii: {} of {} input files eligible for dispatch",
        jobs.len(),
        inputs.len()
    );

    let work: Arc<JobFn> = Arc::new(move |job: &FileJob| process_file(job, &masker).map_err(|e| e.to_string()));

    let runner = select_runner(&cmd.stage.runner);
    let results = run_stage(jobs, runner.as_ref(), work).map_err(|e| anyhow::anyhow!(e))?;
    report_results("pii", &results);
    Ok(())
}

fn process_file(job: &FileJob, masker: &PiiMasker) -> anyhow::Result<StageMeta> {
    let docs = read_bundle(&job.input)?;
    let mut meta = StageMeta::default();
    let mut emails = 0u64;
    let mut phone_numbers = 0u64;
    let mut ips = 0u64;

    let masked_docs: Vec<Document> = docs
        .iter()
        .map(|doc| {
            meta.total_docs += 1;
            meta.record_acceptance();
            let (text, counts) = masker.mask(&doc.to_text());
            emails += counts.emails;
            phone_numbers += counts.phone_numbers;
            ips += counts.ips;
            Document::from_text(&text)
        })
        .collect();

    meta.extra.insert("emails_masked".to_string(), emails.into());
    meta.extra.insert("phone_numbers_masked".to_string(), phone_numbers.into());
    meta.extra.insert("ips_masked".to_string(), ips.into());

    write_bundle_atomic(&job.output, &masked_docs)?;
    meta.write_atomic(&job.output)?;
    Ok(meta)
}
