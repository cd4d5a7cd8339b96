//! `corpusforge classify` — applies a pretrained binary quality
//! classifier, emitting zero, one, or several weighted copies per document
//! depending on the configured mode.

use crate::commands::stage_args::StageArgs;
use crate::fs_util::discover_bundle_files;
use crate::report::report_results;
use crate::runner_select::select_runner;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use corpusforge_classify::{emit_count, ApplyMode, ConfigFileClassifier, TextClassifier};
use corpusforge_core::{read_bundle, write_bundle_atomic, Document, StageMeta};
use corpusforge_orchestrator::{plan_jobs, run_stage, FileJob, JobFn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassifyMode {
    Threshold,
    Bucket,
}

#[derive(Args, Clone, Debug)]
pub struct ClassifyCommand {
    #[command(flatten)]
    pub stage: StageArgs,

    /// JSON fixture mapping document text to a precomputed
    /// `{label, confidence}` pair — stands in for a real fastText-style
    /// model load (model training is out of scope here).
    #[arg(long)]
    pub classifier: PathBuf,

    #[arg(long, value_enum, default_value_t = ClassifyMode::Bucket)]
    pub mode: ClassifyMode,

    /// `pos_score` cutoff for `--mode threshold`.
    #[arg(long, default_value_t = 0.8)]
    pub threshold: f64,

    /// JSON array of `[min_score, repeat_count]` pairs for `--mode
    /// bucket`. Defaults to `{0.84→4, 0.72→3, 0.58→2, 0.36→1, 0.0→0}`
    /// when omitted.
    #[arg(long)]
    pub buckets: Option<PathBuf>,
}

pub fn run(cmd: ClassifyCommand) -> Result<()> {
    std::fs::create_dir_all(&cmd.stage.out_dir)?;

    let classifier: Arc<dyn TextClassifier> = Arc::new(ConfigFileClassifier::load(&cmd.classifier)?);
    let mode = Arc::new(resolve_mode(&cmd)?);

    let inputs = discover_bundle_files(&cmd.stage.data_dir)?;
    let mut rng = StdRng::seed_from_u64(cmd.stage.seed);
    let jobs = plan_jobs(&inputs, &cmd.stage.out_dir, cmd.stage.max_files, &mut rng);
    log::info!(
        "classify: {} of {} input files eligible for dispatch",
        jobs.len(),
        inputs.len()
    );

    let work: Arc<JobFn> = Arc::new(move |job: &FileJob| {
        process_file(job, classifier.as_ref(), &mode).map_err(|e| e.to_string())
    });

    let runner = select_runner(&cmd.stage.runner);
    let results = run_stage(jobs, runner.as_ref(), work).map_err(|e| anyhow::anyhow!(e))?;
    report_results("classify", &results);
    Ok(())
}

fn resolve_mode(cmd: &ClassifyCommand) -> Result<ApplyMode> {
    match cmd.mode {
        ClassifyMode::Threshold => Ok(ApplyMode::Threshold(cmd.threshold)),
        ClassifyMode::Bucket => match &cmd.buckets {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("reading bucket config {}", path.display()))?;
                let buckets: Vec<(f64, u32)> = serde_json::from_str(&contents)
                    .with_context(|| format!("parsing bucket config {}", path.display()))?;
                Ok(ApplyMode::Bucket(buckets))
            }
            None => Ok(ApplyMode::default_buckets()),
        },
    }
}

fn process_file(job: &FileJob, classifier: &dyn TextClassifier, mode: &ApplyMode) -> anyhow::Result<StageMeta> {
    let docs = read_bundle(&job.input)?;
    let mut meta = StageMeta::default();
    let mut emitted_docs = Vec::with_capacity(docs.len());
    let mut emitted_copies = 0u64;

    for doc in &docs {
        meta.total_docs += 1;
        let text = doc.to_text();
        let count = emit_count(classifier, &text, mode)?;
        if count == 0 {
            meta.record_rejection("below_quality_cutoff");
            continue;
        }
        meta.record_acceptance();
        emitted_copies += count as u64;
        for _ in 0..count {
            emitted_docs.push(Document::from_text(&text));
        }
    }

    meta.extra.insert("emitted_copies".to_string(), emitted_copies.into());

    write_bundle_atomic(&job.output, &emitted_docs)?;
    meta.write_atomic(&job.output)?;
    Ok(meta)
}
