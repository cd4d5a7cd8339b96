//! Flags common to every per-file stage command.

use crate::runner_select::RunnerArgs;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Clone, Debug)]
pub struct StageArgs {
    /// Directory of input document-bundle files.
    #[arg(long)]
    pub data_dir: PathBuf,

    /// Directory to write output document-bundle files and `.meta.json` sidecars to.
    #[arg(long)]
    pub out_dir: PathBuf,

    /// Cap the number of files dispatched this run. When set, the eligible
    /// file set is shuffled (seeded by `--seed`) before truncating.
    #[arg(long)]
    pub max_files: Option<usize>,

    /// Seed for the `max_files` sampling shuffle. Defaults to 42 so runs
    /// are reproducible out of the box.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    #[command(flatten)]
    pub runner: RunnerArgs,
}
