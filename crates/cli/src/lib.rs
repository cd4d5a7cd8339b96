//! `corpusforge`: a per-stage command line front end over the pipeline
//! crates, sharing one reservation-backed orchestrator across every stage.

pub mod commands;
pub mod fs_util;
pub mod report;
pub mod runner_select;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{classify::ClassifyCommand, exact_dedup::ExactDedupCommand, heuristic::HeuristicCommand,
    near_dedup::NearDedupCommand, pii::PiiCommand, sweep::SweepCommand};

#[derive(Parser)]
#[command(name = "corpusforge")]
#[command(about = "Large-scale web corpus curation pipeline", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: log only warnings/errors.
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// S1: C4 line/page filter + Gopher document filter.
    Heuristic(HeuristicCommand),
    /// S2: mask emails, phone numbers, and IPv4 addresses.
    Pii(PiiCommand),
    /// S3: cross-corpus exact line deduplication.
    ExactDedup(ExactDedupCommand),
    /// S4: MinHash + banded LSH near-duplicate document deduplication.
    NearDedup(NearDedupCommand),
    /// S5: apply a pretrained quality classifier.
    Classify(ClassifyCommand),
    /// Reclaim stale reservation sentinels left by a crashed worker.
    Sweep(SweepCommand),
}

/// Parses arguments, wires up logging the way every subcommand expects,
/// and dispatches to the selected stage. Returns an error for the process
/// to report and exit non-zero on; exits 0 on success.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Heuristic(cmd) => commands::heuristic::run(cmd),
        Commands::Pii(cmd) => commands::pii::run(cmd),
        Commands::ExactDedup(cmd) => commands::exact_dedup::run(cmd),
        Commands::NearDedup(cmd) => commands::near_dedup::run(cmd),
        Commands::Classify(cmd) => commands::classify::run(cmd),
        Commands::Sweep(cmd) => commands::sweep::run(cmd),
    }
}
