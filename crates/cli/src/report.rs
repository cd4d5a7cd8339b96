//! Stage-completion logging shared by every subcommand.

use corpusforge_orchestrator::JobOutcome;
use std::path::PathBuf;

/// Logs a one-line summary per completed/failed file and an aggregate
/// totals line. Never panics on a failed job — failures are already
/// tagged by the worker and reported, not raised here.
pub fn report_results(stage: &str, results: &[(PathBuf, JobOutcome)]) {
    let mut completed = 0u64;
    let mut failed = 0u64;

    for (path, outcome) in results {
        match outcome {
            JobOutcome::Completed { meta } => {
                completed += 1;
                log::info!(
                    "{stage}: {} -> accepted {} / rejected {} of {} docs",
                    path.display(),
                    meta.accepted_docs_ct,
                    meta.rejected_docs_ct,
                    meta.total_docs
                );
            }
            JobOutcome::Failed { reason } => {
                failed += 1;
                log::warn!("{stage}: {} failed: {reason}", path.display());
            }
        }
    }

    log::info!("{stage}: {completed} completed, {failed} failed, {} total", results.len());
}
