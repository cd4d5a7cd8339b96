//! Ties the reservation protocol (`reservation.rs`) to a `JobRunner`
//! (`runner.rs`) to produce the Orchestrator's `run_stage` entry point used
//! by every stage's CLI command.

use crate::reservation::{create_reservation, is_eligible};
use crate::runner::{FileJob, JobFn, JobOutcome, JobRunner};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The output path a stage writes for a given input file: same file name,
/// relocated under `out_dir`, the convention used by every stage.
pub fn output_path_for(out_dir: &Path, input: &Path) -> PathBuf {
    let name = input.file_name().unwrap_or_default();
    out_dir.join(name)
}

/// Builds the list of jobs eligible for dispatch: inputs whose output is
/// neither present nor reserved. When `max_files` bounds the run, the
/// eligible set is shuffled before truncating, so a bounded run samples
/// across the corpus instead of always taking a fixed prefix.
pub fn plan_jobs(
    input_files: &[PathBuf],
    out_dir: &Path,
    max_files: Option<usize>,
    rng: &mut impl Rng,
) -> Vec<FileJob> {
    let mut eligible: Vec<FileJob> = input_files
        .iter()
        .map(|input| FileJob {
            input: input.clone(),
            output: output_path_for(out_dir, input),
        })
        .filter(|job| is_eligible(&job.output))
        .collect();

    if let Some(max_files) = max_files {
        eligible.shuffle(rng);
        eligible.truncate(max_files);
    }

    eligible
}

/// Claims every job's output by writing its reservation sentinel before
/// dispatch.
pub fn reserve_all(jobs: &[FileJob]) -> corpusforge_core::Result<()> {
    for job in jobs {
        create_reservation(&job.output)?;
    }
    Ok(())
}

/// Reserves and runs `jobs` through `runner`, draining the bounded
/// completion channel `JobRunner` exposes to exhaustion.
pub fn run_stage(
    jobs: Vec<FileJob>,
    runner: &dyn JobRunner,
    work: Arc<JobFn>,
) -> corpusforge_core::Result<Vec<(PathBuf, JobOutcome)>> {
    reserve_all(&jobs)?;
    let rx = runner.run(jobs, work);
    Ok(rx.iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::SingleRunner;
    use corpusforge_core::StageMeta;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn write_input(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, "doc text").unwrap();
        path
    }

    #[test]
    fn plan_jobs_skips_already_completed_outputs() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let a = write_input(src.path(), "a.txt");
        let b = write_input(src.path(), "b.txt");

        let done_output = output_path_for(out.path(), &a);
        std::fs::write(&done_output, "already done").unwrap();
        StageMeta::default().write_atomic(&done_output).unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let jobs = plan_jobs(&[a, b.clone()], out.path(), None, &mut rng);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].input, b);
    }

    #[test]
    fn plan_jobs_truncates_to_max_files_deterministically_given_a_seed() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let files: Vec<_> = (0..10)
            .map(|i| write_input(src.path(), &format!("f{i}.txt")))
            .collect();

        let mut rng_a = StdRng::seed_from_u64(42);
        let jobs_a = plan_jobs(&files, out.path(), Some(3), &mut rng_a);
        let mut rng_b = StdRng::seed_from_u64(42);
        let jobs_b = plan_jobs(&files, out.path(), Some(3), &mut rng_b);

        assert_eq!(jobs_a.len(), 3);
        let inputs_a: Vec<_> = jobs_a.iter().map(|j| j.input.clone()).collect();
        let inputs_b: Vec<_> = jobs_b.iter().map(|j| j.input.clone()).collect();
        assert_eq!(inputs_a, inputs_b);
    }

    #[test]
    fn run_stage_reserves_before_dispatch_and_drains_every_result() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let a = write_input(src.path(), "a.txt");
        let b = write_input(src.path(), "b.txt");

        let mut rng = StdRng::seed_from_u64(7);
        let jobs = plan_jobs(&[a, b], out.path(), None, &mut rng);
        assert_eq!(jobs.len(), 2);

        for job in &jobs {
            assert!(!crate::reservation::reservation_path(&job.output).exists());
        }

        let runner = SingleRunner;
        let work: Arc<JobFn> = Arc::new(|job| {
            std::fs::write(&job.output, "processed").map_err(|e| e.to_string())?;
            Ok(StageMeta {
                total_docs: 1,
                accepted_docs_ct: 1,
                ..Default::default()
            })
        });

        let results = run_stage(jobs.clone(), &runner, work).unwrap();
        assert_eq!(results.len(), 2);
        for job in &jobs {
            assert!(crate::reservation::reservation_path(&job.output).exists());
            assert!(job.output.exists());
        }
    }
}
