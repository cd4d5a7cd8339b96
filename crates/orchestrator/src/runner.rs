//! `JobRunner`: dispatches one job per input file behind a single
//! `submit`-shaped contract, interchangeable across an in-process thread
//! pool, a process pool sized to available CPUs, or an external batch
//! scheduler.
//!
//! Rather than submitting everything and iterating over completions after
//! the fact, every runner pushes `(PathBuf, JobOutcome)` onto a bounded
//! channel as each job finishes; the caller drains the channel to
//! completion, and dropping the receiver is the cancellation path — the
//! channel close propagates back through the sender's blocking `send`.

use corpusforge_core::StageMeta;
use std::path::PathBuf;
use std::sync::mpsc::{sync_channel, Receiver};
use std::sync::Arc;

/// One unit of dispatchable work: transform `input` into `output`.
#[derive(Debug, Clone)]
pub struct FileJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Result of running one `FileJob`. Worker-local errors are caught and
/// attached here rather than propagated, so one failing file never tears
/// down the pool.
#[derive(Debug, Clone)]
pub enum JobOutcome {
    Completed { meta: StageMeta },
    Failed { reason: String },
}

/// The per-file work closure every runner invokes: given a job, produce a
/// `StageMeta` (the caller is responsible for having already written the
/// output file and its sidecar — the runner only reports the outcome).
pub type JobFn = dyn Fn(&FileJob) -> Result<StageMeta, String> + Send + Sync;

/// Bounded concurrency level used to size the completion channel so a slow
/// consumer applies backpressure to the dispatcher rather than letting
/// results queue without limit.
const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Shared dispatch contract: every runner accepts the same jobs and work
/// closure and streams `(path, outcome)` pairs back as they complete.
pub trait JobRunner {
    fn run(&self, jobs: Vec<FileJob>, work: Arc<JobFn>) -> Receiver<(PathBuf, JobOutcome)>;
}

fn run_one(job: &FileJob, work: &JobFn) -> (PathBuf, JobOutcome) {
    let outcome = match work(job) {
        Ok(meta) => JobOutcome::Completed { meta },
        Err(reason) => {
            log::warn!("job failed for {}: {reason}", job.input.display());
            JobOutcome::Failed { reason }
        }
    };
    (job.input.clone(), outcome)
}

/// Sequential dispatch on the calling thread (`--single`). Jobs complete
/// in input order, extending the within-file in-order emission guarantee
/// to the file level.
pub struct SingleRunner;

impl JobRunner for SingleRunner {
    fn run(&self, jobs: Vec<FileJob>, work: Arc<JobFn>) -> Receiver<(PathBuf, JobOutcome)> {
        let (tx, rx) = sync_channel(DEFAULT_CHANNEL_CAPACITY.max(jobs.len().max(1)));
        for job in &jobs {
            let result = run_one(job, &work);
            if tx.send(result).is_err() {
                break;
            }
        }
        rx
    }
}

/// Parallel dispatch over a `rayon` thread pool sized to `--mp` or
/// `num_cpus::get()` — a pool is the idiomatic Rust analogue of a
/// process-per-task executor for CPU-bound, no-shared-state work.
pub struct ThreadPoolRunner {
    pool: rayon::ThreadPool,
}

impl ThreadPoolRunner {
    pub fn new(workers: usize) -> Self {
        let workers = workers.max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .expect("building a rayon thread pool with a positive thread count cannot fail");
        Self { pool }
    }

    pub fn sized_to_cpus() -> Self {
        Self::new(num_cpus::get())
    }
}

impl JobRunner for ThreadPoolRunner {
    fn run(&self, jobs: Vec<FileJob>, work: Arc<JobFn>) -> Receiver<(PathBuf, JobOutcome)> {
        let (tx, rx) = sync_channel(DEFAULT_CHANNEL_CAPACITY);
        self.pool.scope(move |scope| {
            for job in jobs {
                let tx = tx.clone();
                let work = Arc::clone(&work);
                scope.spawn(move |_| {
                    let result = run_one(&job, &work);
                    // Channel-closed means the receiver was dropped: treat
                    // it as the cancellation signal and stop sending.
                    let _ = tx.send(result);
                });
            }
        });
        rx
    }
}

/// Models an external batch scheduler without requiring a real cluster:
/// `command_for` builds the `Command` that would submit one file to that
/// scheduler (e.g. re-invoking this binary with `--single` on a single
/// input), and `run` drives those commands through the same bounded-channel
/// contract as the other runners. The process's own exit code plus the
/// presence of the job's `.meta.json` sidecar stands in for the
/// scheduler's completion notification.
pub struct ExternalRunner {
    command_for: Box<dyn Fn(&FileJob) -> std::process::Command + Send + Sync>,
}

impl ExternalRunner {
    pub fn new(command_for: impl Fn(&FileJob) -> std::process::Command + Send + Sync + 'static) -> Self {
        Self {
            command_for: Box::new(command_for),
        }
    }
}

impl JobRunner for ExternalRunner {
    fn run(&self, jobs: Vec<FileJob>, _work: Arc<JobFn>) -> Receiver<(PathBuf, JobOutcome)> {
        let (tx, rx) = sync_channel(DEFAULT_CHANNEL_CAPACITY.max(jobs.len().max(1)));
        for job in jobs {
            let mut command = (self.command_for)(&job);
            let outcome = match command.status() {
                Ok(status) if status.success() => {
                    match StageMeta::load(&job.output) {
                        Ok(meta) => JobOutcome::Completed { meta },
                        Err(e) => JobOutcome::Failed {
                            reason: format!("job exited 0 but no meta sidecar: {e}"),
                        },
                    }
                }
                Ok(status) => JobOutcome::Failed {
                    reason: format!("external job exited with {status}"),
                },
                Err(e) => JobOutcome::Failed {
                    reason: format!("failed to spawn external job: {e}"),
                },
            };
            if tx.send((job.input, outcome)).is_err() {
                break;
            }
        }
        rx
    }
}
