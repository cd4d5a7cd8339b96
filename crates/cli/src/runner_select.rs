//! Resolves the shared `--single` / `--mp` / `--external-command` flags
//! every stage subcommand exposes into a concrete `JobRunner`,
//! interchangeable across an in-process/process pool and an external
//! batch scheduler stand-in.

use clap::Args;
use corpusforge_orchestrator::{ExternalRunner, FileJob, JobRunner, SingleRunner, ThreadPoolRunner};

#[derive(Args, Clone, Debug)]
pub struct RunnerArgs {
    /// Process files sequentially on the calling thread.
    #[arg(long)]
    pub single: bool,

    /// Process files across a worker pool (sized to `--workers`, or all
    /// available CPUs when omitted).
    #[arg(long)]
    pub mp: bool,

    /// Worker count for `--mp`. Ignored without `--mp`.
    #[arg(long)]
    pub workers: Option<usize>,

    /// Submit each file to an external command instead of running it
    /// in-process. `{input}` and `{output}` are substituted with the
    /// job's paths; the command is expected to write `{output}` plus its
    /// `.meta.json` sidecar itself. Models an external batch scheduler.
    #[arg(long)]
    pub external_command: Option<String>,
}

pub fn select_runner(args: &RunnerArgs) -> Box<dyn JobRunner> {
    if let Some(template) = &args.external_command {
        let template = template.clone();
        return Box::new(ExternalRunner::new(move |job| build_external_command(&template, job)));
    }
    if args.mp {
        let workers = args.workers.unwrap_or_else(num_cpus::get);
        return Box::new(ThreadPoolRunner::new(workers));
    }
    Box::new(SingleRunner)
}

fn build_external_command(template: &str, job: &FileJob) -> std::process::Command {
    let cmd_str = template
        .replace("{input}", &job.input.to_string_lossy())
        .replace("{output}", &job.output.to_string_lossy());
    let mut command = std::process::Command::new("sh");
    command.arg("-c").arg(cmd_str);
    command
}
