use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrchestratorError>;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error(transparent)]
    Core(#[from] corpusforge_core::CoreError),

    /// An external-runner child process exited non-zero or could not be spawned.
    #[error("job for {path} failed: {reason}")]
    JobFailed { path: String, reason: String },
}
