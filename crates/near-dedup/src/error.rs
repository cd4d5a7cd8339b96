use thiserror::Error;

pub type Result<T> = std::result::Result<T, NearDedupError>;

#[derive(Error, Debug)]
pub enum NearDedupError {
    #[error(transparent)]
    Core(#[from] corpusforge_core::CoreError),

    #[error("invalid near-dedup config: {0}")]
    Config(String),

    #[error("signature checkpoint at {path} has {found} hashes, configured for {expected}")]
    CheckpointMismatch {
        path: String,
        found: usize,
        expected: usize,
    },

    #[error("failed to decode signature checkpoint: {0}")]
    Checkpoint(String),
}
