use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClassifyError>;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error(transparent)]
    Core(#[from] corpusforge_core::CoreError),

    #[error("classifier unavailable: {0}")]
    ClassifierUnavailable(String),

    #[error("invalid bucket configuration: {0}")]
    InvalidBuckets(String),
}
