use thiserror::Error;

pub type Result<T> = std::result::Result<T, DedupError>;

#[derive(Error, Debug)]
pub enum DedupError {
    #[error(transparent)]
    Core(#[from] corpusforge_core::CoreError),
}
