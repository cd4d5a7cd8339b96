use thiserror::Error;

pub type Result<T> = std::result::Result<T, PiiError>;

#[derive(Error, Debug)]
pub enum PiiError {
    #[error(transparent)]
    Core(#[from] corpusforge_core::CoreError),
}
