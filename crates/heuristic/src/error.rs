use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeuristicError>;

#[derive(Error, Debug)]
pub enum HeuristicError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Core(#[from] corpusforge_core::CoreError),
}
