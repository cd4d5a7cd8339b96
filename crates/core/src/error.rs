use thiserror::Error;

/// Result type used throughout the corpus pipeline's core crate.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Error kinds shared by every pipeline stage.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A path could not be read or written.
    #[error("IO error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Bytes could not be decoded even with lossy replacement. Rare in practice
    /// since `String::from_utf8_lossy` always recovers something.
    #[error("decode error: {0}")]
    Decode(String),

    /// A sentinel was expected but missing; logged, the stream continues.
    #[error("format error: {0}")]
    Format(String),

    /// Invalid configuration (e.g. inverted bounds, bad num_hashes/num_bands ratio).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A model/classifier fixture was required but unavailable. Fatal at startup.
    #[error("classifier unavailable: {0}")]
    ClassifierUnavailable(String),

    /// JSON (de)serialization failure, usually while reading/writing a `.meta.json` sidecar.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
