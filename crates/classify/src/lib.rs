//! Applies a pretrained binary quality classifier to documents, in either
//! threshold or oversampling-bucket mode.

pub mod apply;
pub mod classifier;
pub mod error;

pub use apply::{emit_count, ApplyMode};
pub use classifier::{ClassifierOutput, ConfigFileClassifier, Label, StubClassifier, TextClassifier};
pub use error::{ClassifyError, Result};
