use crate::error::{ClassifyError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// The binary label a quality classifier returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierOutput {
    pub label: Label,
    pub confidence: f32,
}

impl ClassifierOutput {
    /// `confidence` if `label == Positive`, `1 - confidence` otherwise — the
    /// single scalar every downstream mode (threshold, bucket) operates on.
    pub fn pos_score(&self) -> f64 {
        match self.label {
            Label::Positive => self.confidence as f64,
            Label::Negative => 1.0 - self.confidence as f64,
        }
    }
}

/// A quality classifier handle, explicitly constructed once per worker and
/// passed down the call chain rather than loaded as a process-wide global.
pub trait TextClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<ClassifierOutput>;
}

/// A fixed-output test double: always returns the same label/confidence
/// regardless of input. Used to exercise `QualityClassifierApply`'s bucket
/// and threshold logic without a real model.
#[derive(Debug, Clone, Copy)]
pub struct StubClassifier {
    output: ClassifierOutput,
}

impl StubClassifier {
    pub fn new(label: Label, confidence: f32) -> Self {
        Self {
            output: ClassifierOutput { label, confidence },
        }
    }
}

impl TextClassifier for StubClassifier {
    fn classify(&self, _text: &str) -> Result<ClassifierOutput> {
        Ok(self.output)
    }
}

/// Stands in for a real fastText-style model load (model training is an
/// explicit non-goal): a JSON fixture mapping exact document text to a
/// precomputed `(label, confidence)` pair. A miss on lookup — text not
/// present in the fixture — classifies as confidently negative rather than
/// erroring, since an unmapped document is simply one the fixture wasn't
/// built to cover.
pub struct ConfigFileClassifier {
    outputs: HashMap<String, ClassifierOutput>,
}

#[derive(Debug, Deserialize)]
struct FixtureEntry {
    label: Label,
    confidence: f32,
}

impl ConfigFileClassifier {
    /// Fails with `ClassifierUnavailable` if `path` does not exist — the
    /// fatal-at-startup check a missing model must trigger.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ClassifyError::ClassifierUnavailable(format!(
                "classifier fixture not found at {}",
                path.display()
            )));
        }
        let bytes = std::fs::read(path)
            .map_err(|e| corpusforge_core::CoreError::io(path.display().to_string(), e))?;
        let raw: HashMap<String, FixtureEntry> = serde_json::from_slice(&bytes)
            .map_err(corpusforge_core::CoreError::from)?;
        let outputs = raw
            .into_iter()
            .map(|(text, entry)| {
                (
                    text,
                    ClassifierOutput {
                        label: entry.label,
                        confidence: entry.confidence,
                    },
                )
            })
            .collect();
        log::info!("loaded classifier fixture from {} ({} entries)", path.display(), outputs.len());
        Ok(Self { outputs })
    }
}

impl TextClassifier for ConfigFileClassifier {
    fn classify(&self, text: &str) -> Result<ClassifierOutput> {
        Ok(self.outputs.get(text).copied().unwrap_or(ClassifierOutput {
            label: Label::Negative,
            confidence: 1.0,
        }))
    }
}
