use crate::classifier::{ClassifierOutput, TextClassifier};
use crate::error::{ClassifyError, Result};
use serde::{Deserialize, Serialize};

/// How `QualityClassifierApply` turns a classifier score into emitted
/// copies of a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ApplyMode {
    /// Emit exactly one copy iff `pos_score >= threshold`, else drop.
    Threshold(f64),
    /// A monotone `(min_score, repeat_count)` list: the largest `min_score`
    /// not exceeding `pos_score` determines how many copies to emit.
    Bucket(Vec<(f64, u32)>),
}

impl ApplyMode {
    /// Default oversampling buckets: `{0.84→4, 0.72→3, 0.58→2, 0.36→1, 0.0→0}`.
    pub fn default_buckets() -> Self {
        ApplyMode::Bucket(vec![
            (0.84, 4),
            (0.72, 3),
            (0.58, 2),
            (0.36, 1),
            (0.0, 0),
        ])
    }

    fn validate(&self) -> Result<()> {
        if let ApplyMode::Bucket(buckets) = self {
            if buckets.is_empty() {
                return Err(ClassifyError::InvalidBuckets(
                    "bucket list must not be empty".to_string(),
                ));
            }
            let mut sorted = buckets.clone();
            sorted.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap());
            if sorted
                .windows(2)
                .any(|w| (w[0].0 - w[1].0).abs() < f64::EPSILON)
            {
                return Err(ClassifyError::InvalidBuckets(
                    "bucket min_scores must be distinct".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Runs a classifier over one document's text and returns how many copies
/// should be emitted downstream.
pub fn emit_count(classifier: &dyn TextClassifier, text: &str, mode: &ApplyMode) -> Result<u32> {
    mode.validate()?;
    let output: ClassifierOutput = classifier.classify(text)?;
    let pos_score = output.pos_score();

    match mode {
        ApplyMode::Threshold(threshold) => Ok(if pos_score >= *threshold { 1 } else { 0 }),
        ApplyMode::Bucket(buckets) => {
            let mut sorted = buckets.clone();
            sorted.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap());
            let repeat = sorted
                .iter()
                .find(|(min_score, _)| pos_score >= *min_score)
                .map(|(_, repeat_count)| *repeat_count)
                .unwrap_or(0);
            Ok(repeat)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{Label, StubClassifier};

    #[test]
    fn threshold_mode_emits_one_copy_at_or_above_threshold() {
        let classifier = StubClassifier::new(Label::Positive, 0.9);
        let count = emit_count(&classifier, "x", &ApplyMode::Threshold(0.8)).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn threshold_mode_drops_below_threshold() {
        let classifier = StubClassifier::new(Label::Positive, 0.5);
        let count = emit_count(&classifier, "x", &ApplyMode::Threshold(0.8)).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn default_buckets_oversample_high_confidence_documents() {
        let classifier = StubClassifier::new(Label::Positive, 0.9);
        let count = emit_count(&classifier, "x", &ApplyMode::default_buckets()).unwrap();
        assert_eq!(count, 4);
    }

    #[test]
    fn default_buckets_drop_low_confidence_documents() {
        let classifier = StubClassifier::new(Label::Negative, 0.9);
        let count = emit_count(&classifier, "x", &ApplyMode::default_buckets()).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn bucket_boundary_is_inclusive_of_min_score() {
        let classifier = StubClassifier::new(Label::Positive, 0.72);
        let count = emit_count(&classifier, "x", &ApplyMode::default_buckets()).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn rejects_bucket_lists_with_duplicate_min_scores() {
        let classifier = StubClassifier::new(Label::Positive, 0.9);
        let mode = ApplyMode::Bucket(vec![(0.5, 1), (0.5, 2)]);
        assert!(emit_count(&classifier, "x", &mode).is_err());
    }
}
