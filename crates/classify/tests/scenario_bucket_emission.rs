use corpusforge_classify::{emit_count, ApplyMode, Label, StubClassifier};
use pretty_assertions::assert_eq;

/// pos_score = 0.75 against the default buckets emits exactly three copies.
#[test]
fn bucket_emission_at_pos_score_0_75() {
    let classifier = StubClassifier::new(Label::Positive, 0.75);
    let count = emit_count(&classifier, "some document text", &ApplyMode::default_buckets()).unwrap();
    assert_eq!(count, 3);
}
